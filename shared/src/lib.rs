// Data model and number formatting shared by the announcer and any other front end.
// Everything in here is pure: no I/O, no clocks, no global state.

pub mod models;
pub mod utils;

pub use models::{AddressParts, MessageFields, RateInput, RateLog};
pub use utils::indian_format::group_digits;
