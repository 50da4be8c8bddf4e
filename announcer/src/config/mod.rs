// Announcer configuration, loaded from assets/config/default.json or a user file.
pub mod settings;

pub use settings::{
    AddressStyle, AnnouncerSettings, MessageSettings, ShareSettings, TimingSettings,
    WebhookSettings,
};
