// Command-line form layer: flags stand in for the rate form's input fields.
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use shared::models::RateInput;

#[derive(Debug, Parser)]
#[command(
    name = "rate-announcer",
    version,
    about = "Formats and shares the daily gold and silver rate announcement"
)]
pub struct Cli {
    /// JSON settings file (defaults to the built-in settings)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the composed message
    Preview(FormArgs),
    /// Copy the composed message to the clipboard
    Copy(FormArgs),
    /// Save the composed message as a dated text file
    Download {
        #[command(flatten)]
        form: FormArgs,
        /// Target directory (defaults to share.download_dir)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// Preview, log the rates remotely and open WhatsApp with the message
    Share {
        #[command(flatten)]
        form: FormArgs,
        /// Print the WhatsApp link instead of opening a browser
        #[arg(long)]
        no_open: bool,
    },
    /// Print the WhatsApp share link
    Url(FormArgs),
    /// Print the form with the daily fields reset, as JSON
    Clear(FormArgs),
}

#[derive(Debug, Args, Clone, Default)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub shop: String,
    /// Display date (defaults to today, e.g. "17 October 2026")
    #[arg(long)]
    pub date: Option<String>,
    /// 22ct gold rate per gram
    #[arg(long, default_value = "")]
    pub gold: String,
    /// Silver rate per 10 grams
    #[arg(long, default_value = "")]
    pub silver: String,
    /// Gattu (24ct) gold rate, optional
    #[arg(long, default_value = "")]
    pub gattu: String,
    /// Address, optionally "street|contact|map-link"
    #[arg(long, default_value = "")]
    pub address: String,
    /// Extra contact line
    #[arg(long, default_value = "")]
    pub extra: String,
}

impl FormArgs {
    pub fn into_input(self, today: impl FnOnce() -> String) -> RateInput {
        RateInput {
            shop_name: self.shop,
            date: self.date.unwrap_or_else(today),
            gold_rate_raw: self.gold,
            silver_rate_raw: self.silver,
            gattu_rate_raw: self.gattu,
            address: self.address,
            extra_contact: self.extra,
        }
    }
}
