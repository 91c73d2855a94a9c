use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "alertdecoder", about = "Decode free-form trading alert messages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode an alert message (reads stdin when no message argument is given)
    Decode {
        /// The pasted alert text
        message: Option<String>,
        /// Emit the decoded record as JSON instead of the text report
        #[arg(long)]
        json: bool,
        /// Persist the decoded alert to the log
        #[arg(long)]
        save: bool,
        /// Where the message came from (e.g. a channel name)
        #[arg(long)]
        source: Option<String>,
    },
    /// Query the alert log
    Query {
        /// Ticker symbol to filter by
        #[arg(long)]
        ticker: Option<String>,
        /// Bias to filter by (bullish, bearish, neutral)
        #[arg(long)]
        bias: Option<String>,
        /// Action to filter by (buy, sell, short, watch, unspecified)
        #[arg(long)]
        action: Option<String>,
        /// Start of time range (YYYY-MM-DD or RFC3339)
        #[arg(long)]
        since: Option<String>,
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Show one stored alert as a text report
    Show {
        /// Alert ID
        id: String,
    },
    /// Show alert log statistics
    Stats,
    /// Export stored alerts as JSON
    Export {
        /// Ticker symbol to filter by
        #[arg(long)]
        ticker: Option<String>,
        /// Start of time range (YYYY-MM-DD or RFC3339)
        #[arg(long)]
        since: Option<String>,
    },
}
