use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vibewatch")]
#[command(about = "Brand reputation monitor for Reddit mentions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch recent mentions of a keyword and print a reputation report
    Run {
        /// Brand or keyword to track
        keyword: String,

        /// Maximum number of posts to analyze
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the snapshot as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Classify the sentiment of a single text
    Classify {
        /// Text to classify
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
