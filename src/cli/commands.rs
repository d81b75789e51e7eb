use clap::{Parser, Subcommand};

/// `Headline Spark` - story-driven headline analysis and ideas.
#[derive(Parser, Debug)]
#[command(name = "headline-spark")]
#[command(version = "0.1.0")]
#[command(
    about = "Score headlines for narrative strength and generate story-driven ideas.",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a headline with the rule engine, plus an AI critique
    Analyze {
        /// The headline to analyze
        title: String,

        /// Skip the AI critique and run only the rule engine
        #[arg(long)]
        offline: bool,

        /// Temperature for the AI critique (0.0 - 2.0)
        #[arg(short, long)]
        temperature: Option<f64>,
    },

    /// Generate three story-driven headline ideas
    Ideas {
        /// Product description to ground the ideas (omit for generic templates)
        #[arg(short, long)]
        description: Option<String>,
    },
}
