use clap::{Parser, Subcommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "quack")]
#[command(about = "Resolve bang queries (!gh rust cli) to destination URLs", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a query and print the destination URL
    #[command(alias = "r")]
    Resolve {
        /// The query, bang included (e.g. `!gh rust cli` or `rust cli gh!`)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// One-shot default bang for this query; persisted when valid
        #[arg(short, long)]
        default: Option<String>,

        /// Bypass block checks for this one resolution
        #[arg(long = "override")]
        override_block: bool,

        /// Also launch the URL in the browser ($BROWSER or platform opener)
        #[arg(short, long)]
        open: bool,
    },

    /// Search the bang catalog
    #[command(alias = "s")]
    Search {
        /// Search term; omit to list the catalog in order
        term: Option<String>,

        /// Maximum results to show (0 = all)
        #[arg(short = 'n', long, default_value_t = 25)]
        limit: usize,
    },

    /// Block a bang (root, search, or both redirects)
    Block {
        /// Bang tag, with or without the `!`
        tag: String,

        /// Which redirects to block
        #[arg(short, long, default_value = "both")]
        mode: String,
    },

    /// Remove all blocks from a bang
    Unblock {
        /// Bang tag, with or without the `!`
        tag: String,
    },

    /// Advance a bang through the block cycle (none → both → root → search)
    Cycle {
        /// Bang tag, with or without the `!`
        tag: String,
    },

    /// List blocked bangs
    Blocked,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default-bang)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
