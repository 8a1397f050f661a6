use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracklist::config::StoreFormat;

/// Returns the version string, including the git hash for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tracklist", version = get_version())]
#[command(about = "A sectioned personal list manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Store file name inside the data directory
    #[arg(long, global = true)]
    pub file: Option<String>,

    /// Store format
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Section to operate on (defaults to the first known section)
    #[arg(short, long, global = true)]
    pub section: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the section's items
    #[command(alias = "ls")]
    List,

    /// Add an item to the section
    #[command(alias = "a")]
    Add {
        /// Item text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Replace an item's text
    Update {
        /// Item number (1-based)
        index: usize,

        /// New item text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete an item
    #[command(alias = "rm")]
    Delete {
        /// Item number (1-based)
        index: usize,
    },

    /// Show the known sections
    Sections,

    /// Create the store file if it does not exist
    Init,

    /// Print the store file path
    Path,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for StoreFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => StoreFormat::Text,
            FormatArg::Json => StoreFormat::Json,
        }
    }
}
