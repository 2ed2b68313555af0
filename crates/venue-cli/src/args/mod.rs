// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - Namespaces (speakers, fav) group related operations
// - Improves --help discoverability and conceptual clarity
// - Example: `speakers show <slug>` vs flat `show-speaker`

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "venue")]
#[command(about = "Browse a conference program: agenda, speakers, favorites", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to VENUE_PATH or the system data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
