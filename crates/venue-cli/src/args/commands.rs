use super::enums::{ExportFormat, ExportTarget};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Install program data into the data directory")]
    Init {
        /// Program data file (JSON) to install
        #[arg(long)]
        program: PathBuf,

        /// Optional speaker image mapping (JSON) to install
        #[arg(long)]
        images: Option<PathBuf>,

        /// Override the shipped access code
        #[arg(long)]
        access_code: Option<String>,

        /// Replace already-installed program data
        #[arg(long)]
        force: bool,
    },

    #[command(about = "List conference days")]
    Days,

    #[command(about = "Show a day's agenda grouped by theme")]
    Agenda {
        /// Day key, e.g. myopia_day
        #[arg(long)]
        day: String,

        /// Case-insensitive search over titles, descriptions, and names
        #[arg(long)]
        query: Option<String>,

        /// Keep only one theme ("All" disables the filter)
        #[arg(long)]
        theme: Option<String>,

        /// Keep only favorited sessions
        #[arg(long)]
        favorites: bool,
    },

    #[command(about = "Browse the speaker directory")]
    Speakers {
        #[command(subcommand)]
        command: SpeakersCommand,
    },

    #[command(about = "Manage favorited sessions")]
    Fav {
        #[command(subcommand)]
        command: FavCommand,
    },

    #[command(about = "Enter the event access code")]
    Unlock {
        code: String,
    },

    #[command(about = "Forget the remembered access code")]
    Lock,

    #[command(about = "Export derived views for offline use")]
    Export {
        target: ExportTarget,

        /// Output format
        #[arg(long = "as", value_enum, default_value = "csv")]
        export_format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum SpeakersCommand {
    #[command(about = "List the directory, grouped by first letter")]
    List {
        /// Keep only one letter bucket (e.g. "J", or "#")
        #[arg(long)]
        letter: Option<String>,
    },

    #[command(about = "Show one profile with its sessions")]
    Show {
        /// Speaker slug, e.g. jane-doe
        slug: String,
    },
}

#[derive(Subcommand)]
pub enum FavCommand {
    #[command(about = "Star or unstar a session by identifier")]
    Toggle {
        /// Session identifier (block if assigned, else display time)
        id: String,
    },

    #[command(about = "List starred sessions")]
    List,

    #[command(about = "Remove every star")]
    Clear,
}
