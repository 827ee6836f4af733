use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrapbook")]
#[command(version, about = "A personal scrapbook of notes, photos and milestones")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new scrapbook in the current directory
    Init,

    /// Manage love notes
    Note(NoteCommand),

    /// Manage the timeline of milestones
    Timeline(TimelineCommand),

    /// List the photo gallery
    Photos {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the current theme, or switch to another one
    Theme {
        /// Theme to switch to (romantic, light, dark)
        name: Option<String>,
    },

    /// Click the heart
    Heart,

    /// Export notes, photos, timeline and theme to a JSON file
    Export {
        /// Output path ("-" for stdout). Defaults to the configured export file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Import a previously exported JSON file
    Import {
        /// File to import. Reads stdin when omitted
        path: Option<PathBuf>,
    },

    /// Render the scrapbook as an HTML page
    Render {
        /// Output path. Defaults to .scrapbook/index.html
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Render with the heart message revealed
        #[arg(long)]
        show_message: bool,
    },
}

#[derive(Args, Debug)]
pub struct NoteCommand {
    #[command(subcommand)]
    pub action: NoteAction,
}

#[derive(Subcommand, Debug)]
pub enum NoteAction {
    /// Add a note to the top of the list
    Add {
        /// Note text
        text: String,
    },

    /// List notes, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note by its position in the list (1 = newest)
    Delete {
        index: NonZeroUsize,
    },
}

#[derive(Args, Debug)]
pub struct TimelineCommand {
    #[command(subcommand)]
    pub action: TimelineAction,
}

#[derive(Subcommand, Debug)]
pub enum TimelineAction {
    /// Add a milestone to the top of the timeline
    Add {
        /// Date of the milestone (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        date: String,

        /// Milestone title
        #[arg(long, default_value = "")]
        title: String,

        /// Optional description
        #[arg(long, default_value = "")]
        desc: String,
    },

    /// List milestones, most recently added first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a milestone by its position in the list (1 = most recent)
    Delete {
        index: NonZeroUsize,
    },
}
