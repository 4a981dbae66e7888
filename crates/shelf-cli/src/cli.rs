use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shelf",
    about = "Shelf: a personal library catalog",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Catalog file to read and write
    #[arg(long, global = true, env = "SHELF_LIBRARY", value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// TOML configuration file (defaults to ./shelf.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Refuse to open a catalog file that cannot be parsed
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a book to the collection
    Add(AddArgs),
    /// List every book in the collection
    List(ListArgs),
    /// Search titles and authors (case-insensitive)
    Search(SearchArgs),
    /// Show the first book with a given title
    Show(ShowArgs),
    /// Change the details of the first book with a given title
    Update(UpdateArgs),
    /// Remove every book with a given title
    Remove(RemoveArgs),
    /// Show reading progress
    Progress(ProgressArgs),
    /// List all titles
    Titles(TitlesArgs),
}

#[derive(Args)]
pub struct AddArgs {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Publication year
    #[arg(short, long, default_value_t = 0)]
    pub year: u32,
    /// Mark the book as already read
    #[arg(short, long)]
    pub read: bool,
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for; empty matches everything
    #[arg(default_value = "")]
    pub query: String,
}

#[derive(Args)]
pub struct ShowArgs {
    pub title: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Title of the book to change
    pub title: String,
    #[arg(long = "title", value_name = "TITLE")]
    pub new_title: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub genre: Option<String>,
    #[arg(long)]
    pub year: Option<u32>,
    #[arg(long, conflicts_with = "unread")]
    pub read: bool,
    #[arg(long)]
    pub unread: bool,
}

impl UpdateArgs {
    /// The requested read flag, if either `--read` or `--unread` was given.
    pub fn read_flag(&self) -> Option<bool> {
        match (self.read, self.unread) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Args)]
pub struct RemoveArgs {
    pub title: String,
}

#[derive(Args)]
pub struct ProgressArgs {}

#[derive(Args)]
pub struct TitlesArgs {}
