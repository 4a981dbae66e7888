use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use shelf_library::{Book, BookFields, CatalogStore, Library};

use crate::cli::*;
use crate::config::ShelfConfig;
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = ShelfConfig::load(cli.config.as_deref())?;
    let store_config = config.store_config(cli.library, cli.strict);
    let path = store_config.path.clone();
    tracing::debug!(path = %path.display(), policy = ?store_config.load_policy, "opening library");

    let mut library = Library::open_file(store_config)
        .with_context(|| format!("failed to open library {}", path.display()))?;
    let format = cli.format;

    match cli.command {
        Command::Add(args) => cmd_add(&mut library, args, format),
        Command::List(_) => cmd_list(&library, format),
        Command::Search(args) => cmd_search(&library, args, format),
        Command::Show(args) => cmd_show(&library, args, format),
        Command::Update(args) => cmd_update(&mut library, args, format),
        Command::Remove(args) => cmd_remove(&mut library, args, format),
        Command::Progress(_) => cmd_progress(&library, format),
        Command::Titles(_) => cmd_titles(&library, format),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_add<S: CatalogStore>(library: &mut Library<S>, args: AddArgs, format: OutputFormat) -> anyhow::Result<()> {
    let book = library
        .add(args.title, args.author, args.genre, args.year, args.read)
        .context("failed to add book")?;
    match format {
        OutputFormat::Json => print_json(book),
        OutputFormat::Text => {
            println!("{} Book added: {}", "✓".green().bold(), book.to_string().bold());
            Ok(())
        }
    }
}

fn cmd_list<S: CatalogStore>(library: &Library<S>, format: OutputFormat) -> anyhow::Result<()> {
    let books: Vec<&Book> = library.list().iter().collect();
    match format {
        OutputFormat::Json => print_json(&books),
        OutputFormat::Text => {
            if books.is_empty() {
                println!("No books in the collection yet.");
            } else {
                println!("{}", "Your Book Collection".bold());
                print!("{}", render::book_table(&books));
            }
            Ok(())
        }
    }
}

fn cmd_search<S: CatalogStore>(library: &Library<S>, args: SearchArgs, format: OutputFormat) -> anyhow::Result<()> {
    let results = library.search(&args.query);
    match format {
        OutputFormat::Json => print_json(&results),
        OutputFormat::Text => {
            if results.is_empty() {
                println!("{}", "No matching books found.".yellow());
            } else {
                print!("{}", render::book_table(&results));
            }
            Ok(())
        }
    }
}

fn cmd_show<S: CatalogStore>(library: &Library<S>, args: ShowArgs, format: OutputFormat) -> anyhow::Result<()> {
    let book = library.find(&args.title)?;
    match format {
        OutputFormat::Json => print_json(book),
        OutputFormat::Text => {
            println!("{}", render::book_detail(book));
            Ok(())
        }
    }
}

fn cmd_update<S: CatalogStore>(library: &mut Library<S>, args: UpdateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let read = args.read_flag();
    let mut fields = BookFields::from(library.find(&args.title)?);
    if let Some(title) = args.new_title {
        fields.title = title;
    }
    if let Some(author) = args.author {
        fields.author = author;
    }
    if let Some(genre) = args.genre {
        fields.genre = genre;
    }
    if let Some(year) = args.year {
        fields.year = year;
    }
    if let Some(read) = read {
        fields.read = read;
    }

    let book = library.update(&args.title, fields)?;
    match format {
        OutputFormat::Json => print_json(book),
        OutputFormat::Text => {
            println!("{} Book updated: {}", "✓".green().bold(), book.to_string().bold());
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct Removed<'a> {
    title: &'a str,
    removed: usize,
}

fn cmd_remove<S: CatalogStore>(library: &mut Library<S>, args: RemoveArgs, format: OutputFormat) -> anyhow::Result<()> {
    let removed = library.remove(&args.title)?;
    match format {
        OutputFormat::Json => print_json(&Removed { title: &args.title, removed }),
        OutputFormat::Text => {
            let noun = if removed == 1 { "book" } else { "books" };
            println!("{} Removed {} {} titled {}", "✓".green().bold(), removed, noun, args.title.yellow());
            Ok(())
        }
    }
}

fn cmd_progress<S: CatalogStore>(library: &Library<S>, format: OutputFormat) -> anyhow::Result<()> {
    let progress = library.progress();
    match format {
        OutputFormat::Json => print_json(&progress),
        OutputFormat::Text => {
            println!("{}", "Reading Progress".bold());
            println!("{}", render::progress_report(&progress));
            Ok(())
        }
    }
}

fn cmd_titles<S: CatalogStore>(library: &Library<S>, format: OutputFormat) -> anyhow::Result<()> {
    let titles = library.titles();
    match format {
        OutputFormat::Json => print_json(&titles),
        OutputFormat::Text => {
            if titles.is_empty() {
                println!("No books in the collection yet.");
            }
            for title in titles {
                println!("{title}");
            }
            Ok(())
        }
    }
}
