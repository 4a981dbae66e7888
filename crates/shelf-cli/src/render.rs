//! Text rendering for command output.

use colored::Colorize;
use shelf_library::{Book, ReadingProgress};

const HEADERS: [&str; 5] = ["Title", "Author", "Genre", "Year", "Read"];
const BAR_WIDTH: usize = 30;

/// Fixed-width table of books, one row per record, header first.
pub fn book_table(books: &[&Book]) -> String {
    let rows: Vec<[String; 5]> = books
        .iter()
        .map(|b| {
            [
                b.title.clone(),
                b.author.clone(),
                b.genre.clone(),
                b.year.to_string(),
                read_label(b.read).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&HEADERS.map(String::from), &widths));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

pub fn read_label(read: bool) -> &'static str {
    if read { "yes" } else { "no" }
}

/// `[#######-----------------------]`-style bar for a fraction in `0..=1`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Multi-line progress report.
pub fn progress_report(progress: &ReadingProgress) -> String {
    format!(
        "Total Books: {}\nBooks Read: {}\nBooks Unread: {}\n{} {}\nReading Completion: {:.2}%",
        progress.total.to_string().bold(),
        progress.read.to_string().bold(),
        progress.unread().to_string().bold(),
        progress_bar(progress.fraction(), BAR_WIDTH).green(),
        format!("{}/{}", progress.read, progress.total).dimmed(),
        progress.percent,
    )
}

/// One-record detail view.
pub fn book_detail(book: &Book) -> String {
    format!(
        "{}\n  Author: {}\n  Genre:  {}\n  Year:   {}\n  Read:   {}",
        book.title.bold(),
        book.author,
        book.genre.cyan(),
        book.year,
        if book.read { read_label(true).green() } else { read_label(false).yellow() },
    )
}
