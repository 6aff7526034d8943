//! Output formatting for CLI display
//!
//! Album rows, photo lines and the slideshow detail block. Quiet mode drops
//! decoration and prints just the identifying value.

use crate::library::AlbumSummary;
use crate::model::{Photo, format_date};
use crate::slideshow::PhotoDetails;
use colored::Colorize;

/// Format one album listing row: name, photo count and date range
#[must_use]
pub fn album_row(summary: &AlbumSummary, quiet: bool) -> String {
    if quiet {
        return summary.name.clone();
    }
    let count = match summary.photo_count {
        1 => "1 photo".to_string(),
        n => format!("{n} photos"),
    };
    let range = if summary.date_range.is_empty() {
        "no photos".dimmed().to_string()
    } else {
        summary.date_range.clone()
    };
    format!("  {} ({count}) {range}", summary.name.bold())
}

/// Format a photo with its caption, date and tags
#[must_use]
pub fn photo_line(photo: &Photo, quiet: bool) -> String {
    let path = photo.key().to_string();
    if quiet {
        return path;
    }
    let tags: Vec<String> = photo.tags().iter().map(ToString::to_string).collect();
    let tags = if tags.is_empty() {
        "(no tags)".dimmed().to_string()
    } else {
        format!("[{}]", tags.join(", "))
    };
    format!(
        "  {} {} {} {tags}",
        photo.caption().bold(),
        format_date(photo.date()),
        path.cyan()
    )
}

/// Format the slideshow detail block for the photo at `position` (0-based)
#[must_use]
pub fn details_block(details: &PhotoDetails, position: usize, total: usize) -> String {
    format!(
        "{} {}\n  Date: {}\n  Time: {}\n  Tags: {}",
        details.title.bold(),
        format!("({} of {total})", position + 1).dimmed(),
        details.date,
        details.time,
        details.tags
    )
}

/// A green status line
#[must_use]
pub fn success(message: &str) -> String {
    message.green().to_string()
}

/// A yellow status line
#[must_use]
pub fn notice(message: &str) -> String {
    message.yellow().to_string()
}
