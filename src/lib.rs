#![allow(clippy::module_inception)]

use std::{fs, io, path::Path};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// A 1-based line and a 0-based column within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// Returns the text of `line` (1-based) in `file`, without its line ending.
pub fn get_line_at_position<P: AsRef<Path>>(file: P, line: usize) -> io::Result<Option<String>> {
    let content = fs::read_to_string(file)?;

    Ok(line
        .checked_sub(1)
        .and_then(|index| content.lines().nth(index))
        .map(String::from))
}


pub fn render_error(error: &Error, file: &str, line_text: Option<&str>) -> String {
    /*
        error: message
        -> final.src
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let Some(line_text) = line_text else {
        return out;
    };

    let (expanded, display_column) = expand_tabs(line_text, position.column);
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&expanded);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = display_column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(error: &Error, file: &Path) {
    let line_text = get_line_at_position(file, error.get_position().line)
        .ok()
        .flatten();

    eprint!(
        "{}",
        render_error(error, &file.to_string_lossy(), line_text.as_deref())
    );
}

/// Numbers every line of `text`, right-aligning the line numbers.
pub fn format_listing(text: &str) -> String {
    let width = text.lines().count().max(1).to_string().len();

    text.lines()
        .enumerate()
        .map(|(index, line)| format!("{:>width$} | {}\n", index + 1, line))
        .collect()
}

const TAB_WIDTH: usize = 4;

/// Replaces tabs with spaces up to the next tab stop and maps the character
/// index `column` to its display column in the expanded text.
fn expand_tabs(line: &str, column: usize) -> (String, usize) {
    let mut expanded = String::new();
    let mut width = 0;
    let mut display_column = None;

    for (index, c) in line.chars().enumerate() {
        if index == column {
            display_column = Some(width);
        }

        if c == '\t' {
            let fill = TAB_WIDTH - width % TAB_WIDTH;
            expanded.extend(std::iter::repeat(' ').take(fill));
            width += fill;
        } else {
            expanded.push(c);
            width += 1;
        }
    }

    let past_end = width + column.saturating_sub(line.chars().count());
    (expanded, display_column.unwrap_or(past_end))
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
