//! Helpers for writing themed messages.
//!
//! All helpers take the writer and a `enable_colors` flag so callers decide
//! whether the destination is a terminal. With colors disabled the text is
//! written verbatim.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme color for `entry` to `text`.
pub fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

pub fn print_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint(msg, entry, theme, enable_colors))
}

pub fn print_info_message<W: Write + ?Sized>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, msg, ThemeEntry::Info, theme, enable_colors)
}

pub fn print_success_message<W: Write + ?Sized>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, msg, ThemeEntry::Success, theme, enable_colors)
}

pub fn print_warn_message<W: Write + ?Sized>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, msg, ThemeEntry::Warn, theme, enable_colors)
}

pub fn print_error_message<W: Write + ?Sized>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, msg, ThemeEntry::Error, theme, enable_colors)
}

/// Writes a `title` framed by separator rules.
pub fn print_section_header<W: Write + ?Sized>(writer: &mut W, title: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    let rule = separator();
    writeln!(writer)?;
    print_message(writer, &rule, ThemeEntry::Header, theme, enable_colors)?;
    print_message(writer, title, ThemeEntry::Header, theme, enable_colors)?;
    print_message(writer, &rule, ThemeEntry::Header, theme, enable_colors)
}

pub fn print_section_footer<W: Write + ?Sized>(writer: &mut W, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, &separator(), ThemeEntry::Header, theme, enable_colors)
}

fn separator() -> String {
    "=".repeat(60)
}
