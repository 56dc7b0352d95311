//! Module for managing the colors of the dicesim output.
//!
//! Each logical kind of output maps to a `ThemeStyle`. Only 16-color ANSI
//! named colors are used so the output works on any terminal.

use owo_colors::AnsiColors;
use std::collections::HashMap;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    /// Section titles and separators.
    Header,
    /// Favourable verdicts (the ✓ lines).
    Success,
    /// General informational messages.
    Info,
    /// Warnings such as falling back to a D6.
    Warn,
    /// Unfavourable verdicts and input errors (the ✗ lines).
    Error,
    /// Neutral verdicts (the ○ lines).
    Neutral,
    /// Questions asked of the user.
    Prompt,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 7] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::Neutral,
        ThemeEntry::Prompt,
    ];
}

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

impl ThemeColor {
    pub fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_lowercase())
    }

    /// Converts the color name into its `owo_colors::AnsiColors` value.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Returns the built-in theme.
pub fn build_theme_map() -> ThemeMap {
    let mut theme = HashMap::new();
    theme.insert(ThemeEntry::Header, ThemeStyle { fg: Some(ThemeColor::named("brightcyan")) });
    theme.insert(ThemeEntry::Success, ThemeStyle { fg: Some(ThemeColor::named("green")) });
    theme.insert(ThemeEntry::Warn, ThemeStyle { fg: Some(ThemeColor::named("yellow")) });
    theme.insert(ThemeEntry::Error, ThemeStyle { fg: Some(ThemeColor::named("red")) });
    theme.insert(ThemeEntry::Neutral, ThemeStyle { fg: Some(ThemeColor::named("blue")) });
    theme.insert(ThemeEntry::Prompt, ThemeStyle { fg: Some(ThemeColor::named("brightyellow")) });

    for entry in ThemeEntry::ALL {
        theme.entry(entry).or_insert_with(|| ThemeStyle { fg: Some(ThemeColor::named("white")) });
    }
    theme
}
