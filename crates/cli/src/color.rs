// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt::Display;
use std::io::IsTerminal;

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};

/// Roles text can play in terminal output, each with a 256-color code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Section headers and catalog sources.
    Header,
    /// Flags and literals in help.
    Literal,
    /// Placeholders in help.
    Context,
    /// Secondary detail.
    Muted,
    /// Success markers.
    Ok,
}

impl Tone {
    pub const fn code(self) -> u8 {
        match self {
            Tone::Header => 74,
            Tone::Literal => 250,
            Tone::Context => 245,
            Tone::Muted => 240,
            Tone::Ok => 114,
        }
    }

    fn style(self) -> Style {
        Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(self.code()))))
    }
}

/// `NO_COLOR` (any value) wins over `COLOR=1`, which wins over the TTY check.
pub fn enabled() -> bool {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

pub fn styles() -> Styles {
    if !enabled() {
        return Styles::plain();
    }
    Styles::styled()
        .header(Tone::Header.style())
        .literal(Tone::Literal.style())
        .placeholder(Tone::Context.style())
}

pub fn paint(tone: Tone, text: impl Display) -> String {
    if enabled() {
        format!("\x1b[38;5;{}m{text}\x1b[0m", tone.code())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
