// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-category stylesheet served at `/categories.css`.

use std::fmt;

use crate::wire::CategoryConfig;

/// Render styles for every category, in order.
pub fn render(categories: &[CategoryConfig]) -> String {
    CategoryStyles(categories).to_string()
}

struct CategoryStyles<'a>(&'a [CategoryConfig]);

impl fmt::Display for CategoryStyles<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in self.0 {
            write_category(f, &category.slug, &category.color)?;
        }
        Ok(())
    }
}

fn write_category(f: &mut fmt::Formatter<'_>, slug: &str, color: &str) -> fmt::Result {
    // Tinted backgrounds append an alpha byte to a #rrggbb color.
    writeln!(f, ".background--{slug} {{\n  background-color: {color}0C;\n}}\n")?;
    writeln!(
        f,
        ".input-background--{slug} input[type=\"text\"] {{\n  background-color: {color}4C;\n  outline-color: {color};\n}}\n"
    )?;
    writeln!(
        f,
        ".a-color--{slug} a, .a-color--{slug} a:hover {{\n  color: {color};\n}}\n"
    )?;
    writeln!(
        f,
        ".scrollbar-color--{slug}::-webkit-scrollbar-thumb {{\n  background: {color};\n}}\n"
    )?;
    for (n, end) in [(0, "99%"), (1, "100%")] {
        writeln!(
            f,
            ".flash-border--{slug}{n} {{\n  animation-name: flash-border--{slug}{n};\n  animation-duration: 0.5s;\n  animation-timing-function: linear;\n  animation-iteration-count: 1;\n}}\n"
        )?;
        writeln!(
            f,
            "@keyframes flash-border--{slug}{n} {{\n  0% {{\n    border-color: {color};\n  }}\n  {end} {{\n    border-color: #f3f3f3;\n  }}\n}}\n"
        )?;
    }
    writeln!(
        f,
        ".loader--{slug} {{\n  width: 14px;\n  height: 14px;\n  border: 2px solid {color};\n  border-right-color: transparent;\n  border-radius: 50%;\n  animation: loader-rotate 1s linear infinite;\n}}\n"
    )
}

#[cfg(test)]
#[path = "css_tests.rs"]
mod tests;
