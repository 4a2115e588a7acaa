//! Syntax highlighting and terminal styling for docsift.
//!
//! [`Highlighter`] renders TOML, markdown and example code with 24-bit ANSI colors.
//! The free functions style headers and status lines for CLI output.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Syntax tried for example code when no hint resolves.
const DEFAULT_CODE_SYNTAX: &str = "tsx";

/// Default indentation for nested content blocks.
const CONTENT_INDENT: &str = "   ";

/// A syntax highlighter for terminal output.
pub struct Highlighter {
    /// Language definitions, including the two-face extras (TOML, TypeScript, TSX).
    syntax_set: SyntaxSet,
    /// Lazily loaded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Active theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML, as printed by `docsift config` and `docsift init`.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights markdown.
    pub fn highlight_markdown(&self, content: &str) -> String {
        self.highlight(content, "md")
    }

    /// Highlights example source code.
    ///
    /// `hint` is a file extension or syntax name. Without a usable hint the syntax is guessed
    /// from the first line, then falls back to TSX.
    pub fn highlight_code(&self, content: &str, hint: Option<&str>) -> String {
        let syntax = hint
            .and_then(|h| self.find_syntax(h))
            .or_else(|| self.syntax_set.find_syntax_by_first_line(content))
            .or_else(|| self.find_syntax(DEFAULT_CODE_SYNTAX))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        self.highlight_with(content, syntax)
    }

    /// Highlights content with the named syntax.
    ///
    /// Unknown syntaxes render as plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .find_syntax(syntax_name)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        self.highlight_with(content, syntax)
    }

    /// Looks a syntax up by extension, then by name.
    fn find_syntax(&self, syntax_name: &str) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
    }

    /// Renders each line with `syntax`, ending with a color reset.
    fn highlight_with(&self, content: &str, syntax: &SyntaxReference) -> String {
        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI escape codes used by the styling helpers.
pub mod colors {
    /// Bold.
    pub const BOLD: &str = "\x1b[1m";
    /// Headers.
    pub const CYAN: &str = "\x1b[36m";
    /// Warnings.
    pub const YELLOW: &str = "\x1b[33m";
    /// Faint.
    pub const DIM: &str = "\x1b[2m";
    /// Clears every attribute set above.
    pub const RESET: &str = "\x1b[0m";
}

/// Bold cyan, used for item ids and section titles.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats a bold subheader.
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Faint text for secondary details.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats a warning in yellow.
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// A dimmed horizontal rule.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Indents every non-empty line of `text`.
pub fn indent_content(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{CONTENT_INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
