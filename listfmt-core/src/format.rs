//! Output format selector

use crate::error::Error;
use crate::strategy::{HtmlListStrategy, ListStrategy, MarkdownListStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported list output formats
///
/// Carries no data; it only selects which [`ListStrategy`] renders a list.
/// Deserialization goes through [`FromStr`], so configuration accepts the
/// same names and letter case as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    /// Markdown bullet list (`* item`)
    #[default]
    Markdown,
    /// HTML unordered list (`<ul>` / `<li>`)
    Html,
}

impl OutputFormat {
    /// Every supported format, in display order
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Markdown, OutputFormat::Html];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
        }
    }

    /// Short human-readable summary of the rendering
    pub fn summary(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "bullet list, one `* item` line per item",
            OutputFormat::Html => "<ul> block with one <li> line per item",
        }
    }

    /// Create a fresh strategy instance for this format
    pub fn strategy(&self) -> Box<dyn ListStrategy> {
        match self {
            OutputFormat::Markdown => Box::new(MarkdownListStrategy),
            OutputFormat::Html => Box::new(HtmlListStrategy),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => Err(Error::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
