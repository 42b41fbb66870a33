//! Markdown list strategy

use super::ListStrategy;
use crate::format::OutputFormat;

/// Markdown strategy - renders each item as a `* item` bullet line
///
/// There is no surrounding block, so an empty list renders nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownListStrategy;

impl ListStrategy for MarkdownListStrategy {
    fn begin(&self, _buffer: &mut String) {}

    fn end(&self, _buffer: &mut String) {}

    fn format_item(&self, buffer: &mut String, item: &str) {
        buffer.push_str("* ");
        buffer.push_str(item);
        buffer.push('\n');
    }

    fn name(&self) -> &'static str {
        "Markdown"
    }

    fn format(&self) -> Option<OutputFormat> {
        Some(OutputFormat::Markdown)
    }
}
