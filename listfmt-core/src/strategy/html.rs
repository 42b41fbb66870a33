//! HTML list strategy

use super::ListStrategy;
use crate::format::OutputFormat;

/// HTML strategy - wraps items in a `<ul>` block, one `<li>` per line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlListStrategy;

impl ListStrategy for HtmlListStrategy {
    fn begin(&self, buffer: &mut String) {
        buffer.push_str("<ul>\n");
    }

    fn end(&self, buffer: &mut String) {
        buffer.push_str("</ul>\n");
    }

    fn format_item(&self, buffer: &mut String, item: &str) {
        buffer.push_str(" <li>");
        buffer.push_str(item);
        buffer.push_str("</li>\n");
    }

    fn name(&self) -> &'static str {
        "HTML"
    }

    fn format(&self) -> Option<OutputFormat> {
        Some(OutputFormat::Html)
    }
}
