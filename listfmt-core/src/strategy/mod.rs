//! List formatting strategies

use crate::format::OutputFormat;
use std::fmt;

pub mod html;
pub mod markdown;

pub use html::HtmlListStrategy;
pub use markdown::MarkdownListStrategy;

/// Pluggable rule set for rendering one list into a buffer
///
/// Implementations only ever append to `buffer`. Item text is embedded
/// literally, with no escaping or validation.
pub trait ListStrategy: fmt::Debug + Send + Sync {
    /// Append the block-opening fragment (may be empty)
    fn begin(&self, buffer: &mut String);

    /// Append the block-closing fragment (may be empty)
    fn end(&self, buffer: &mut String);

    /// Append one formatted item
    fn format_item(&self, buffer: &mut String, item: &str);

    /// Strategy name for debugging and listings
    fn name(&self) -> &'static str;

    /// Built-in format this strategy renders, if any
    fn format(&self) -> Option<OutputFormat> {
        None
    }
}

impl<S: ListStrategy + ?Sized> ListStrategy for Box<S> {
    fn begin(&self, buffer: &mut String) {
        (**self).begin(buffer)
    }

    fn end(&self, buffer: &mut String) {
        (**self).end(buffer)
    }

    fn format_item(&self, buffer: &mut String, item: &str) {
        (**self).format_item(buffer, item)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn format(&self) -> Option<OutputFormat> {
        (**self).format()
    }
}

/// Render `items` as one list: `begin`, every item in order, then `end`
///
/// An empty `items` still produces the begin and end fragments. Returns the
/// number of items written.
pub fn render_list<S, I, T>(strategy: &S, buffer: &mut String, items: I) -> usize
where
    S: ListStrategy + ?Sized,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    strategy.begin(buffer);
    let mut count = 0;
    for item in items {
        strategy.format_item(buffer, item.as_ref());
        count += 1;
    }
    strategy.end(buffer);
    count
}
