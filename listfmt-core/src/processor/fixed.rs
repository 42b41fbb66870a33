//! Text processor with a strategy fixed by its type

use crate::format::OutputFormat;
use crate::strategy::{render_list, HtmlListStrategy, ListStrategy, MarkdownListStrategy};
use std::fmt;

/// Text processor bound to strategy type `S` for its whole lifetime
///
/// Calls resolve statically to `S`; there is no way to swap the strategy.
#[derive(Debug, Clone, Default)]
pub struct StaticTextProcessor<S: ListStrategy> {
    buffer: String,
    strategy: S,
}

/// Processor fixed to Markdown output
pub type MarkdownTextProcessor = StaticTextProcessor<MarkdownListStrategy>;

/// Processor fixed to HTML output
pub type HtmlTextProcessor = StaticTextProcessor<HtmlListStrategy>;

impl<S: ListStrategy + Default> StaticTextProcessor<S> {
    /// Create a processor with the default instance of `S`
    pub fn new() -> Self {
        Self::with_strategy(S::default())
    }
}

impl<S: ListStrategy> StaticTextProcessor<S> {
    /// Create a processor around an explicit strategy value
    pub fn with_strategy(strategy: S) -> Self {
        tracing::debug!(strategy = strategy.name(), "creating static text processor");
        Self {
            buffer: String::new(),
            strategy,
        }
    }

    /// Append `items` as one list
    pub fn append_list<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let count = render_list(&self.strategy, &mut self.buffer, items);
        tracing::trace!(
            strategy = self.strategy.name(),
            items = count,
            buffer_len = self.buffer.len(),
            "appended list"
        );
    }

    /// Clear the buffer
    pub fn reset(&mut self) {
        tracing::trace!(discarded = self.buffer.len(), "resetting buffer");
        self.buffer.clear();
    }

    /// Current buffer content
    pub fn description(&self) -> &str {
        &self.buffer
    }

    /// The bound strategy
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Format rendered by the bound strategy
    ///
    /// `None` for custom strategies that render no built-in format.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.strategy.format()
    }

    /// Whether nothing has been rendered since construction or the last reset
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the processor, returning the buffer
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl<S: ListStrategy> fmt::Display for StaticTextProcessor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
