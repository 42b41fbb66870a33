//! Runtime-switchable text processor

use crate::format::OutputFormat;
use crate::strategy::{render_list, ListStrategy};
use std::fmt;

/// Text processor whose strategy can be replaced after construction
///
/// The strategy is resolved on every [`append_list`](Self::append_list)
/// call, so switching format only affects lists appended afterwards.
/// Content already in the buffer is never rewritten.
#[derive(Debug)]
pub struct TextProcessor {
    buffer: String,
    strategy: Box<dyn ListStrategy>,
}

impl TextProcessor {
    /// Create a processor rendering in the given format
    pub fn new(format: OutputFormat) -> Self {
        tracing::debug!(%format, "creating text processor");
        Self {
            buffer: String::new(),
            strategy: format.strategy(),
        }
    }

    /// Create a processor with a custom strategy
    pub fn with_strategy<S: ListStrategy + 'static>(strategy: S) -> Self {
        tracing::debug!(strategy = strategy.name(), "creating text processor");
        Self {
            buffer: String::new(),
            strategy: Box::new(strategy),
        }
    }

    /// Replace the current strategy with a fresh one for `format`
    pub fn set_output_format(&mut self, format: OutputFormat) {
        tracing::debug!(from = self.strategy.name(), to = %format, "switching output format");
        self.strategy = format.strategy();
    }

    /// Replace the current strategy with a custom one
    pub fn set_strategy<S: ListStrategy + 'static>(&mut self, strategy: S) {
        tracing::debug!(from = self.strategy.name(), to = strategy.name(), "switching strategy");
        self.strategy = Box::new(strategy);
    }

    /// Append `items` as one list using the current strategy
    pub fn append_list<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let count = render_list(&*self.strategy, &mut self.buffer, items);
        tracing::trace!(
            strategy = self.strategy.name(),
            items = count,
            buffer_len = self.buffer.len(),
            "appended list"
        );
    }

    /// Clear the buffer, keeping the current strategy
    pub fn reset(&mut self) {
        tracing::trace!(discarded = self.buffer.len(), "resetting buffer");
        self.buffer.clear();
    }

    /// Current buffer content
    pub fn description(&self) -> &str {
        &self.buffer
    }

    /// Name of the current strategy
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Format rendered by the current strategy
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

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

impl fmt::Display for TextProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
