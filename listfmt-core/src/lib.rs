//! Strategy-driven list formatting
//!
//! A [`TextProcessor`] accumulates lists of text items into a single buffer.
//! How each list opens, how each item is framed and how the list closes is
//! decided by a [`ListStrategy`], which comes in two bindings:
//!
//! - [`TextProcessor`] holds a boxed strategy that can be swapped at any time
//!   with [`TextProcessor::set_output_format`].
//! - [`StaticTextProcessor`] fixes its strategy through a type parameter and
//!   offers no way to change it.
//!
//! Both bindings render through the same routine, so the same operations
//! against the same strategy always produce byte-identical buffers.
//!
//! ```
//! use listfmt_core::{OutputFormat, TextProcessor};
//!
//! let mut processor = TextProcessor::new(OutputFormat::Markdown);
//! processor.append_list(["Omar", "Ahmed"]);
//! assert_eq!(processor.description(), "* Omar\n* Ahmed\n");
//!
//! processor.reset();
//! processor.set_output_format(OutputFormat::Html);
//! processor.append_list(["Omar", "Ahmed"]);
//! assert_eq!(
//!     processor.description(),
//!     "<ul>\n <li>Omar</li>\n <li>Ahmed</li>\n</ul>\n"
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod format;
pub mod processor;
pub mod strategy;

pub use config::{Binding, ProcessorConfig};
pub use error::{Error, Result};
pub use format::OutputFormat;
pub use processor::{
    HtmlTextProcessor, MarkdownTextProcessor, StaticTextProcessor, TextProcessor,
};
pub use strategy::{render_list, HtmlListStrategy, ListStrategy, MarkdownListStrategy};
