//! Text processors that accumulate rendered lists
//!
//! [`TextProcessor`] resolves its strategy at call time through a boxed
//! trait object that can be replaced. [`StaticTextProcessor`] fixes the
//! strategy type when the processor type is instantiated.

pub mod dynamic;
pub mod fixed;

pub use dynamic::TextProcessor;
pub use fixed::{HtmlTextProcessor, MarkdownTextProcessor, StaticTextProcessor};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;

    #[test]
    fn test_bindings_agree_on_markdown() {
        let mut dynamic = TextProcessor::new(OutputFormat::Markdown);
        let mut fixed = MarkdownTextProcessor::new();

        for items in [vec!["a", "b"], vec![], vec!["c"]] {
            dynamic.append_list(&items);
            fixed.append_list(&items);
        }

        assert_eq!(dynamic.description(), fixed.description());
    }

    #[test]
    fn test_bindings_agree_on_html_with_reset() {
        let mut dynamic = TextProcessor::new(OutputFormat::Html);
        let mut fixed = HtmlTextProcessor::new();

        dynamic.append_list(["x"]);
        fixed.append_list(["x"]);
        dynamic.reset();
        fixed.reset();
        dynamic.append_list(["y", "z"]);
        fixed.append_list(["y", "z"]);

        assert_eq!(dynamic.description(), fixed.description());
        assert_eq!(fixed.description(), "<ul>\n <li>y</li>\n <li>z</li>\n</ul>\n");
    }
}
