use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::application::ports::TextFormatter;
use crate::presentation::config::FormatterSettings;

static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(?:^[^\S\n]*\n)+").unwrap());
static LEADING_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^ +").unwrap());
static TRAILING_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m) +$").unwrap());
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Default [`TextFormatter`]: collapses blank-line runs and can drop header/footer lines
/// or left-align text.
///
/// With default options only the blank-line collapsing applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTextFormatter {
    left_align: bool,
    top_pages_to_skip_before_delete: usize,
    top_text_lines_to_delete: usize,
    bottom_text_lines_to_delete: usize,
    line_separator: String,
}

impl Default for ExtractedTextFormatter {
    fn default() -> Self {
        Self {
            left_align: false,
            top_pages_to_skip_before_delete: 0,
            top_text_lines_to_delete: 0,
            bottom_text_lines_to_delete: 0,
            line_separator: "\n".to_string(),
        }
    }
}

impl ExtractedTextFormatter {
    pub fn builder() -> ExtractedTextFormatterBuilder {
        ExtractedTextFormatterBuilder::default()
    }

    /// Formats text belonging to the given zero-based page.
    pub fn format_page(&self, text: &str, page: usize) -> String {
        let mut text = self.trim_adjacent_blank_lines(text);

        if page >= self.top_pages_to_skip_before_delete {
            text = self.delete_top_lines(&text);
            text = self.delete_bottom_lines(&text);
        }

        if self.left_align {
            text = align_to_left(&text);
        }

        text
    }

    fn trim_adjacent_blank_lines(&self, text: &str) -> String {
        BLANK_LINE_RUN
            .replace_all(text, NoExpand(&self.line_separator))
            .into_owned()
    }

    /// Leaves the text untouched when it has fewer lines than requested.
    fn delete_top_lines(&self, text: &str) -> String {
        if self.top_text_lines_to_delete == 0 || text.trim().is_empty() {
            return text.to_string();
        }

        let mut index = 0;
        for _ in 0..self.top_text_lines_to_delete {
            match text[index..].find(&self.line_separator) {
                Some(offset) => index += offset + self.line_separator.len(),
                None => return text.to_string(),
            }
        }

        text[index..].to_string()
    }

    fn delete_bottom_lines(&self, text: &str) -> String {
        if self.bottom_text_lines_to_delete == 0 || text.trim().is_empty() {
            return text.to_string();
        }

        let mut end = text.len();
        for _ in 0..self.bottom_text_lines_to_delete {
            match text[..end].rfind(&self.line_separator) {
                Some(index) => end = index,
                None => break,
            }
        }

        text[..end].to_string()
    }
}

impl TextFormatter for ExtractedTextFormatter {
    fn format(&self, text: &str) -> String {
        self.format_page(text, 0)
    }
}

impl From<&FormatterSettings> for ExtractedTextFormatter {
    fn from(settings: &FormatterSettings) -> Self {
        Self::builder()
            .left_align(settings.left_align)
            .top_pages_to_skip_before_delete(settings.top_pages_to_skip_before_delete)
            .top_text_lines_to_delete(settings.top_text_lines_to_delete)
            .bottom_text_lines_to_delete(settings.bottom_text_lines_to_delete)
            .build()
    }
}

fn align_to_left(text: &str) -> String {
    let text = LEADING_SPACES.replace_all(text, "");
    let text = TRAILING_SPACES.replace_all(&text, "");
    SPACE_RUN.replace_all(&text, " ").into_owned()
}

#[derive(Debug, Default)]
pub struct ExtractedTextFormatterBuilder {
    inner: ExtractedTextFormatter,
}

impl ExtractedTextFormatterBuilder {
    pub fn left_align(mut self, left_align: bool) -> Self {
        self.inner.left_align = left_align;
        self
    }

    pub fn top_pages_to_skip_before_delete(mut self, pages: usize) -> Self {
        self.inner.top_pages_to_skip_before_delete = pages;
        self
    }

    pub fn top_text_lines_to_delete(mut self, lines: usize) -> Self {
        self.inner.top_text_lines_to_delete = lines;
        self
    }

    pub fn bottom_text_lines_to_delete(mut self, lines: usize) -> Self {
        self.inner.bottom_text_lines_to_delete = lines;
        self
    }

    pub fn line_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        if !separator.is_empty() {
            self.inner.line_separator = separator;
        }
        self
    }

    pub fn build(self) -> ExtractedTextFormatter {
        self.inner
    }
}
