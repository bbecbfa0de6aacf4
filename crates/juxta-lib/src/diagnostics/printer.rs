//! Builder-pattern printer for rendering parse failures.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use crate::parser::{Node, ParseFailure};

/// Builder for rendering one failure with various options.
///
/// The source must be the text the tokens were read from (the tokenizer's log), since
/// token spans are byte offsets into it.
pub struct FailurePrinter<'f, 's> {
    failure: &'f ParseFailure,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'f, 's> FailurePrinter<'f, 's> {
    pub fn new(failure: &'f ParseFailure) -> Self {
        Self {
            failure,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let (Some(source), Some(line)) = (self.source, self.failure.line()) else {
            return self.format_plain(w);
        };

        let title = format!("line {line}: {}", self.failure.message);
        if !self.failure.is_single_line() {
            writeln!(w, "error: {title}")?;
            return self.format_context(w);
        }

        let Some(range) = self.failure.highlight.as_ref().and_then(Node::span) else {
            return self.format_plain(w);
        };
        let Some(range) = adjust_range(range, source.len()) else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let context = self.context();
        let mut annotation = AnnotationKind::Primary.span(range);
        if let Some(context) = &context {
            annotation = annotation.label(context);
        }

        let mut snippet = Snippet::source(source).line_start(1).annotation(annotation);
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report = vec![Level::ERROR.primary_title(&title).element(snippet)];
        writeln!(w, "{}", renderer.render(&report))
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        writeln!(w, "error: {}", self.failure.message)?;
        self.format_context(w)
    }

    fn format_context(&self, w: &mut impl Write) -> std::fmt::Result {
        match self.context() {
            Some(context) => writeln!(w, "  {context}"),
            None => Ok(()),
        }
    }

    /// `in a/b`, innermost first.
    fn context(&self) -> Option<String> {
        if self.failure.labels.is_empty() {
            return None;
        }
        Some(format!("in {}", self.failure.labels.join("/")))
    }
}

/// Byte range for the annotation, or `None` if the span lies outside `source`.
fn adjust_range(range: TextRange, limit: usize) -> Option<Range<usize>> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if end > limit {
        return None;
    }
    if start == end {
        return Some(start..(start + 1).min(limit));
    }
    Some(start..end)
}

impl ParseFailure {
    pub fn printer(&self) -> FailurePrinter<'_, '_> {
        FailurePrinter::new(self)
    }

    /// Plain rendering against the text the tokens came from.
    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }
}
