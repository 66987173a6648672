//! Error adapter for converting ClassdrawError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Model errors keep
//! their JSON source, so the report points at the offending line and column.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use classdraw::ClassdrawError;

/// Adapter rendering a [`ClassdrawError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a ClassdrawError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ClassdrawError::Io(_) => "classdraw::io",
            ClassdrawError::Model { .. } => "classdraw::model",
            ClassdrawError::Resource(_) => "classdraw::resource",
            ClassdrawError::Config(_) => "classdraw::config",
            ClassdrawError::Export(_) => "classdraw::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ClassdrawError::Resource(_) => Some(Box::new(
                "set `font.path` in the configuration file to a TrueType or OpenType font",
            )),
            ClassdrawError::Config(_) => Some(Box::new(
                "pass a valid TOML file with `--config`, or remove it to use the defaults",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            ClassdrawError::Model { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let ClassdrawError::Model { err, src } = &self.0 else {
            return None;
        };
        let span = location_to_span(src, err.line(), err.column());
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("invalid model here".to_string()),
            span,
        ))))
    }
}

/// Convert a 1-based line and column into a one-character [`SourceSpan`].
///
/// Locations past the end of `src` are clamped to its last character.
fn location_to_span(src: &str, line: usize, column: usize) -> SourceSpan {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len().saturating_sub(1));
    let len = usize::from(!src.is_empty());
    SourceSpan::new(offset.into(), len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_to_span() {
        let src = "{\n  \"background\": 1\n}";
        let span = location_to_span(src, 2, 3);
        assert_eq!(span.offset(), 4);
        assert_eq!(span.len(), 1);
        assert_eq!(&src[span.offset()..span.offset() + 1], "\"");
    }

    #[test]
    fn test_location_to_span_clamps_past_end() {
        let span = location_to_span("{}", 5, 40);
        assert_eq!(span.offset(), 1);

        let empty = location_to_span("", 1, 1);
        assert_eq!(empty.offset(), 0);
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_codes_and_help() {
        let config = ClassdrawError::Config("bad".to_string());
        let adapter = ErrorAdapter(&config);
        assert_eq!(adapter.code().unwrap().to_string(), "classdraw::config");
        assert!(adapter.help().is_some());
        assert!(adapter.source_code().is_none());
        assert!(adapter.labels().is_none());
    }
}
