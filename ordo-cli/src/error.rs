use std::io;
use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] json::Error),
    #[error("Collection error: {0}")]
    Collection(#[from] ordo::error::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

pub(crate) fn render_error(src: &str, e: &Error) -> io::Result<()> {
    report(src, e).eprint(("source", ariadne::Source::from(src)))
}

fn report<'a>(src: &str, e: &Error) -> ariadne::Report<'a, (&'static str, Range<usize>)> {
    let red = ariadne::Color::Red;
    // json_span yields byte offsets
    let mut report = ariadne::Report::build(ariadne::ReportKind::Error, ("source", 0..0))
        .with_config(ariadne::Config::default().with_index_type(ariadne::IndexType::Byte));

    match e {
        Error::Json(e) => {
            report = report.with_label(
                ariadne::Label::new(("source", json_span(src, e)))
                    .with_message(e)
                    .with_color(red),
            );
        }
        Error::Collection(e) => {
            report = report
                .with_code(e.code())
                .with_message(e.message())
                .with_note(e.note());
        }
    }
    report.finish()
}

// json reports 1-based lines and columns in characters
fn json_span(src: &str, e: &json::Error) -> Range<usize> {
    match e {
        json::Error::UnexpectedCharacter { line, column, ch } => {
            let start = src
                .split_inclusive('\n')
                .take(line.saturating_sub(1))
                .map(str::len)
                .sum::<usize>();
            let start = src[start..]
                .char_indices()
                .nth(column.saturating_sub(1))
                .map_or(src.len(), |(offset, _)| start + offset);
            start..start + ch.len_utf8()
        }
        _ => src.len()..src.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_span() {
        let src = "{\n  \"a\": x\n}";
        let e = json::parse(src).unwrap_err();
        let span = json_span(src, &e);
        assert_eq!(&src[span], "x");
    }

    #[test]
    fn test_json_span_at_end() {
        let src = "[1, 2";
        let e = json::parse(src).unwrap_err();
        assert_eq!(json_span(src, &e), 5..5);
    }

    #[test]
    fn test_json_span_after_multibyte_text() {
        let src = r#"{"ééé": x}"#;
        let e = json::parse(src).unwrap_err();
        let span = json_span(src, &e);
        assert_eq!(span, 11..12);
        assert_eq!(&src[span], "x");
    }

    fn rendered(src: &str, e: &Error) -> String {
        let mut out = Vec::new();
        report(src, e)
            .write(("source", ariadne::Source::from(src)), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_labels_multibyte_json() {
        let src = r#"{"ééé": x}"#;
        let e = Error::from(json::parse(src).unwrap_err());
        assert!(rendered(src, &e).contains("Unexpected character: x"));
    }

    #[test]
    fn test_report_collection_error() {
        let e = Error::from(ordo::error::Error::EmptyAccess);
        let out = rendered("[]", &e);
        assert!(out.contains("EmptyAccess"));
        assert!(out.contains("Empty access."));
    }

    #[test]
    fn test_display() {
        let e = Error::from(ordo::error::Error::KeyConflict);
        assert_eq!(e.to_string(), "Collection error: KeyConflict");
    }
}
