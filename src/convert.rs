//! Line-stream conversion.
//!
//! Feeds each input line through the segmenter and writes one record per
//! line in the configured [`OutputFormat`].

use std::io::{BufRead, Write};

use crate::chordpro::parse_line;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::render::render_line;

/// Convert every line from `reader`, writing results to `writer`.
///
/// Returns the number of lines processed. Line terminators (`\n` or `\r\n`)
/// are not part of the parsed text.
pub fn convert_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    format: OutputFormat,
) -> Result<usize> {
    let mut count = 0;

    for line in reader.lines() {
        let line = line?;
        let segments = parse_line(&line);

        match format {
            OutputFormat::Json => {
                let mut record = serde_json::to_vec(&segments)?;
                record.push(b'\n');
                writer.write_all(&record)?;
            }
            OutputFormat::Text => writeln!(writer, "{}", render_line(&segments))?,
        }

        count += 1;
    }

    writer.flush()?;
    tracing::debug!("Converted {count} lines as {format}");
    Ok(count)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::io::Cursor;

    fn convert(input: &str, format: OutputFormat) -> (usize, String) {
        let mut out = Vec::new();
        let count = convert_lines(Cursor::new(input), &mut out, format).unwrap();
        (count, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_json_lines() {
        let (count, out) = convert("[Am]Hello [G]world\nOh [Am]baby\n", OutputFormat::Json);
        assert_eq!(count, 2);
        assert_eq!(
            out,
            concat!(
                r#"[{"chord":"Am","text":"Hello "},{"chord":"G","text":"world"}]"#,
                "\n",
                r#"[{"chord":null,"text":"Oh "},{"chord":"Am","text":"baby"}]"#,
                "\n",
            )
        );
    }

    #[test]
    fn test_json_empty_line() {
        let (count, out) = convert("\n", OutputFormat::Json);
        assert_eq!(count, 1);
        assert_eq!(out, "[]\n");
    }

    #[test]
    fn test_crlf_is_stripped() {
        let (_, out) = convert("[C]la\r\n", OutputFormat::Json);
        assert_eq!(out, "[{\"chord\":\"C\",\"text\":\"la\"}]\n");
    }

    #[test]
    fn test_text_output() {
        let (count, out) = convert("[D]Go [A]on\nplain words\n\n", OutputFormat::Text);
        assert_eq!(count, 3);
        assert_eq!(out, "D  A\nGo on\nplain words\n\n");
    }

    #[test]
    fn test_no_input() {
        let (count, out) = convert("", OutputFormat::Text);
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }

    /// Writer that rejects every write, like a closed pipe.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_json_write_failure_is_io_error() {
        let result = convert_lines(Cursor::new("[Am]Hello\n"), ClosedPipe, OutputFormat::Json);
        match result {
            Err(crate::error::Error::Io(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe);
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_text_write_failure_is_io_error() {
        let result = convert_lines(Cursor::new("[Am]Hello\n"), ClosedPipe, OutputFormat::Text);
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut out = Vec::new();
        let result = convert_lines(Cursor::new(vec![0xff, 0xfe, b'\n']), &mut out, OutputFormat::Json);
        let err = result.unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
        assert!(err.to_string().starts_with("IO error: "));
        assert!(!err.to_string().contains("None"));
    }
}
