//! Report line formatting.
//!
//! The report is a single line:
//!
//! ```text
//! Relative location of main: -12304
//! ```

use std::io::Write;

use crate::error::Result;
use crate::offset::Offset;

/// Text printed before the offset
pub const LABEL: &str = "Relative location of main";

pub struct Report {
    offset: Offset,
}

impl Report {
    pub fn new(offset: Offset) -> Self {
        Self { offset }
    }

    /// The report line without its terminator
    pub fn render(&self) -> String {
        format!("{}: {}", LABEL, self.offset)
    }

    /// Write the report line and flush
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", self.render())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_render_negative() {
        let report = Report::new(Offset::between(0x1000, 0x1400));
        assert_eq!(report.render(), "Relative location of main: -1024");
    }

    #[test]
    fn test_render_positive_has_no_plus() {
        let report = Report::new(Offset::between(0x1400, 0x1000));
        assert_eq!(report.render(), "Relative location of main: 1024");
    }

    #[test]
    fn test_write_to_appends_newline() {
        let mut out = Vec::new();
        Report::new(Offset::between(8, 0)).write_to(&mut out).unwrap();
        assert_eq!(out, b"Relative location of main: 8\n");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_to_propagates_io_error() {
        let err = Report::new(Offset::between(0, 0))
            .write_to(&mut FailingWriter)
            .unwrap_err();
        assert!(err.is_broken_pipe());
    }
}
