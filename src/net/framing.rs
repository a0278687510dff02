//! Newline-delimited ASCII framing.

use std::io::{BufRead, Write};

use super::error::ProtocolError;

/// Write `line` followed by a newline, then flush.
pub fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<(), ProtocolError> {
    if !line.is_ascii() || line.contains('\n') {
        return Err(ProtocolError::NotAscii(line.to_string()));
    }
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read one line, without its terminator.
///
/// Returns `Ok(None)` if the stream ends before any byte of a new line.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, ProtocolError> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    if !buf.is_ascii() {
        return Err(ProtocolError::NotAscii(String::from_utf8_lossy(&buf).into_owned()));
    }
    // ASCII is valid UTF-8.
    Ok(Some(buf.into_iter().map(char::from).collect()))
}
