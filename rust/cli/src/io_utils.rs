//! Line-based input helpers for interactive commands.

use std::io::BufRead;

/// Reads one line of input, blocking until available.
///
/// The line is trimmed and a leading UTF-8 BOM (left by some editors in piped
/// script files) is removed.
///
/// # Returns
///
/// * `Ok(Some(String))` - Trimmed input line (may be empty after trimming)
/// * `Ok(None)` - End of input
/// * `Err(_)` - The underlying reader failed
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use advisor_cli::io_utils::read_line;
///
/// let mut input = Cursor::new("  ah \n");
/// assert_eq!(read_line(&mut input).unwrap(), Some("ah".to_string()));
/// assert_eq!(read_line(&mut input).unwrap(), None);
/// ```
pub fn read_line(input: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    strip_utf8_bom(&mut line);
    Ok(Some(line.trim().to_string()))
}

/// Strip UTF-8 BOM (Byte Order Mark) from the beginning of a string if present.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
