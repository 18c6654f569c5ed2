use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Count the lines of a UTF-8 text file.
///
/// # Errors
///
/// [`EngineError::FileRead`] when the file cannot be opened or read, and
/// [`EngineError::Decode`] when its contents are not valid UTF-8.
pub fn count_file_lines(path: &Path) -> Result<u64> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    count_reader_lines(&mut BufReader::new(file), path)
}

/// Count lines the way universal-newline text iteration does.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. A trailing segment without a
/// terminator is one more line; empty input has none. Each chunk is validated
/// as UTF-8 on its own, which is sound because `\n` never occurs inside a
/// multi-byte sequence.
pub fn count_reader_lines<R: BufRead>(reader: &mut R, path: &Path) -> Result<u64> {
    let mut lines = 0u64;
    let mut consumed = 0u64;
    let mut chunk = Vec::new();

    loop {
        chunk.clear();
        match reader.read_until(b'\n', &mut chunk) {
            Ok(0) => break,
            Ok(_) => {
                std::str::from_utf8(&chunk).map_err(|e| EngineError::Decode {
                    path: path.to_path_buf(),
                    offset: consumed + e.valid_up_to() as u64,
                    source: e,
                })?;
                lines += count_chunk_lines(&chunk);
                consumed += chunk.len() as u64;
            }
            Err(e) => {
                return Err(EngineError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        }
    }

    Ok(lines)
}

/// Lines in one `read_until` chunk. Only the final chunk of a file may end
/// without `\n`, so a `\r\n` pair is never split across chunks.
fn count_chunk_lines(chunk: &[u8]) -> u64 {
    let mut lines = 0u64;
    let mut bytes = chunk.iter().peekable();
    while let Some(&byte) = bytes.next() {
        match byte {
            b'\n' => lines += 1,
            b'\r' => {
                if bytes.peek() == Some(&&b'\n') {
                    bytes.next();
                }
                lines += 1;
            }
            _ => {}
        }
    }
    if chunk.last().is_some_and(|&b| b != b'\n' && b != b'\r') {
        lines += 1;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn count(bytes: &[u8]) -> u64 {
        count_reader_lines(&mut Cursor::new(bytes), Path::new("mem")).unwrap()
    }

    #[test]
    fn test_terminated_lines() {
        assert_eq!(count(b"a\nb\nc\n"), 3);
    }

    #[test]
    fn test_trailing_partial_line() {
        assert_eq!(count(b"a\nb"), 2);
        assert_eq!(count(b"no newline at all"), 1);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(count(b""), 0);
    }

    #[test]
    fn test_blank_lines_count() {
        assert_eq!(count(b"\n\n\n"), 3);
    }

    #[test]
    fn test_universal_newlines() {
        assert_eq!(count(b"a\r\nb\r\n"), 2);
        assert_eq!(count(b"a\rb\rc"), 3);
        assert_eq!(count(b"a\r"), 1);
        assert_eq!(count(b"\r\n\r"), 2);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(count("ファイル\n行数\n".as_bytes()), 2);
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = count_reader_lines(&mut Cursor::new(b"ok\n\xff\xfe\n"), Path::new("bad.py"))
            .unwrap_err();
        assert!(matches!(err, EngineError::Decode { offset: 3, .. }));
        assert_eq!(err.path(), Some(Path::new("bad.py")));
        assert_eq!(err.to_string(), "invalid utf-8 sequence at byte 3");
    }

    #[test]
    fn test_decode_offset_is_file_position() {
        let bytes = b"first line\nsecond\nthi\xffrd\n";
        let err = count_reader_lines(&mut Cursor::new(bytes), Path::new("late.py")).unwrap_err();
        match err {
            EngineError::Decode { offset, .. } => assert_eq!(offset, 21),
            other => panic!("expected decode error, got {other}"),
        }
    }

    #[test]
    fn test_count_file_on_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "fn main() {{}}\n\n// end").unwrap();
        assert_eq!(count_file_lines(file.path()).unwrap(), 3);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = count_file_lines(&dir.path().join("gone.rs")).unwrap_err();
        assert!(matches!(err, EngineError::FileRead { .. }));
    }
}
