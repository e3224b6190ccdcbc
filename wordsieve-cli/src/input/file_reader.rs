//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Byte-oriented file reader; input is not required to be UTF-8
pub struct FileReader;

impl FileReader {
    /// Read a whole file as bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read a file, or stdin when `path` is `-`
    pub fn read_input(path: &Path) -> Result<Vec<u8>> {
        if path == Path::new("-") {
            let mut content = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        } else {
            Self::read_bytes(path)
        }
    }
}

/// One input line split from its terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number
    pub number: usize,
    /// Line content without terminator
    pub content: &'a [u8],
    /// Trailing `\r`/`\n` bytes, possibly empty on the last line
    pub ending: &'a [u8],
}

/// Split `data` into lines, keeping each terminator separately
pub fn lines(data: &[u8]) -> impl Iterator<Item = Line<'_>> {
    data.split_inclusive(|&b| b == b'\n')
        .enumerate()
        .map(|(index, raw)| {
            let content_len = raw
                .iter()
                .rposition(|&b| b != b'\r' && b != b'\n')
                .map_or(0, |last| last + 1);
            let (content, ending) = raw.split_at(content_len);
            Line {
                number: index + 1,
                content,
                ending,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_bytes_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = b"plain ascii\n\xb0\xa1 legacy bytes\n";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_bytes(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_bytes_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_bytes(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_lines_split_terminators() {
        let data = b"one\r\ntwo\n\nlast";
        let lines: Vec<_> = lines(data).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            Line {
                number: 1,
                content: b"one",
                ending: b"\r\n"
            }
        );
        assert_eq!(lines[1].content, b"two");
        assert_eq!(lines[2].content, b"");
        assert_eq!(lines[2].ending, b"\n");
        assert_eq!(lines[3].content, b"last");
        assert_eq!(lines[3].ending, b"");
        assert_eq!(lines[3].number, 4);
    }

    #[test]
    fn test_lines_of_empty_input() {
        assert_eq!(lines(b"").count(), 0);
    }

    #[test]
    fn test_lines_rejoin_to_original() {
        let data = b"a\r\nb\nc";
        let rejoined: Vec<u8> = lines(data)
            .flat_map(|line| line.content.iter().chain(line.ending).copied())
            .collect();
        assert_eq!(rejoined, data);
    }
}
