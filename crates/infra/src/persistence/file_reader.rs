// crates/infra/src/persistence/file_reader.rs
use std::{fs::File, io::Read, path::Path};

const UTF8_BOM: &str = "\u{feff}";

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the file as UTF-8 text, dropping a leading byte order mark.
    ///
    /// Invalid UTF-8 is reported as [`std::io::ErrorKind::InvalidData`].
    pub fn read_utf8(path: &Path) -> std::io::Result<String> {
        let bytes = Self::read_to_end(path)?;
        let text = String::from_utf8(bytes).map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        Ok(match text.strip_prefix(UTF8_BOM) {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }
}
