use memmap2::Mmap;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::core::error::CompareError;

const MMAP_THRESHOLD: u64 = 1024 * 1024; // 1 MiB

pub enum FileContent
{
    Mapped(Mmap),
    Buffered(String),
}

impl FileContent
{
    /// Borrow the content as UTF-8. Mapped files are validated here;
    /// buffered files were validated on read.
    pub fn as_str(&self) -> io::Result<&str>
    {
        match self
        {
            FileContent::Mapped(mmap) => std::str::from_utf8(mmap)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            FileContent::Buffered(s) => Ok(s.as_str()),
        }
    }
}

/// Read a document, memory-mapping anything above 1 MiB.
pub fn read_file_smart<P: AsRef<Path>>(path: P) -> Result<FileContent, CompareError>
{
    let path = path.as_ref();
    let metadata =
        std::fs::metadata(path).map_err(|e| CompareError::document_read(path, e))?;

    if metadata.len() > MMAP_THRESHOLD
    {
        let file = File::open(path).map_err(|e| CompareError::document_read(path, e))?;

        // Safety: read-only map of an existing regular file
        let mmap =
            unsafe { Mmap::map(&file) }.map_err(|e| CompareError::document_read(path, e))?;

        Ok(FileContent::Mapped(mmap))
    }
    else
    {
        let content =
            std::fs::read_to_string(path).map_err(|e| CompareError::document_read(path, e))?;

        Ok(FileContent::Buffered(content))
    }
}

/// Read a document into raw lines (CRLF tolerated, blank lines kept).
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CompareError>
{
    let path = path.as_ref();
    let content = read_file_smart(path)?;
    let text = content
        .as_str()
        .map_err(|e| CompareError::document_read(path, e))?;

    // Leading BOM is not part of the first paragraph
    let text = text
        .strip_prefix('\u{feff}')
        .unwrap_or(text);

    Ok(text
        .lines()
        .map(str::to_string)
        .collect())
}
