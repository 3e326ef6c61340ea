// Destination names for EPUB archives

use crate::archive;
use crate::error::NameError;
use std::path::Path;

/// Backup filename for the EPUB at `path`.
///
/// An empty name means the book cannot be renamed: the archive has no OPF
/// document, the document is empty, or it carries no title. A missing or
/// unreadable archive is an error for this one file.
pub fn epub_name(path: &Path, debug: bool) -> Result<String, NameError> {
    let Some(buffer) = archive::read_opf(path)? else {
        log::info!("{} has no *{} file", display_name(path), archive::OPF_SUFFIX);
        return Ok(String::new());
    };

    if buffer.is_empty() {
        log::info!("{} has an empty *{} file", display_name(path), archive::OPF_SUFFIX);
        return Ok(String::new());
    }

    Ok(opf_meta::book_title(&buffer, debug))
}

/// File name component of `path` for messages
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
