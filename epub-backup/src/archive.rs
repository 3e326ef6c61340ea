// EPUB archive access: locate and read the OPF package document

use crate::error::NameError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Suffix of the package-description entry inside an EPUB
pub const OPF_SUFFIX: &str = ".opf";

/// An opened EPUB zip archive
pub struct EpubArchive {
    path: PathBuf,
    zip: ZipArchive<BufReader<File>>,
}

impl EpubArchive {
    /// Open an EPUB, failing with `NotFound` when the path does not exist
    pub fn open(path: &Path) -> Result<Self, NameError> {
        if !path.exists() {
            return Err(NameError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let zip = ZipArchive::new(BufReader::new(file)).map_err(|e| archive_error(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            zip,
        })
    }

    /// Name of the first entry (in archive order) ending with `suffix`
    pub fn find_entry_by_suffix(&mut self, suffix: &str) -> Result<Option<String>, NameError> {
        for i in 0..self.zip.len() {
            let entry = self.zip.by_index(i).map_err(|e| archive_error(&self.path, e))?;
            if entry.name().ends_with(suffix) {
                return Ok(Some(entry.name().to_string()));
            }
        }
        Ok(None)
    }

    /// Read an entry as text, replacing invalid UTF-8
    pub fn read_entry_as_text(&mut self, name: &str) -> Result<String, NameError> {
        let mut bytes = Vec::new();
        {
            let mut entry = self.zip.by_name(name).map_err(|e| archive_error(&self.path, e))?;
            entry.read_to_end(&mut bytes)?;
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn archive_error(path: &Path, source: zip::result::ZipError) -> NameError {
    NameError::Archive {
        path: path.to_path_buf(),
        source,
    }
}

/// Read the package document of the EPUB at `path`.
///
/// Returns `None` when the archive holds no `.opf` entry.
pub fn read_opf(path: &Path) -> Result<Option<String>, NameError> {
    let mut archive = EpubArchive::open(path)?;

    let Some(opf_name) = archive.find_entry_by_suffix(OPF_SUFFIX)? else {
        return Ok(None);
    };

    archive.read_entry_as_text(&opf_name).map(Some)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs::File;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    /// Minimal OPF document with the given descriptive elements
    pub fn opf(title: &str, creator: &str, date: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n\
             <package xmlns=\"http://www.idpf.org/2007/opf\" version=\"2.0\">\r\n\
             <metadata xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\r\n\
             <dc:title>{title}</dc:title>\r\n\
             <dc:creator opf:role=\"aut\">{creator}</dc:creator>\r\n\
             <dc:date>{date}</dc:date>\r\n\
             </metadata>\r\n\
             </package>\r\n"
        )
    }

    /// Write a zip archive with the given (name, content) entries
    pub fn write_epub(dir: &Path, file_name: &str, entries: &[(&str, &str)]) -> PathBuf {
        let path = dir.join(file_name);
        let mut writer = ZipWriter::new(File::create(&path).unwrap());
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        writer.start_file("mimetype", options).unwrap();
        writer.write_all(b"application/epub+zip").unwrap();
        for (name, content) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();

        path
    }

    /// Write an EPUB whose package document carries the given metadata
    pub fn write_book(dir: &Path, file_name: &str, title: &str, creator: &str, date: &str) -> PathBuf {
        let content = opf(title, creator, date);
        write_epub(dir, file_name, &[("OEBPS/content.opf", content.as_str())])
    }
}
