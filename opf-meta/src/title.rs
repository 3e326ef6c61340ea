//! Destination filename synthesis from OPF metadata.

use crate::metadata::BookMetadata;

const EXTENSION: &str = ".epub";

/// Build the backup filename for an OPF buffer.
///
/// The name has the form `Title - Author[Year].epub`, leaving out the author
/// and year parts when they are absent. Every `/` is replaced by `*` so the
/// name stays a single path component.
///
/// Returns an empty string when the buffer has no title. With `debug` set the
/// buffer is logged line by line before anything is extracted.
pub fn book_title(buffer: &str, debug: bool) -> String {
    if debug {
        for line in buffer.split('\r') {
            log::debug!("{}", line.trim());
        }
    }

    BookMetadata::from_opf(buffer).file_name()
}

impl BookMetadata {
    /// Filename for these fields, empty without a title
    pub fn file_name(&self) -> String {
        if self.title.is_empty() {
            return String::new();
        }

        let mut name = self.title.clone();
        if !self.author.is_empty() {
            name.push_str(" - ");
            name.push_str(&self.author);
        }
        if let Some(year) = &self.year {
            name.push('[');
            name.push_str(year);
            name.push(']');
        }
        name.push_str(EXTENSION);

        name.replace('/', "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(title: &str, author: &str, year: Option<&str>) -> BookMetadata {
        BookMetadata {
            title: title.to_string(),
            author: author.to_string(),
            year: year.map(str::to_string),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(
            meta("Dune", "Frank Herbert", Some("2020")).file_name(),
            "Dune - Frank Herbert[2020].epub"
        );
    }

    #[test]
    fn test_without_author() {
        assert_eq!(meta("Dune", "", Some("2020")).file_name(), "Dune[2020].epub");
    }

    #[test]
    fn test_without_year() {
        assert_eq!(
            meta("Dune", "Frank Herbert", None).file_name(),
            "Dune - Frank Herbert.epub"
        );
    }

    #[test]
    fn test_title_only() {
        assert_eq!(meta("Dune", "", None).file_name(), "Dune.epub");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(meta("", "Frank Herbert", Some("2020")).file_name(), "");
    }

    #[test]
    fn test_slash_replaced() {
        assert_eq!(
            meta("A/B Testing", "Dan Siroker/Pete Koomen", None).file_name(),
            "A*B Testing - Dan Siroker*Pete Koomen.epub"
        );
    }

    #[test]
    fn test_other_reserved_characters_kept() {
        assert_eq!(
            meta("What? Why: How\\", "", None).file_name(),
            "What? Why: How\\.epub"
        );
    }

    #[test]
    fn test_book_title_from_buffer() {
        let buffer = "<metadata>\r\n<dc:title>Dune</dc:title>\r\n\
                      <dc:creator>Frank Herbert</dc:creator>\r\n\
                      <dc:date>2020-01-15</dc:date>\r\n</metadata>";
        assert_eq!(book_title(buffer, false), "Dune - Frank Herbert[2020].epub");
        assert_eq!(book_title(buffer, true), "Dune - Frank Herbert[2020].epub");
    }

    #[test]
    fn test_book_title_without_title() {
        let buffer = "<dc:creator>Frank Herbert</dc:creator><dc:date>2020-01-15</dc:date>";
        assert_eq!(book_title(buffer, false), "");
    }
}
