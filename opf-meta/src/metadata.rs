// Descriptive fields read from an OPF package document

use crate::extract::extract_field;

const TITLE_TAG: &str = "<dc:title";
const CREATOR_TAGS: &[&str] = &["<dc:creator", "<creator"];
const DATE_TAGS: &[&str] = &["<dc:date", r#"<meta property="dcterms:modified""#];

/// Number of leading characters of a date kept as the year
const YEAR_LEN: usize = 4;

/// Metadata fields used to name a backup copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookMetadata {
    /// Book title, empty when absent
    pub title: String,
    /// Primary author, empty when absent
    pub author: String,
    /// Four character year prefix of the publication or modification date
    pub year: Option<String>,
}

impl BookMetadata {
    /// Read all fields from an OPF buffer
    pub fn from_opf(buffer: &str) -> Self {
        Self {
            title: title(buffer),
            author: author(buffer),
            year: year(buffer),
        }
    }
}

/// Title from `<dc:title>`, no fallback
pub fn title(buffer: &str) -> String {
    extract_field(buffer, TITLE_TAG)
}

/// Author from `<dc:creator>`, falling back to a bare `<creator>`
pub fn author(buffer: &str) -> String {
    first_non_empty(buffer, CREATOR_TAGS)
}

/// Year from `<dc:date>`, falling back to the `dcterms:modified` meta tag.
///
/// Only dates longer than four characters yield a year; a value of four
/// characters or fewer (including a bare `"2020"`) counts as no year.
pub fn year(buffer: &str) -> Option<String> {
    let date = first_non_empty(buffer, DATE_TAGS);
    if date.chars().count() > YEAR_LEN {
        Some(date.chars().take(YEAR_LEN).collect())
    } else {
        None
    }
}

fn first_non_empty(buffer: &str, queries: &[&str]) -> String {
    queries
        .iter()
        .map(|query| extract_field(buffer, query))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}
