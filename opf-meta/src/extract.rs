//! Tag-prefix value extraction.

/// Return the inner text of the first tag matching `query`.
///
/// `query` is the start of an opening tag such as `<dc:title`. Scanning begins
/// one character after the match: characters up to the first `>` belong to
/// the opening tag, everything after it up to the next `<` is the value.
/// Returns an empty string when `query` does not occur in `buffer`.
///
/// This is not an XML parser. Self-closing tags, CDATA sections and encoded
/// `&lt;`/`&gt;` are not understood, and a value never contains `<`.
pub fn extract_field(buffer: &str, query: &str) -> String {
    let mut value = String::new();

    let Some(pos) = buffer.find(query) else {
        return value;
    };

    let mut in_value = false;
    for c in buffer[pos..].chars().skip(1) {
        if c == '<' {
            break;
        }
        if in_value {
            value.push(c);
        }
        if c == '>' {
            in_value = true;
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_simple_tag() {
        assert_eq!(extract_field("<dc:title>Dune</dc:title>", "<dc:title"), "Dune");
    }

    #[test]
    fn test_attributes_are_skipped() {
        assert_eq!(
            extract_field("<dc:title xmlns:x=\"y\">Dune</dc:title>", "<dc:title"),
            "Dune"
        );
        assert_eq!(
            extract_field(
                "<dc:creator opf:role=\"aut\" opf:file-as=\"Herbert, Frank\">Frank Herbert</dc:creator>",
                "<dc:creator"
            ),
            "Frank Herbert"
        );
    }

    #[test]
    fn test_missing_query() {
        assert_eq!(extract_field("<dc:title>Dune</dc:title>", "<dc:creator"), "");
        assert_eq!(extract_field("", "<dc:title"), "");
    }

    #[test]
    fn test_first_match_wins() {
        let buffer = "<dc:title>First</dc:title><dc:title>Second</dc:title>";
        assert_eq!(extract_field(buffer, "<dc:title"), "First");
    }

    #[test]
    fn test_prefix_matches_longer_tag_name() {
        // "<dc:date" also matches "<dc:dateX", the scan does not check the tag name end
        assert_eq!(extract_field("<dc:dateX>2001</dc:dateX>", "<dc:date"), "2001");
    }

    #[test]
    fn test_self_closing_tag_yields_empty() {
        let buffer = "<dc:title/><p>after</p>";
        assert_eq!(extract_field(buffer, "<dc:title"), "");
    }

    #[test]
    fn test_unterminated_value() {
        assert_eq!(extract_field("<dc:title>Dune", "<dc:title"), "Dune");
        assert_eq!(extract_field("<dc:title", "<dc:title"), "");
    }

    #[test]
    fn test_greater_than_inside_value_is_kept() {
        assert_eq!(extract_field("<dc:title>a > b</dc:title>", "<dc:title"), "a > b");
    }

    #[test]
    fn test_entities_are_not_decoded() {
        assert_eq!(
            extract_field("<dc:title>Tom &amp; Jerry</dc:title>", "<dc:title"),
            "Tom &amp; Jerry"
        );
    }

    #[test]
    fn test_multibyte_text() {
        let buffer = "<dc:title>Ærø – Ölands</dc:title>";
        assert_eq!(extract_field(buffer, "<dc:title"), "Ærø – Ölands");
    }

    #[test]
    fn test_multiline_value() {
        let buffer = "<dc:description>\r\n  line one\r\n  line two\r\n</dc:description>";
        assert_eq!(
            extract_field(buffer, "<dc:description"),
            "\r\n  line one\r\n  line two\r\n"
        );
    }

    proptest! {
        #[test]
        fn test_absent_query_is_empty(buffer in "[a-z<> ]{0,64}", query in "[A-Z]{1,8}") {
            // Buffer alphabet is lowercase, so an uppercase query can never match
            prop_assert_eq!(extract_field(&buffer, &query), "");
        }
    }
}
