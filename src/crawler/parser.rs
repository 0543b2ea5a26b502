//! HTML parser for discovering links
//!
//! Collects the `href` of every anchor in document order. Resolution,
//! canonicalization and scope filtering happen in the traversal engine.

use scraper::{Html, Selector};

/// Returns the raw `href` values of all anchors, in document order
///
/// An anchor without an `href` contributes an empty string, which resolves
/// to the page itself and is dropped as a self-link. Unclosed anchors can be
/// repeated by HTML5 tree reconstruction.
///
/// # Example
///
/// ```
/// use krawler::crawler::extract_hrefs;
///
/// let html = r#"<a href="/one">1</a><p><a href="two">2</a></p>"#;
/// assert_eq!(extract_hrefs(html), vec!["/one", "two"]);
/// ```
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .map(|element| element.value().attr("href").unwrap_or("").to_string())
        .collect()
}

/// Returns true if a resolved link uses a scheme the crawler can fetch
pub fn is_crawlable_scheme(scheme: &str) -> bool {
    scheme == "http" || scheme == "https"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hrefs_in_document_order() {
        let html = r#"
            <html>
            <body>
                <nav><a href="/home">Home</a></nav>
                <main><a href="page1">Page 1</a><a href="../up">Up</a></main>
                <footer><a href="https://other.com/">Other</a></footer>
            </body>
            </html>
        "#;
        assert_eq!(
            extract_hrefs(html),
            vec!["/home", "page1", "../up", "https://other.com/"]
        );
    }

    #[test]
    fn test_anchor_without_href_is_empty() {
        let html = r#"<a name="top">Top</a><a href="/x">X</a>"#;
        assert_eq!(extract_hrefs(html), vec!["", "/x"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let html = r#"<a href="/x">1</a><a href="/x">2</a>"#;
        assert_eq!(extract_hrefs(html), vec!["/x", "/x"]);
    }

    #[test]
    fn test_non_anchor_links_ignored() {
        let html = r#"
            <link rel="stylesheet" href="/style.css">
            <script src="/app.js"></script>
            <img src="/logo.png">
        "#;
        assert!(extract_hrefs(html).is_empty());
    }

    #[test]
    fn test_malformed_html() {
        // Tree construction reopens the unclosed anchor inside <p>; the
        // duplicate is deduped when it is visited
        let html = r#"<div><a href="/ok">unclosed<p><a href="/also">"#;
        assert_eq!(extract_hrefs(html), vec!["/ok", "/ok", "/also"]);
    }

    #[test]
    fn test_crawlable_scheme() {
        assert!(is_crawlable_scheme("http"));
        assert!(is_crawlable_scheme("https"));
        assert!(!is_crawlable_scheme("mailto"));
        assert!(!is_crawlable_scheme("javascript"));
        assert!(!is_crawlable_scheme("ftp"));
    }
}
