use crate::url::CanonicalUrl;
use std::collections::HashSet;

/// Registry of canonical URLs already claimed by the traversal
///
/// The set only grows for the lifetime of one crawl. The engine claims a URL
/// before issuing any request for it, so a page linked from several places is
/// fetched at most once.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as visited
    ///
    /// Returns true the first time a URL is seen; false, without touching the
    /// set, on every later call.
    pub fn mark_if_new(&mut self, url: &CanonicalUrl) -> bool {
        if self.urls.contains(url.as_str()) {
            return false;
        }
        self.urls.insert(url.as_str().to_string())
    }

    pub fn contains(&self, url: &CanonicalUrl) -> bool {
        self.urls.contains(url.as_str())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::canonicalize;

    #[test]
    fn test_first_mark_is_new() {
        let mut visited = VisitedSet::new();
        let url = canonicalize("http://example.com/", None).unwrap();

        assert!(visited.mark_if_new(&url));
        assert!(visited.contains(&url));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_second_mark_is_not_new() {
        let mut visited = VisitedSet::new();
        let url = canonicalize("http://example.com/", None).unwrap();

        assert!(visited.mark_if_new(&url));
        assert!(!visited.mark_if_new(&url));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_canonical_forms_dedupe() {
        let mut visited = VisitedSet::new();
        let a = canonicalize("http://www.example.com/page?x=1", None).unwrap();
        let b = canonicalize("http://example.com/page#top", None).unwrap();

        assert!(visited.mark_if_new(&a));
        assert!(!visited.mark_if_new(&b));
    }

    #[test]
    fn test_trailing_slash_is_distinct() {
        let mut visited = VisitedSet::new();
        let a = canonicalize("http://example.com/page", None).unwrap();

        assert!(visited.mark_if_new(&a));
        assert!(visited.mark_if_new(&a.with_trailing_slash()));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_empty() {
        let visited = VisitedSet::new();
        assert!(visited.is_empty());
    }
}
