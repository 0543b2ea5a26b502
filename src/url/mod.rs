//! URL handling module for Krawler
//!
//! This module provides URL canonicalization, registrable-domain extraction,
//! and the crawl scope that decides which discovered links may be followed.

mod canonical;
mod domain;

// Re-export main functions
pub use canonical::{canonicalize, strip_www, CanonicalUrl};
pub use domain::{extract_domain, split_host};

use url::Url;

/// The part of the web a crawl is allowed to visit
///
/// Derived once from the root URL and never changed afterwards, so a redirect
/// or an odd link cannot move the crawl onto another site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlScope {
    /// Registrable domain, e.g. `example.com`
    pub registrable_domain: String,

    /// Subdomain labels in front of the registrable domain, e.g. `blog`
    pub subdomain: String,
}

impl CrawlScope {
    /// Derives the scope of a URL
    ///
    /// Returns `None` when the URL has no host (`mailto:`, `data:`, ...).
    pub fn from_url(url: &Url) -> Option<Self> {
        let host = extract_domain(url)?;
        let (registrable_domain, subdomain) = split_host(&host);
        Some(Self {
            registrable_domain,
            subdomain,
        })
    }

    /// Returns true if `candidate` has exactly this registrable domain and subdomain
    pub fn contains(&self, candidate: &Url) -> bool {
        Self::from_url(candidate).as_ref() == Some(self)
    }
}

/// Decides whether a discovered link belongs to the crawl scope
///
/// # Examples
///
/// ```
/// use krawler::url::{canonicalize, in_scope, CrawlScope};
///
/// let root = canonicalize("https://www.example.com/", None).unwrap();
/// let scope = CrawlScope::from_url(root.as_url()).unwrap();
///
/// let docs = canonicalize("/docs", Some(&root)).unwrap();
/// let blog = canonicalize("https://blog.example.com/", None).unwrap();
/// assert!(in_scope(&docs, &scope));
/// assert!(!in_scope(&blog, &scope));
/// ```
pub fn in_scope(candidate: &CanonicalUrl, scope: &CrawlScope) -> bool {
    scope.contains(candidate.as_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope_of(url: &str) -> CrawlScope {
        CrawlScope::from_url(canonicalize(url, None).unwrap().as_url()).unwrap()
    }

    fn url(url: &str) -> CanonicalUrl {
        canonicalize(url, None).unwrap()
    }

    #[test]
    fn test_scope_from_root() {
        let scope = scope_of("https://docs.example.com/start");
        assert_eq!(scope.registrable_domain, "example.com");
        assert_eq!(scope.subdomain, "docs");
    }

    #[test]
    fn test_www_root_has_empty_subdomain() {
        let scope = scope_of("www.example.com");
        assert_eq!(scope.registrable_domain, "example.com");
        assert_eq!(scope.subdomain, "");
    }

    #[test]
    fn test_same_site_in_scope() {
        let scope = scope_of("example.com");
        assert!(in_scope(&url("http://example.com/a/b"), &scope));
        assert!(in_scope(&url("https://example.com/"), &scope));
    }

    #[test]
    fn test_www_link_in_scope() {
        let scope = scope_of("example.com");
        assert!(in_scope(&url("http://www.example.com/about"), &scope));
    }

    #[test]
    fn test_other_subdomain_out_of_scope() {
        let scope = scope_of("example.com");
        assert!(!in_scope(&url("http://blog.example.com/"), &scope));
    }

    #[test]
    fn test_parent_domain_out_of_scope_for_subdomain_root() {
        let scope = scope_of("http://blog.example.com/");
        assert!(!in_scope(&url("http://example.com/"), &scope));
        assert!(in_scope(&url("http://blog.example.com/post/1"), &scope));
    }

    #[test]
    fn test_other_domain_out_of_scope() {
        let scope = scope_of("example.com");
        assert!(!in_scope(&url("http://example.org/"), &scope));
        assert!(!in_scope(&url("http://notexample.com/"), &scope));
    }

    #[test]
    fn test_hostless_url_out_of_scope() {
        let scope = scope_of("example.com");
        let root = url("http://example.com/");
        let mail = canonicalize("mailto:me@example.com", Some(&root)).unwrap();
        assert!(!in_scope(&mail, &scope));
    }

    #[test]
    fn test_port_is_not_part_of_scope() {
        let scope = scope_of("http://127.0.0.1:8080/");
        assert!(in_scope(&url("http://127.0.0.1:9090/x"), &scope));
        assert!(!in_scope(&url("http://127.0.0.2:8080/x"), &scope));
    }
}
