use crate::{UrlError, UrlResult};
use std::fmt;
use url::Url;

/// An absolute URL with its query and fragment removed
///
/// Canonical URLs are the keys used for deduplication and scope checks. The
/// canonicalization is lexical: `?a=1` and `?b=2` on the same path collapse
/// into one page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalUrl(Url);

impl CanonicalUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns this URL with a trailing `/` on its path
    ///
    /// Relative links found on an HTML page resolve against the page as if it
    /// were a directory, so `http://host/docs` becomes `http://host/docs/`.
    /// Query and fragment are already empty, so the path end is the string end.
    pub fn with_trailing_slash(&self) -> CanonicalUrl {
        if self.0.path().ends_with('/') || self.0.cannot_be_a_base() {
            return self.clone();
        }

        let mut url = self.0.clone();
        let path = format!("{}/", url.path());
        url.set_path(&path);
        CanonicalUrl(url)
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Canonicalizes a URL string, optionally resolving it against a base page
///
/// # Canonicalization Steps
///
/// 1. Without a base, prepend `http://` when the string carries no scheme
/// 2. Strip the first literal `www.` (see [`strip_www`])
/// 3. Parse, or resolve against `base` using standard reference resolution
/// 4. Remove the query and the fragment
///
/// # Examples
///
/// ```
/// use krawler::url::canonicalize;
///
/// let url = canonicalize("www.example.com/docs?page=2#intro", None).unwrap();
/// assert_eq!(url.as_str(), "http://example.com/docs");
///
/// let child = canonicalize("../about", Some(&canonicalize("example.com/a/b/", None).unwrap())).unwrap();
/// assert_eq!(child.as_str(), "http://example.com/a/about");
/// ```
pub fn canonicalize(raw: &str, base: Option<&CanonicalUrl>) -> UrlResult<CanonicalUrl> {
    let raw = raw.trim();

    let with_scheme;
    let raw = if base.is_none() && !has_scheme(raw) {
        with_scheme = format!("http://{}", raw);
        with_scheme.as_str()
    } else {
        raw
    };

    let stripped = strip_www(raw);

    let parsed = match base {
        Some(base) => base.as_url().join(&stripped),
        None => Url::parse(&stripped),
    };
    let mut url = parsed.map_err(|source| UrlError::Parse {
        url: raw.to_string(),
        source,
    })?;

    url.set_query(None);
    url.set_fragment(None);

    Ok(CanonicalUrl(url))
}

/// Removes the first literal occurrence of `www.` from the string
///
/// This is a textual replace, not a host-aware one: `www.` inside a path is
/// stripped too when the host has none. Subdomain comparison relies on the
/// host never keeping its `www.` label.
pub fn strip_www(raw: &str) -> String {
    raw.replacen("www.", "", 1)
}

fn has_scheme(raw: &str) -> bool {
    raw.split_once("://").map_or(false, |(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
