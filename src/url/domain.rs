use std::net::IpAddr;
use url::Url;

/// Public suffixes made of two labels
///
/// Hosts ending in one of these keep three labels in their registrable
/// domain (`shop.example.co.uk` -> `example.co.uk`). Every other host keeps two.
const TWO_LABEL_SUFFIXES: &[&str] = &[
    "co.uk", "org.uk", "ac.uk", "gov.uk", "me.uk", "net.uk", "ltd.uk", "plc.uk",
    "com.au", "net.au", "org.au", "edu.au", "gov.au", "asn.au", "id.au",
    "co.nz", "org.nz", "net.nz", "ac.nz", "govt.nz",
    "co.jp", "ne.jp", "or.jp", "ac.jp", "go.jp",
    "co.kr", "or.kr", "ac.kr",
    "co.in", "net.in", "org.in", "ac.in", "gov.in",
    "co.za", "org.za", "ac.za", "gov.za",
    "com.br", "net.br", "org.br", "gov.br",
    "com.cn", "net.cn", "org.cn", "gov.cn", "edu.cn",
    "com.mx", "org.mx", "gob.mx",
    "com.ar", "com.tr", "com.tw", "com.hk", "com.sg", "com.my",
    "co.il", "co.id", "or.id", "ac.id",
];

/// Extracts the lowercase host of a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use krawler::url::extract_domain;
///
/// let url = Url::parse("https://Blog.Example.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("blog.example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Splits a host into its registrable domain and its subdomain
///
/// IP addresses and single-label hosts (`localhost`) are their own
/// registrable domain with an empty subdomain.
///
/// Only the suffixes in `TWO_LABEL_SUFFIXES` are treated as public. Hosting
/// suffixes from the full public suffix list such as `github.io` or
/// `blogspot.com` are not, so `user.github.io` splits into `github.io` and
/// the subdomain `user`. Roots and links go through the same rule.
///
/// # Examples
///
/// ```
/// use krawler::url::split_host;
///
/// assert_eq!(split_host("blog.example.com"), ("example.com".to_string(), "blog".to_string()));
/// assert_eq!(split_host("example.co.uk"), ("example.co.uk".to_string(), String::new()));
/// ```
pub fn split_host(host: &str) -> (String, String) {
    let host = host.trim_end_matches('.').to_lowercase();

    if is_ip_literal(&host) {
        return (host, String::new());
    }

    let labels: Vec<&str> = host.split('.').collect();
    let suffix_len = if labels.len() >= 3
        && TWO_LABEL_SUFFIXES.contains(&labels[labels.len() - 2..].join(".").as_str())
    {
        2
    } else {
        1
    };

    if labels.len() <= suffix_len + 1 {
        return (host, String::new());
    }

    let split_at = labels.len() - suffix_len - 1;
    (labels[split_at..].join("."), labels[..split_at].join("."))
}

fn is_ip_literal(host: &str) -> bool {
    host.starts_with('[') || host.parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(host: &str) -> (String, String) {
        split_host(host)
    }

    #[test]
    fn test_extract_simple_domain() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_with_port() {
        let url = Url::parse("https://example.com:8080/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_no_host() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert_eq!(extract_domain(&url), None);
    }

    #[test]
    fn test_split_bare_domain() {
        assert_eq!(split("example.com"), ("example.com".into(), "".into()));
    }

    #[test]
    fn test_split_subdomain() {
        assert_eq!(split("blog.example.com"), ("example.com".into(), "blog".into()));
    }

    #[test]
    fn test_split_nested_subdomain() {
        assert_eq!(
            split("api.v2.example.com"),
            ("example.com".into(), "api.v2".into())
        );
    }

    #[test]
    fn test_split_two_label_suffix() {
        assert_eq!(split("example.co.uk"), ("example.co.uk".into(), "".into()));
        assert_eq!(
            split("shop.example.co.uk"),
            ("example.co.uk".into(), "shop".into())
        );
    }

    #[test]
    fn test_split_lowercases() {
        assert_eq!(split("Blog.EXAMPLE.com"), ("example.com".into(), "blog".into()));
    }

    #[test]
    fn test_split_trailing_dot() {
        assert_eq!(split("example.com."), ("example.com".into(), "".into()));
    }

    #[test]
    fn test_split_ipv4() {
        assert_eq!(split("127.0.0.1"), ("127.0.0.1".into(), "".into()));
    }

    #[test]
    fn test_split_ipv6() {
        assert_eq!(split("[::1]"), ("[::1]".into(), "".into()));
    }

    #[test]
    fn test_split_single_label() {
        assert_eq!(split("localhost"), ("localhost".into(), "".into()));
    }

    #[test]
    fn test_hosting_suffix_is_not_public() {
        assert_eq!(
            split("user.github.io"),
            ("github.io".into(), "user".into())
        );
        assert_eq!(
            split("myblog.blogspot.com"),
            ("blogspot.com".into(), "myblog".into())
        );
    }

    #[test]
    fn test_www_is_a_subdomain() {
        assert_eq!(split("www.example.com"), ("example.com".into(), "www".into()));
    }
}
