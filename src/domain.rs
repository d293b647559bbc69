//! Domain normalization utilities.
//!
//! Dataset records and map `<area>` elements reference domains in mixed
//! forms: bare hostnames, full URLs, `www.`-prefixed names. Analytics are
//! keyed by hostname, so everything is folded into one canonical form
//! before lookup: lowercase hostname with the scheme and a leading `www.`
//! stripped.

/// Normalizes a raw domain reference into a canonical hostname.
///
/// # Arguments
///
/// * `raw` - A bare hostname, a full URL, or anything in between
///
/// # Returns
///
/// The lowercase hostname with scheme and leading `www.` removed, or an
/// empty string when no hostname can be recovered. Duplicate domains are
/// legitimate input (one owner can hold several rectangles), so this is a
/// normalization, not a uniqueness guarantee.
pub fn normalize_domain(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let host = if trimmed.contains("://") {
        match url::Url::parse(trimmed) {
            Ok(parsed) => match parsed.host_str() {
                Some(host) => host.to_string(),
                None => return String::new(),
            },
            Err(_) => return String::new(),
        }
    } else {
        // Bare hostname, possibly carrying a path or query suffix
        match trimmed.split(['/', '?', '#']).next() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return String::new(),
        }
    };

    let host = host.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    if host.is_empty() || host.contains(char::is_whitespace) {
        return String::new();
    }
    host.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_hostname() {
        assert_eq!(normalize_domain("example.com"), "example.com");
    }

    #[test]
    fn test_normalize_strips_scheme() {
        assert_eq!(normalize_domain("http://example.com"), "example.com");
        assert_eq!(normalize_domain("https://example.com/path"), "example.com");
    }

    #[test]
    fn test_normalize_strips_www() {
        assert_eq!(normalize_domain("www.example.com"), "example.com");
        assert_eq!(normalize_domain("https://www.example.com"), "example.com");
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_domain("EXAMPLE.Com"), "example.com");
        assert_eq!(normalize_domain("https://WWW.Example.COM"), "example.com");
    }

    #[test]
    fn test_normalize_drops_path_and_query() {
        assert_eq!(normalize_domain("example.com/page?q=1"), "example.com");
        assert_eq!(normalize_domain("example.com#anchor"), "example.com");
    }

    #[test]
    fn test_normalize_unparsable_is_empty() {
        assert_eq!(normalize_domain(""), "");
        assert_eq!(normalize_domain("   "), "");
        assert_eq!(normalize_domain("://broken"), "");
        assert_eq!(normalize_domain("not a domain"), "");
    }

    #[test]
    fn test_normalize_keeps_subdomains() {
        // Only a leading "www." is stripped; other subdomains are part of
        // the identity
        assert_eq!(normalize_domain("shop.example.com"), "shop.example.com");
        assert_eq!(
            normalize_domain("www.shop.example.com"),
            "shop.example.com"
        );
    }
}
