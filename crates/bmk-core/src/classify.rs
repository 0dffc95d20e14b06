//! Bookmark classification and display-name rewrite.

/// Prefix prepended to the display name of every clearnet bookmark.
pub const CLEARNET_PREFIX: &str = "c-";

const ONION_MARKER: &str = ".onion";

/// How a bookmark URL is classified for the naming transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlClass {
    Onion,
    Clearnet,
}

/// Classifies a URL by substring: `.onion` anywhere in the string (host,
/// path, or query) counts as onion. Not a URL parse.
pub fn classify(url: &str) -> UrlClass {
    if url.contains(ONION_MARKER) {
        UrlClass::Onion
    } else {
        UrlClass::Clearnet
    }
}

/// Display name after the naming transform: clearnet bookmarks get the
/// `c-` prefix, onion bookmarks keep their name unchanged.
pub fn display_name(name: &str, url: &str) -> String {
    match classify(url) {
        UrlClass::Onion => name.to_string(),
        UrlClass::Clearnet => format!("{CLEARNET_PREFIX}{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearnet_url_gets_prefix() {
        assert_eq!(classify("http://example.com"), UrlClass::Clearnet);
        assert_eq!(display_name("Example", "http://example.com"), "c-Example");
    }

    #[test]
    fn onion_host_keeps_name() {
        assert_eq!(classify("http://abc123.onion/page"), UrlClass::Onion);
        assert_eq!(display_name("Hidden", "http://abc123.onion/page"), "Hidden");
    }

    #[test]
    fn onion_in_path_counts() {
        assert_eq!(
            classify("http://example.com/mirror/abc.onion/index.html"),
            UrlClass::Onion
        );
    }

    #[test]
    fn onion_in_query_counts() {
        assert_eq!(
            classify("http://example.com/?redirect=xyz.onion"),
            UrlClass::Onion
        );
    }

    #[test]
    fn dot_onion_substring_only() {
        // "onion" without a leading dot does not match.
        assert_eq!(classify("http://onion.example.com"), UrlClass::Clearnet);
        // ".onion" matches even when it is not the TLD.
        assert_eq!(classify("http://my.onion-mirror.example"), UrlClass::Onion);
    }
}
