//! Syntactic URL classification.
//!
//! Nothing here touches the network: these functions only decide whether a
//! string looks like a provider URL and pull the candidate id out of it.
//! Whether the id is actually served is decided by the resolver.

use crate::errors::{ResolveError, ResolveResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// `scheme://host[:port]` prefix with a dotted host
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:http|https|ftp)://[A-Z0-9][A-Z0-9_-]*(?:\.[A-Z0-9][A-Z0-9_-]*)+(?::\d+)?")
        .expect("Failed to compile URL regex")
});

/// YouTube id patterns in priority order. Group 1 is the id.
static YOUTUBE_REGEXES: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        r"v=([a-zA-Z0-9-]+)&",
        r"v/([^&\n]+)",
        r"v=([^&\n]+)",
        r"youtu\.be/([^&\n]+)",
    ]
    .map(|pattern| Regex::new(pattern).expect("Failed to compile YouTube regex"))
});

pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

fn ensure_valid_url(url: &str) -> ResolveResult<()> {
    if is_valid_url(url) {
        Ok(())
    } else {
        Err(ResolveError::MalformedUrl(url.to_string()))
    }
}

/// Extract the YouTube id candidate from a URL.
///
/// The id starting leftmost in the string wins; when two patterns yield an id
/// at the same offset the earlier pattern wins.
pub fn youtube_id_candidate(url: &str) -> ResolveResult<String> {
    ensure_valid_url(url)?;

    YOUTUBE_REGEXES
        .iter()
        .enumerate()
        .filter_map(|(priority, re)| {
            re.captures(url)
                .and_then(|caps| caps.get(1))
                .map(|id| (id.start(), priority, id.as_str()))
        })
        .min_by_key(|(start, priority, _)| (*start, *priority))
        .map(|(_, _, id)| id.to_string())
        .ok_or_else(|| ResolveError::NoMatch(url.to_string()))
}

/// Extract the Vimeo id candidate: the integer leading the URL path.
pub fn vimeo_id_candidate(url: &str) -> ResolveResult<u64> {
    ensure_valid_url(url)?;

    let parsed =
        url::Url::parse(url).map_err(|_| ResolveError::MalformedUrl(url.to_string()))?;

    let digits: String = parsed
        .path()
        .strip_prefix('/')
        .unwrap_or_default()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    match digits.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ResolveError::NoMatch(url.to_string())),
    }
}

/// A bare Vimeo id must be made of digits only.
pub fn parse_vimeo_id(value: &str) -> ResolveResult<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ResolveError::InvalidId(value.to_string()));
    }

    match value.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ResolveError::InvalidId(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("http://www.youtube.com/watch?v=abc"));
        assert!(is_valid_url("HTTPS://YOUTU.BE/abc"));
        assert!(is_valid_url("ftp://files.example.com:21/video"));
        assert!(is_valid_url("https://vimeo.com:8443/123"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("www.youtube.com/watch?v=abc"));
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("http://localhost/video"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_youtube_watch_url() {
        let id = youtube_id_candidate("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_youtube_param_followed_by_other_params() {
        let id =
            youtube_id_candidate("http://www.youtube.com/watch?v=ABC123&feature=related").unwrap();
        assert_eq!(id, "ABC123");
    }

    #[test]
    fn test_youtube_param_not_first() {
        let id = youtube_id_candidate("http://www.youtube.com/watch?feature=player&v=ABC-123")
            .unwrap();
        assert_eq!(id, "ABC-123");
    }

    #[test]
    fn test_youtube_param_with_unusual_chars_before_amp() {
        // the strict pattern rejects `_`, the permissive one still cuts at `&`
        let id = youtube_id_candidate("http://www.youtube.com/watch?v=ab_cd&x=1").unwrap();
        assert_eq!(id, "ab_cd");
    }

    #[test]
    fn test_youtube_v_path() {
        let id = youtube_id_candidate("http://www.youtube.com/v/dQw4w9WgXcQ&hl=en").unwrap();
        assert_eq!(id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_youtube_short_url() {
        assert_eq!(youtube_id_candidate("https://youtu.be/XYZ").unwrap(), "XYZ");
        assert_eq!(
            youtube_id_candidate("https://youtu.be/XYZ&t=10").unwrap(),
            "XYZ"
        );
    }

    #[test]
    fn test_youtube_leftmost_id_wins() {
        let id = youtube_id_candidate("http://www.youtube.com/v/first?v=second&x").unwrap();
        assert_eq!(id, "first?v=second");
    }

    #[test]
    fn test_youtube_no_id() {
        assert!(matches!(
            youtube_id_candidate("https://www.youtube.com/feed/trending"),
            Err(ResolveError::NoMatch(_))
        ));
        assert!(matches!(
            youtube_id_candidate("https://vimeo.com/123456789"),
            Err(ResolveError::NoMatch(_))
        ));
    }

    #[test]
    fn test_youtube_malformed() {
        assert!(matches!(
            youtube_id_candidate("youtube.com/watch?v=abc"),
            Err(ResolveError::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_vimeo_path_id() {
        assert_eq!(vimeo_id_candidate("https://vimeo.com/123456789").unwrap(), 123456789);
        assert_eq!(
            vimeo_id_candidate("http://vimeo.com/76979871?autoplay=1").unwrap(),
            76979871
        );
        assert_eq!(vimeo_id_candidate("http://vimeo.com/42/extra").unwrap(), 42);
        assert_eq!(vimeo_id_candidate("http://vimeo.com/42abc").unwrap(), 42);
    }

    #[test]
    fn test_vimeo_no_id() {
        assert!(vimeo_id_candidate("https://vimeo.com/channels/staffpicks").is_err());
        assert!(vimeo_id_candidate("https://vimeo.com/").is_err());
        assert!(vimeo_id_candidate("https://vimeo.com/0").is_err());
        assert!(matches!(
            vimeo_id_candidate("not a url"),
            Err(ResolveError::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_parse_vimeo_id() {
        assert_eq!(parse_vimeo_id("76979871").unwrap(), 76979871);
        assert!(parse_vimeo_id("").is_err());
        assert!(parse_vimeo_id("0").is_err());
        assert!(parse_vimeo_id("12a").is_err());
        assert!(parse_vimeo_id("-12").is_err());
        assert!(parse_vimeo_id("https://vimeo.com/12").is_err());
    }
}
