//! The `absolute` transform: absolutize relative resource references.
//!
//! Scans the body for `src="..."` / `href="..."` attribute values and
//! prefixes relative ones with the upstream origin. This is a byte-level
//! scan, not a DOM parse; values that already carry a scheme (`://`) are
//! left untouched.

use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::bytes::{Captures, Regex};
use url::Url;

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(src|href)="([^"]*)""#).expect("attribute pattern compiles")
});

/// Rewrite relative `src`/`href` values against the given origin.
pub fn rewrite(body: Bytes, origin: &Url) -> Bytes {
    let origin = origin.origin().ascii_serialization();

    let rewritten = ATTRIBUTE.replace_all(&body, |caps: &Captures<'_>| {
        let attr = &caps[1];
        let value = &caps[2];

        if value.is_empty() || contains_scheme(value) {
            return caps[0].to_vec();
        }

        let relative = value.strip_prefix(b"/").unwrap_or(value);
        let mut out = Vec::with_capacity(attr.len() + origin.len() + relative.len() + 4);
        out.extend_from_slice(attr);
        out.extend_from_slice(b"=\"");
        out.extend_from_slice(origin.as_bytes());
        out.push(b'/');
        out.extend_from_slice(relative);
        out.push(b'"');
        out
    });

    match rewritten {
        std::borrow::Cow::Borrowed(_) => body,
        std::borrow::Cow::Owned(bytes) => Bytes::from(bytes),
    }
}

fn contains_scheme(value: &[u8]) -> bool {
    value.windows(3).any(|window| window == b"://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://github.com").unwrap()
    }

    fn rewrite_str(body: &str) -> String {
        String::from_utf8(rewrite(Bytes::from(body.to_string()), &origin()).to_vec()).unwrap()
    }

    #[test]
    fn test_relative_src() {
        assert_eq!(
            rewrite_str(r#"<script src="app.js"></script>"#),
            r#"<script src="https://github.com/app.js"></script>"#
        );
    }

    #[test]
    fn test_root_relative_href() {
        assert_eq!(
            rewrite_str(r#"<link href="/styles/main.css">"#),
            r#"<link href="https://github.com/styles/main.css">"#
        );
    }

    #[test]
    fn test_absolute_value_untouched() {
        let body = r#"<script src="https://cdn.example.com/app.js"></script>"#;
        assert_eq!(rewrite_str(body), body);
    }

    #[test]
    fn test_mixed_body() {
        assert_eq!(
            rewrite_str(
                r#"<img src="logo.png"><a href="http://example.com/x">x</a><img src="icons/y.svg">"#
            ),
            r#"<img src="https://github.com/logo.png"><a href="http://example.com/x">x</a><img src="https://github.com/icons/y.svg">"#
        );
    }

    #[test]
    fn test_case_insensitive_attribute() {
        assert_eq!(
            rewrite_str(r#"<IMG SRC="logo.png">"#),
            r#"<IMG SRC="https://github.com/logo.png">"#
        );
    }

    #[test]
    fn test_empty_value_untouched() {
        let body = r#"<img src="">"#;
        assert_eq!(rewrite_str(body), body);
    }

    #[test]
    fn test_body_without_attributes_is_unchanged() {
        let body = Bytes::from_static(b"plain text body");
        assert_eq!(rewrite(body.clone(), &origin()), body);
    }
}
