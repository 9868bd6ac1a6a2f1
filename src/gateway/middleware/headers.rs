/**
 * Security Response Headers
 *
 * Static hardening headers the gateway attaches to responses. Every
 * response gets the baseline set; responses for paths under the protected
 * prefix (grants and denials alike) additionally get the strict set.
 *
 * All values are fixed string constants; nothing here is computed per
 * request. The per-request audit headers (access time, correlation id) live
 * in the guard itself.
 */

use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Headers attached to every response
const BASELINE: &[(&str, &str)] = &[
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("x-xss-protection", "1; mode=block"),
];

/// Additional headers for protected-path responses
const PROTECTED: &[(&str, &str)] = &[
    (
        "content-security-policy",
        "default-src 'self'; frame-ancestors 'none'; object-src 'none'",
    ),
    ("strict-transport-security", "max-age=63072000; includeSubDomains"),
    ("x-download-options", "noopen"),
    ("x-permitted-cross-domain-policies", "none"),
];

/// Attach the baseline hardening headers
pub fn apply_baseline(headers: &mut HeaderMap) {
    apply(headers, BASELINE);
}

/// Attach the strict protected-path headers
pub fn apply_protected(headers: &mut HeaderMap) {
    apply(headers, PROTECTED);
}

fn apply(headers: &mut HeaderMap, set: &'static [(&'static str, &'static str)]) {
    for (name, value) in set {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_set() {
        let mut headers = HeaderMap::new();
        apply_baseline(&mut headers);
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(
            headers.get("referrer-policy").unwrap(),
            "strict-origin-when-cross-origin"
        );
        assert_eq!(headers.get("x-xss-protection").unwrap(), "1; mode=block");
        assert!(headers.get("content-security-policy").is_none());
    }

    #[test]
    fn test_protected_set_is_additive() {
        let mut headers = HeaderMap::new();
        apply_baseline(&mut headers);
        apply_protected(&mut headers);
        assert!(headers.get("x-frame-options").is_some());
        assert!(headers.get("content-security-policy").is_some());
        assert_eq!(headers.get("x-download-options").unwrap(), "noopen");
        assert_eq!(headers.get("x-permitted-cross-domain-policies").unwrap(), "none");
        assert!(headers
            .get("strict-transport-security")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("max-age"));
    }
}
