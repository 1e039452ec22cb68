//! Escaping helpers for values that end up in request URLs.
//!
//! Every user-provided identifier, name or filter value must pass through
//! this module before it is spliced into a path or query string.
//!
//! ```rust
//! use jamfpro_client::security::{path, rsql};
//!
//! let by_name = format!("/JSSResource/sites/name/{}", path::encode_segment("HQ / North"));
//! assert_eq!(by_name, "/JSSResource/sites/name/HQ%20%2F%20North");
//!
//! let filter = rsql::eq("displayName", "auditors \"read only\"");
//! assert_eq!(filter, r#"displayName=="auditors \"read only\"""#);
//! ```

/// Path segment encoding and validation.
pub mod path {
    /// Percent-encode a value for use as a single path segment.
    ///
    /// Slashes are encoded, so the value can never introduce extra segments.
    #[must_use]
    pub fn encode_segment(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// Percent-encode a query parameter value.
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// Whether a fixed path segment (resource name, id type) is safe to use verbatim.
    ///
    /// Accepts ASCII alphanumerics, `-`, `_` and `.`, but never `.` or `..` alone.
    ///
    /// ```rust
    /// use jamfpro_client::security::path;
    ///
    /// assert!(path::is_safe_segment("computergroups"));
    /// assert!(path::is_safe_segment("api-roles"));
    /// assert!(!path::is_safe_segment("../secrets"));
    /// assert!(!path::is_safe_segment(""));
    /// ```
    #[must_use]
    pub fn is_safe_segment(segment: &str) -> bool {
        if segment.is_empty() || segment == "." || segment == ".." {
            return false;
        }
        segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    }

    /// Whether a relative resource path (`api/v1/api-roles`) is made only of safe segments.
    #[must_use]
    pub fn is_safe_path(path: &str) -> bool {
        let trimmed = path.trim_matches('/');
        !trimmed.is_empty() && trimmed.split('/').all(is_safe_segment)
    }
}

/// RSQL filter construction for Jamf Pro API list endpoints.
pub mod rsql {
    /// Escape a value for use inside a double-quoted RSQL argument.
    #[must_use]
    pub fn escape_value(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 8);
        for ch in value.chars() {
            match ch {
                '\\' => escaped.push_str("\\\\"),
                '"' => escaped.push_str("\\\""),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Equality comparison `field=="value"`.
    ///
    /// Returns the unencoded expression; encode it with
    /// [`super::path::encode_param`] when building the query string.
    #[must_use]
    pub fn eq(field: &str, value: &str) -> String {
        format!("{}==\"{}\"", field, escape_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod path_tests {
        use super::path::*;

        #[test]
        fn test_encode_segment() {
            assert_eq!(encode_segment("simple"), "simple");
            assert_eq!(encode_segment("Lab Mac"), "Lab%20Mac");
            assert_eq!(encode_segment("a/b"), "a%2Fb");
            assert_eq!(encode_segment("../../etc"), "..%2F..%2Fetc");
            assert_eq!(encode_segment("Café"), "Caf%C3%A9");
        }

        #[test]
        fn test_is_safe_segment() {
            assert!(is_safe_segment("computers"));
            assert!(is_safe_segment("mobiledeviceapplicationsipa"));
            assert!(is_safe_segment("v1"));
            assert!(is_safe_segment("api_integrations"));

            assert!(!is_safe_segment(""));
            assert!(!is_safe_segment("."));
            assert!(!is_safe_segment(".."));
            assert!(!is_safe_segment("a/b"));
            assert!(!is_safe_segment("name?x=1"));
            assert!(!is_safe_segment("with space"));
        }

        #[test]
        fn test_is_safe_path() {
            assert!(is_safe_path("api/v1/api-roles"));
            assert!(is_safe_path("/JSSResource/computergroups"));
            assert!(!is_safe_path("JSSResource/../api"));
            assert!(!is_safe_path("/"));
        }
    }

    mod rsql_tests {
        use super::rsql::*;

        #[test]
        fn test_escape_value() {
            assert_eq!(escape_value("plain"), "plain");
            assert_eq!(escape_value(r#"say "hi""#), r#"say \"hi\""#);
            assert_eq!(escape_value(r"back\slash"), r"back\\slash");
        }

        #[test]
        fn test_eq_cannot_break_out_of_quotes() {
            let filter = eq("name", r#"x" or name=="*"#);
            assert_eq!(filter, r#"name=="x\" or name==\"*""#);
        }
    }
}
