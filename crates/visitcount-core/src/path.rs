//! Path normalization.
//!
//! The path doubles as the storage key, so normalization is deliberately
//! minimal: default to the root, reject empty, map the root to the index page,
//! and pass everything else through untouched.

use crate::error::{Result, VisitCountError};

/// Path assumed when the request does not name one.
pub const DEFAULT_PATH: &str = "/";

/// Key under which visits to the site root are counted.
pub const INDEX_PATH: &str = "/index.html";

/// Normalize the requested path into the key used for counting.
///
/// `None` means the field was absent and resolves like an explicit `"/"`.
pub fn normalize(requested: Option<&str>) -> Result<String> {
    let path = requested.unwrap_or(DEFAULT_PATH);
    if path.is_empty() {
        return Err(VisitCountError::missing_path());
    }
    if path == DEFAULT_PATH {
        return Ok(INDEX_PATH.to_string());
    }
    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use super::*;
    use crate::error::MISSING_PATH_MESSAGE;

    #[test]
    fn root_and_absent_resolve_to_index() {
        assert_eq!(normalize(Some("/")).ok().as_deref(), Some(INDEX_PATH));
        assert_eq!(normalize(None).ok().as_deref(), Some(INDEX_PATH));
    }

    #[test]
    fn empty_is_rejected() {
        match normalize(Some("")) {
            Err(VisitCountError::InvalidInput(msg)) => assert_eq!(msg, MISSING_PATH_MESSAGE),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn other_paths_pass_through() {
        for p in [
            "/about",
            "/blog/2024/01/my-post",
            "index.html",
            "//",
            " ",
            "/with space/ünïcode?q=1#frag",
            "\u{1}ctl",
        ] {
            assert_eq!(normalize(Some(p)).ok().as_deref(), Some(p));
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        for p in [None, Some("/"), Some("/about"), Some("/index.html"), Some("x")] {
            let once = normalize(p).unwrap();
            let twice = normalize(Some(&once)).unwrap();
            assert_eq!(once, twice);
        }
    }
}
