// regversion.rs - Version and copyright strings.

/// Crate version, e.g. `"0.3.0"`.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// One-line copyright notice.
pub fn copyright() -> &'static str {
    concat!(
        "ferrex ",
        env!("CARGO_PKG_VERSION"),
        " : Copyright (C) Sebastian Software GmbH, regular expression semantics after Oniguruma by K.Kosako"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_manifest() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(version().split('.').count(), 3);
        assert!(copyright().contains(version()));
    }
}
