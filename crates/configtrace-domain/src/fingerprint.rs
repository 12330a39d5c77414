use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a problem.
///
/// Identity fields:
/// - rendered trace
/// - rendered message
/// - documentation anchor (if present)
pub fn fingerprint_for_problem(trace: &str, message: &str, anchor: Option<&str>) -> String {
    let mut parts = vec![trace, message];
    if let Some(a) = anchor {
        parts.push(a);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_hex_sha256() {
        let fp = fingerprint_for_problem("unknown location", "x", None);
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn anchor_changes_fingerprint() {
        let without = fingerprint_for_problem("t", "m", None);
        let with = fingerprint_for_problem("t", "m", Some("config_cache:not_yet_implemented"));
        assert_ne!(without, with);
        assert_eq!(without, fingerprint_for_problem("t", "m", None));
    }
}
