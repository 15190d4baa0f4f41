use ulid::Ulid;

/// Unique string in the format `{prefix}-{ulid}`.
///
/// ```
/// use quizbattle_test_support::unique_str;
///
/// let a = unique_str("player");
/// let b = unique_str("player");
/// assert_ne!(a, b);
/// assert!(a.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}
