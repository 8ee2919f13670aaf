//! Skip policy for suites that need the embedded PostgreSQL cluster.

/// Report a cluster that could not be started and skip the calling test.
///
/// Prints a `SKIP-TEST-CLUSTER` marker so skipped runs stay visible in CI
/// logs. Set `REQUIRE_TEST_CLUSTER=1` to turn the skip into a failure.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if cluster_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}

/// Truthy values: "1", "true", "yes" (case-insensitive).
fn cluster_required() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
