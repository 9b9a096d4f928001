// ============================================================================
// Logging Setup
// Console subscriber for the crate's tracing events
// ============================================================================

use tracing::Level;

/// Install a global fmt subscriber printing events up to `level`.
///
/// Validators emit `debug` events on construction and `trace` events for
/// every rejected input. Library users with their own subscriber should not
/// call this.
///
/// # Errors
/// Fails if a global subscriber has already been installed.
pub fn init_logging(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
}
