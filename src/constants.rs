//! Application-wide constants.

use std::time::Duration;

// ============================================================================
// Event Loop
// ============================================================================

/// Main loop tick rate (drives animations and toast countdowns).
pub const TICK_RATE: Duration = Duration::from_millis(100);

// ============================================================================
// Background Fetching
// ============================================================================

/// How often the chain overview is re-fetched while live updates are on.
pub const CHAIN_FETCH_INTERVAL: Duration = Duration::from_secs(5);

/// How often pending transactions are re-fetched while live updates are on.
pub const PENDING_FETCH_INTERVAL: Duration = Duration::from_secs(5);

/// How often server reachability is probed.
pub const SERVER_CHECK_INTERVAL: Duration = Duration::from_secs(10);

/// Timeout for ordinary API requests.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the lightweight reachability probe.
pub const STATUS_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

// ============================================================================
// Balance Refresh
// ============================================================================

/// How long a freshly updated balance stays highlighted.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1000);

// ============================================================================
// Mining Progress Animation
// ============================================================================

/// Default period between simulated progress steps.
pub const PROGRESS_TICK_MS: u64 = 100;

/// Default percentage added per simulated progress step.
pub const PROGRESS_STEP: u8 = 2;

// ============================================================================
// UI
// ============================================================================

/// Toast lifetime in main-loop ticks (20 ticks at 100ms = 2 seconds).
pub const TOAST_TICKS: u8 = 20;

/// Maximum length used when truncating hashes and addresses for display.
pub const SHORT_HASH_LEN: usize = 18;
