//! Configuration constants.
//!
//! This module defines all tuned constants used throughout the application,
//! including the search caps, tooltip geometry, and the dataset retry
//! schedule. These are defaults, not invariants: the search knobs are also
//! exposed through [`crate::search::SearchTuning`].

use std::time::Duration;

/// Edge length of the pixel canvas in native pixels.
///
/// The dashboard image is rendered at a fixed 1000x1000 native resolution and
/// every area rectangle is expressed 1:1 against this pixel grid. Rectangles
/// extending past this bound fail validation and are excluded from rendering.
pub const CANVAS_SIZE: f64 = 1000.0;

/// Maximum number of results a single query may produce.
///
/// Applied to the candidate set before filtering, preserving candidate order.
/// Tuned for interactive use against the ~2,800-area dataset; override via
/// `SearchTuning` if a deployment needs more.
pub const RESULT_CAP: usize = 1000;

/// Minimum query length (in characters) before fuzzy matching is invoked.
///
/// Queries shorter than this fall back to prefix matching on domain/title;
/// an empty query returns the registry in insertion order (capped).
pub const MIN_MATCH_LEN: usize = 2;

/// Relevance weight of the domain field in fuzzy scoring.
pub const DOMAIN_WEIGHT: f32 = 0.7;

/// Relevance weight of the title field in fuzzy scoring.
pub const TITLE_WEIGHT: f32 = 0.3;

// Dataset fetch
/// Timeout for the dataset fetch.
///
/// The dataset is a single JSON document of a few megabytes; anything slower
/// than this indicates a connectivity problem worth surfacing.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

// Retry strategy
/// Base of the exponential backoff sequence (seconds, doubling).
///
/// Combined with [`RETRY_FACTOR`] this yields delays of 2s, 4s, 8s.
pub const RETRY_BASE: u64 = 2;
/// Multiplier converting the backoff base sequence into milliseconds.
pub const RETRY_FACTOR: u64 = 1000;
/// Maximum number of retry attempts after the initial fetch.
///
/// Only network and timeout failures are retried; malformed responses are
/// terminal immediately.
pub const RETRY_MAX_ATTEMPTS: usize = 3;

// Tooltip geometry
/// Horizontal offset of the tooltip from the pointer, in pixels.
pub const TOOLTIP_OFFSET_X: f64 = 15.0;
/// Vertical offset of the tooltip from the pointer, in pixels.
pub const TOOLTIP_OFFSET_Y: f64 = -10.0;
/// Fixed tooltip width in pixels.
pub const TOOLTIP_WIDTH: f64 = 320.0;
/// Fixed tooltip height in pixels.
pub const TOOLTIP_HEIGHT: f64 = 180.0;
/// Minimum distance kept between the tooltip and any viewport edge.
pub const TOOLTIP_PADDING: f64 = 20.0;
/// Gap between the pointer and a tooltip flipped to the left of it.
pub const TOOLTIP_FLIP_GAP: f64 = 5.0;
/// Gap between the pointer and a tooltip placed above it.
pub const TOOLTIP_ABOVE_GAP: f64 = 10.0;

// Render transitions
/// Default enter/exit transition duration for highlighted regions, in ms.
pub const TRANSITION_DURATION_MS: u32 = 200;

/// Placeholder shown wherever an optional analytics date is absent.
pub const UNAVAILABLE: &str = "unavailable";
