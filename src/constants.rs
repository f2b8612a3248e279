// Fixed constants for the client, overridable from the environment where it
// makes sense (endpoint), hardcoded where it does not (styling, pacing).

use std::env;
use std::time::Duration;

lazy_static::lazy_static! {
    /// Where the Saturn backend listens. Override with SATURN_URL, or per
    /// invocation with --endpoint.
    pub static ref SATURN_URL: String = env::var("SATURN_URL")
        .unwrap_or_else(|_| "http://localhost:2223/query".to_string());
}

/// Accent color used for banner markers and streamed response words.
pub const ACCENT_HEX: &str = "17B890";

/// Delay between words during paced rendering.
pub const WORD_DELAY: Duration = Duration::from_millis(100);

/// Spinner tick interval while waiting on the backend.
pub const SPINNER_TICK: Duration = Duration::from_millis(80);
