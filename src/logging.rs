//! Logging initialization.
//!
//! The library only emits `tracing` events. Binaries and demos call [`init`] once to
//! install a subscriber; `RUST_LOG` overrides the profile's default filter.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output at debug level
    Development,
    /// JSON structured output at info level
    Production,
}

impl Profile {
    fn default_filter(self) -> &'static str {
        match self {
            Profile::Development => "shape_history=debug",
            Profile::Production => "shape_history=info",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Installs the global subscriber for `profile`.
///
/// Returns `true` only for the call that actually installed it. Later calls, and a
/// first call made while another global subscriber is already set, return `false`.
pub fn init(profile: Profile) -> bool {
    let mut installed = false;

    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));

        installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .try_init()
                .is_ok(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .try_init()
                .is_ok(),
        };
    });

    installed
}
