//! Opt-in tracing subscriber.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `structmatch=trace`.
pub const LOG_ENV: &str = "STRUCTMATCH_LOG";

static INIT: Once = Once::new();

/// Install a global `tracing` subscriber when `STRUCTMATCH_LOG` or
/// `RUST_LOG` is set.
///
/// Does nothing when neither is set, when called again, or when another
/// subscriber is already installed.
pub fn init_tracing() {
    INIT.call_once(|| {
        use tracing_subscriber::fmt;
        use tracing_subscriber::prelude::*;

        let Some(filter) = filter_from_env() else {
            return;
        };

        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
        if installed.is_ok() {
            tracing::debug!("tracing initialized");
        }
    });
}

/// `STRUCTMATCH_LOG` if it holds a valid filter, else `RUST_LOG` if set.
fn filter_from_env() -> Option<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Some(filter),
        Err(_) if std::env::var_os("RUST_LOG").is_some() => Some(EnvFilter::from_default_env()),
        Err(_) => None,
    }
}
