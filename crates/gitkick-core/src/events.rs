//! App-level lifecycle events shared by CLI handlers.

use tracing::{error, info, warn};

use crate::errors::GitkickError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log a failed command at warn (user errors) or error level with its code.
pub fn log_app_error<E: GitkickError>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    }
}
