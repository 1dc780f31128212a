//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for a binary built on this
//! framework.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` and `Shutdown` with the final store size.
//! - **Requests**: `Create`, `Get`, `List` and `Action` at debug level with their payloads.
//! - **Outcomes**: `Created` / `Action ok` at info, `Action rejected` at warn with the error.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run                              # compact lifecycle logs
//! RUST_LOG=debug cargo run                             # include payloads
//! RUST_LOG=order_lifecycle=debug,actor_framework=info cargo run
//! ```
//!
//! The format is compact and hides the module target; each event carries an `entity_type`
//! field instead, so `Action rejected entity_type="Order" id=order_3` reads on one line.

/// Initializes the global subscriber with `RUST_LOG` filtering and the compact format.
///
/// Panics if a global subscriber was already installed; call it once, from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
