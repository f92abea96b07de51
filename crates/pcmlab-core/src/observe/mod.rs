//! # Observability
//!
//! Structured logging for hosts embedding the pipeline. The pipeline itself
//! only emits `tracing` events (stage summaries at debug level, a Nyquist
//! warning); whether and how they are rendered is decided here, once, at
//! application startup.
//!
//! ```rust,ignore
//! use pcmlab_core::observe::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development());
//! tracing::info!("host started");
//! ```

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
