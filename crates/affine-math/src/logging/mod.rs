//! Logging setup.
//!
//! The library itself only emits through the `log` facade. Binaries call
//! `init_logging` once to attach an `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};
