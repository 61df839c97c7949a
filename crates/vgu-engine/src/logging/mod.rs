//! Logging utilities.
//!
//! The engine only emits through the `log` facade. This module offers a
//! one-call `env_logger` setup for binaries and tests that want output.

mod init;

pub use init::{LoggingConfig, init_logging};
