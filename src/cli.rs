//! Shared pieces of the nephioadm command line: logging setup and the
//! error-to-exit-code mapping.

pub mod error;
pub mod logs;
