//! Orchestration of the Nephio package installations: the per-package
//! sequences and the top-level init/join operations built from them.

pub mod error;
pub mod options;
pub mod provider;
pub mod runner;
