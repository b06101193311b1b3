//! Building blocks of `nephioadm`, the Nephio bootstrap tool.
//!
//! The [`install`] module drives the whole process: it fetches the Nephio
//! packages with the [`kpt`] client, applies the local manifest overrides
//! from [`k8s`] and hands the results back to kpt to land on the cluster.

pub mod cli;
pub mod install;
pub mod k8s;
pub mod kpt;
