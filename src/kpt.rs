//! Thin client for the kpt package manager, used to fetch, render and apply
//! the Nephio packages.

pub mod client;
pub mod error;
pub mod package;
