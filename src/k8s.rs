//! Local mutation of the packaged Kubernetes manifests: typed YAML file
//! access plus the WebUI config-map and service patches.

pub use service_type::ServiceType;

pub mod error;
pub mod patcher;
pub mod resource;
pub mod service_type;
