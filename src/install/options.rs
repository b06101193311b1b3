use std::path::PathBuf;

use crate::k8s::ServiceType;

/// Directory the packages are fetched into when none is given.
pub const DEFAULT_BASE_PATH: &str = "/opt/nephio";

/// Policy applied when a kpt invocation fails mid-installation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Stop at the first failed invocation.
    #[default]
    FailFast,
    /// Log failed invocations and carry on with the remaining steps.
    BestEffort,
}

/// Options shared by the top-level install operations.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Directory the packages are fetched into, one sub-directory each.
    pub base_path: PathBuf,
    /// Git repository holding the Nephio packages.
    pub nephio_repo_uri: String,
    /// Git service ConfigSync is pointed at for workload configuration.
    pub git_service_uri: String,
    /// WebUI backend URL override. `None` keeps the packaged value.
    pub backend_base_url: Option<String>,
    /// WebUI service type. `ClusterIP` keeps the packaged service as is.
    pub webui_service_type: ServiceType,
    /// Run the kpt diagnostic steps (tree, diff, status) as well.
    pub debug: bool,
    /// Policy applied when a kpt invocation fails.
    pub failure_mode: FailureMode,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            nephio_repo_uri: String::new(),
            git_service_uri: String::new(),
            backend_base_url: None,
            webui_service_type: ServiceType::ClusterIP,
            debug: false,
            failure_mode: FailureMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_the_packaged_manifests_untouched() {
        let options = InstallOptions::default();

        assert_eq!(PathBuf::from("/opt/nephio"), options.base_path);
        assert_eq!(None, options.backend_base_url);
        assert_eq!(ServiceType::ClusterIP, options.webui_service_type);
        assert_eq!(FailureMode::FailFast, options.failure_mode);
        assert!(!options.debug);
    }
}
