use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::k8s::patcher::{patch_backend_base_url, patch_service_type};
use crate::k8s::ServiceType;
use crate::kpt::client::KptClient;
use crate::kpt::error::KptError;
use crate::kpt::package::PackageReference;

use super::error::InstallError;
use super::options::{FailureMode, InstallOptions, DEFAULT_BASE_PATH};

/// kpt function image rewriting resource fields by regular expression.
const SEARCH_REPLACE_FN: &str = "gcr.io/kpt-fn/search-replace:v0.2";

const SYSTEM_PACKAGE: &str = "nephio-system";
const WEBUI_PACKAGE: &str = "nephio-webui";
const CONFIG_SYNC_PACKAGE: &str = "nephio-configsync";

const SYSTEM_DIR: &str = "system";
const WEBUI_DIR: &str = "webui";
const CONFIG_SYNC_DIR: &str = "configsync";

const WEBUI_CONFIG_MAP: &str = "config-map.yaml";
const WEBUI_SERVICE: &str = "service.yaml";

/// Runs the per-package install sequences against a [`KptClient`].
///
/// Each package goes through fetch, local overrides, render and live apply.
/// kpt failures follow the configured [`FailureMode`]; manifest patch
/// failures are fatal regardless of it.
pub struct Runner<'a, C> {
    client: &'a C,
    options: InstallOptions,
}

impl<'a, C: KptClient> Runner<'a, C> {
    pub fn new(client: &'a C, options: &InstallOptions) -> Self {
        let mut options = options.clone();
        if options.base_path.as_os_str().is_empty() {
            options.base_path = PathBuf::from(DEFAULT_BASE_PATH);
        }
        Self { client, options }
    }

    /// Installs the Nephio operators and controllers.
    pub fn install_system(&self) -> Result<(), InstallError> {
        let pkg_dir = self.options.base_path.join(SYSTEM_DIR);
        self.fetch_package(SYSTEM_PACKAGE, &pkg_dir)?;
        self.apply_package(SYSTEM_PACKAGE, &pkg_dir)
    }

    /// Installs the WebUI, with the backend and service overrides applied
    /// before anything reaches the cluster.
    pub fn install_webui(&self) -> Result<(), InstallError> {
        let pkg_dir = self.options.base_path.join(WEBUI_DIR);
        self.fetch_package(WEBUI_PACKAGE, &pkg_dir)?;

        let backend_base_url = self
            .options
            .backend_base_url
            .as_deref()
            .filter(|url| !url.is_empty());
        if let Some(backend_base_url) = backend_base_url {
            info!("Setting the WebUI backend base URL to {backend_base_url}");
            patch_backend_base_url(&pkg_dir.join(WEBUI_CONFIG_MAP), backend_base_url).map_err(
                |source| InstallError::Patch {
                    package: WEBUI_PACKAGE.to_string(),
                    source,
                },
            )?;
        }

        if self.options.webui_service_type != ServiceType::ClusterIP {
            info!(
                "Exposing the WebUI as a {} service",
                self.options.webui_service_type
            );
            patch_service_type(&pkg_dir.join(WEBUI_SERVICE), self.options.webui_service_type)
                .map_err(|source| InstallError::Patch {
                    package: WEBUI_PACKAGE.to_string(),
                    source,
                })?;
        }

        self.apply_package(WEBUI_PACKAGE, &pkg_dir)
    }

    /// Installs ConfigSync, pointed at the configured git service instead of
    /// the upstream repository.
    pub fn install_config_sync(&self) -> Result<(), InstallError> {
        let pkg_dir = self.options.base_path.join(CONFIG_SYNC_DIR);
        self.fetch_package(CONFIG_SYNC_PACKAGE, &pkg_dir)?;

        info!(
            "Pointing ConfigSync at the git service {}",
            self.options.git_service_uri
        );
        let put_value = format!("{}/${{2}}", self.options.git_service_uri);
        self.checked(
            CONFIG_SYNC_PACKAGE,
            self.client.fn_eval(
                &pkg_dir,
                SEARCH_REPLACE_FN,
                "spec.git.repo",
                "https://github.com/(.*)/(.*)",
                &put_value,
            ),
        )?;

        self.apply_package(CONFIG_SYNC_PACKAGE, &pkg_dir)
    }

    /// Fetches the package and, in debug mode, prints its resource tree.
    fn fetch_package(&self, package: &str, pkg_dir: &Path) -> Result<(), InstallError> {
        let reference = PackageReference::new(self.options.nephio_repo_uri.as_str(), package);
        info!("Fetching package {reference} into {}", pkg_dir.display());
        self.checked(package, self.client.pkg_get(&reference, pkg_dir))?;

        if self.options.debug {
            self.checked(package, self.client.pkg_tree(pkg_dir))?;
        }
        Ok(())
    }

    /// Renders the package pipeline and applies the result to the cluster.
    fn apply_package(&self, package: &str, pkg_dir: &Path) -> Result<(), InstallError> {
        info!("Applying package {package} to the cluster");
        self.checked(package, self.client.fn_render(pkg_dir))?;
        if self.options.debug {
            self.checked(package, self.client.pkg_diff(pkg_dir))?;
        }
        self.checked(package, self.client.live_init(pkg_dir))?;
        self.checked(package, self.client.live_apply(pkg_dir))?;
        if self.options.debug {
            self.checked(package, self.client.live_status(pkg_dir))?;
        }
        Ok(())
    }

    /// Applies the failure policy to a kpt invocation result.
    fn checked(&self, package: &str, result: Result<(), KptError>) -> Result<(), InstallError> {
        match (result, self.options.failure_mode) {
            (Ok(()), _) => Ok(()),
            (Err(source), FailureMode::FailFast) => Err(InstallError::Kpt {
                package: package.to_string(),
                source,
            }),
            (Err(error), FailureMode::BestEffort) => {
                warn!(package, "kpt step failed, continuing: {error}");
                Ok(())
            }
        }
    }
}
