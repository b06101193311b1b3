use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use super::error::KptError;
use super::package::PackageReference;

const DEFAULT_KPT_BINARY: &str = "kpt";
/// Upper bound kpt waits for applied resources to reconcile.
const RECONCILE_TIMEOUT: &str = "15m";

/// The kpt operations the installer depends on.
///
/// Every operation takes the package directory it acts on explicitly, so no
/// working-path state is carried between calls.
#[cfg_attr(test, mockall::automock)]
pub trait KptClient {
    /// Fetches a package into `output_dir`, pruned for deployment.
    ///
    /// Fetching is idempotent: an already populated `output_dir` is left
    /// untouched.
    fn pkg_get(&self, reference: &PackageReference, output_dir: &Path) -> Result<(), KptError>;

    /// Prints the resource tree of a fetched package.
    fn pkg_tree(&self, pkg_dir: &Path) -> Result<(), KptError>;

    /// Prints the diff between the local package and its upstream.
    fn pkg_diff(&self, pkg_dir: &Path) -> Result<(), KptError>;

    /// Runs the package's function pipeline in place.
    fn fn_render(&self, pkg_dir: &Path) -> Result<(), KptError>;

    /// Runs a single mutator function over the package, saving the results.
    fn fn_eval(
        &self,
        pkg_dir: &Path,
        image: &str,
        by_path: &str,
        by_value_regex: &str,
        put_value: &str,
    ) -> Result<(), KptError>;

    /// Initializes the package's inventory template for live apply.
    fn live_init(&self, pkg_dir: &Path) -> Result<(), KptError>;

    /// Applies the package to the cluster and waits for reconciliation.
    fn live_apply(&self, pkg_dir: &Path) -> Result<(), KptError>;

    /// Prints the reconciliation status of the applied package.
    fn live_status(&self, pkg_dir: &Path) -> Result<(), KptError>;
}

/// [`KptClient`] implementation shelling out to the kpt binary.
#[derive(Debug)]
pub struct KptCli {
    binary: PathBuf,
}

impl Default for KptCli {
    fn default() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_KPT_BINARY),
        }
    }
}

impl KptCli {
    /// Uses the `kpt` binary found on the PATH.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the binary at `binary` instead of the PATH lookup.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<(), KptError> {
        debug!("running `kpt {}`", args.join(" "));
        let output = Command::new(&self.binary).args(args).output()?;

        if !output.status.success() {
            return Err(KptError::Command {
                command: args.join(" "),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = stdout.trim_end();
        if !stdout.is_empty() {
            info!("{stdout}");
        }
        Ok(())
    }
}

impl KptClient for KptCli {
    fn pkg_get(&self, reference: &PackageReference, output_dir: &Path) -> Result<(), KptError> {
        if output_dir.exists() {
            info!(
                "package directory {} already exists, skipping fetch",
                output_dir.display()
            );
            return Ok(());
        }
        self.run(&[
            "pkg",
            "get",
            &reference.to_string(),
            &output_dir.display().to_string(),
            "--for-deployment",
        ])
    }

    fn pkg_tree(&self, pkg_dir: &Path) -> Result<(), KptError> {
        self.run(&["pkg", "tree", &pkg_dir.display().to_string()])
    }

    fn pkg_diff(&self, pkg_dir: &Path) -> Result<(), KptError> {
        self.run(&["pkg", "diff", &pkg_dir.display().to_string()])
    }

    fn fn_render(&self, pkg_dir: &Path) -> Result<(), KptError> {
        self.run(&["fn", "render", &pkg_dir.display().to_string()])
    }

    fn fn_eval(
        &self,
        pkg_dir: &Path,
        image: &str,
        by_path: &str,
        by_value_regex: &str,
        put_value: &str,
    ) -> Result<(), KptError> {
        self.run(&[
            "fn",
            "eval",
            &pkg_dir.display().to_string(),
            "--save",
            "--type",
            "mutator",
            "--image",
            image,
            "--",
            &format!("by-path={by_path}"),
            &format!("by-value-regex={by_value_regex}"),
            &format!("put-value={put_value}"),
        ])
    }

    fn live_init(&self, pkg_dir: &Path) -> Result<(), KptError> {
        self.run(&["live", "init", &pkg_dir.display().to_string(), "--force"])
    }

    fn live_apply(&self, pkg_dir: &Path) -> Result<(), KptError> {
        self.run(&[
            "live",
            "apply",
            &pkg_dir.display().to_string(),
            "--reconcile-timeout",
            RECONCILE_TIMEOUT,
        ])
    }

    fn live_status(&self, pkg_dir: &Path) -> Result<(), KptError> {
        self.run(&["live", "status", &pkg_dir.display().to_string()])
    }
}
