use thiserror::Error;

use crate::k8s::error::ResourceError;
use crate::kpt::error::KptError;

#[derive(Debug, Error)]
pub enum InstallError {
    /// A packaged manifest could not be patched. Always fatal.
    #[error("failed to patch the {package} package: {source}")]
    Patch {
        package: String,
        #[source]
        source: ResourceError,
    },

    /// A kpt invocation failed under the fail-fast policy.
    #[error("failed to install the {package} package: {source}")]
    Kpt {
        package: String,
        #[source]
        source: KptError,
    },
}
