use tracing::info;

use crate::kpt::client::KptClient;

use super::error::InstallError;
use super::options::InstallOptions;
use super::runner::Runner;

/// The two top-level operations offered by the tool.
pub struct Provider<C> {
    client: C,
}

impl<C: KptClient> Provider<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Sets up the whole Nephio control plane: the system packages first,
    /// then the WebUI, then ConfigSync.
    pub fn init(&self, options: &InstallOptions) -> Result<(), InstallError> {
        let runner = Runner::new(&self.client, options);
        runner.install_system()?;
        runner.install_webui()?;
        runner.install_config_sync()?;
        info!("Nephio control plane installed");
        Ok(())
    }

    /// Joins a workload cluster to an existing control plane by installing
    /// ConfigSync only.
    pub fn join(&self, options: &InstallOptions) -> Result<(), InstallError> {
        Runner::new(&self.client, options).install_config_sync()?;
        info!("Cluster joined to the Nephio control plane");
        Ok(())
    }
}
