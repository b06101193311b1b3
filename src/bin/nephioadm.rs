use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use nephioadm::cli::error::CliError;
use nephioadm::cli::logs;
use nephioadm::install::options::{FailureMode, InstallOptions, DEFAULT_BASE_PATH};
use nephioadm::install::provider::Provider;
use nephioadm::k8s::ServiceType;
use nephioadm::kpt::client::KptCli;
use tracing::error;

const DEFAULT_NEPHIO_REPO_URI: &str = "https://github.com/nephio-project/nephio-packages.git";
const DEFAULT_GIT_SERVICE_URI: &str = "https://github.com/nephio-test/";
const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:7007";

/// Bootstrap the Nephio control plane
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[command(subcommand)]
    operation: Operations,

    /// Directory the Nephio packages are fetched into
    #[arg(long, global = true, default_value = DEFAULT_BASE_PATH)]
    base_path: PathBuf,

    /// Git repository holding the Nephio packages
    #[arg(long = "nephio-repo", global = true, default_value = DEFAULT_NEPHIO_REPO_URI)]
    nephio_repo_uri: String,

    /// Git service ConfigSync fetches the workload configuration from
    #[arg(long = "git-service", global = true, default_value = DEFAULT_GIT_SERVICE_URI)]
    git_service_uri: String,

    /// Print the kpt diagnostic steps and debug logs
    #[arg(long, global = true)]
    debug: bool,

    /// Keep going when a kpt invocation fails instead of aborting
    #[arg(long, global = true)]
    best_effort: bool,
}

#[derive(Debug, Subcommand)]
enum Operations {
    /// Install the Nephio control plane on this cluster
    Init(InitData),

    /// Join this cluster to an existing Nephio control plane
    Join,
}

#[derive(Debug, Clone, Parser)]
struct InitData {
    /// URL the WebUI reaches its backend at; pass an empty value to keep the
    /// packaged one
    #[arg(long, default_value = DEFAULT_BACKEND_BASE_URL)]
    backend_base_url: String,

    /// Service type exposing the WebUI
    #[arg(long = "webui-cluster-type", value_enum, default_value_t = ServiceType::NodePort)]
    webui_cluster_type: ServiceType,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logs::init(cli.debug) {
        eprintln!("Failed to initialize tracing: {err}");
        return err.into();
    }

    let provider = Provider::new(KptCli::new());
    let failure_mode = if cli.best_effort {
        FailureMode::BestEffort
    } else {
        FailureMode::FailFast
    };

    let result = match cli.operation {
        Operations::Init(init_data) => {
            let options = InstallOptions {
                base_path: cli.base_path,
                nephio_repo_uri: cli.nephio_repo_uri,
                git_service_uri: cli.git_service_uri,
                backend_base_url: (!init_data.backend_base_url.is_empty())
                    .then_some(init_data.backend_base_url),
                webui_service_type: init_data.webui_cluster_type,
                debug: cli.debug,
                failure_mode,
            };
            provider.init(&options).map_err(|err| {
                CliError::Command(format!("failed to init nephio cluster plane: {err}"))
            })
        }
        Operations::Join => {
            let options = InstallOptions {
                base_path: cli.base_path,
                nephio_repo_uri: cli.nephio_repo_uri,
                git_service_uri: cli.git_service_uri,
                debug: cli.debug,
                failure_mode,
                ..Default::default()
            };
            provider.join(&options).map_err(|err| {
                CliError::Command(format!("failed to join to the nephio cluster plane: {err}"))
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Operation failed: {err}");
            err.into()
        }
    }
}
