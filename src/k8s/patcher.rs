use std::path::Path;

use k8s_openapi::api::core::v1::{ConfigMap, Service, ServicePort};
use serde_yaml::Value;
use tracing::debug;

use super::error::ResourceError;
use super::resource::{read_resource, write_resource};
use super::service_type::ServiceType;

/// Config-map data entry holding the embedded WebUI application config.
pub const APP_CONFIG_KEY: &str = "app-config.nephio.yaml";

/// Node port provisioned for the WebUI when its service becomes NodePort.
pub const DEFAULT_WEBUI_NODE_PORT: i32 = 30007;

/// Rewrites `backend.baseUrl` inside an embedded application-config document.
///
/// Returns `Ok(None)` when the document has no `backend` mapping to patch;
/// callers are expected to leave the enclosing resource untouched in that
/// case. Everything else in the document is preserved.
pub fn rewrite_backend_base_url(
    app_config: &str,
    base_url: &str,
) -> Result<Option<String>, serde_yaml::Error> {
    let mut document: Value = serde_yaml::from_str(app_config)?;
    let Some(backend) = document.get_mut("backend").and_then(Value::as_mapping_mut) else {
        return Ok(None);
    };
    backend.insert(Value::from("baseUrl"), Value::from(base_url));
    serde_yaml::to_string(&document).map(Some)
}

/// Points the WebUI at `base_url` by patching the application config embedded
/// in the config map at `path`.
///
/// The config map must carry an [`APP_CONFIG_KEY`] data entry. A document
/// without a `backend` mapping is left as is.
pub fn patch_backend_base_url(path: &Path, base_url: &str) -> Result<(), ResourceError> {
    let mut config_map: ConfigMap = read_resource(path)?;

    let missing_key = || ResourceError::MissingKey {
        path: path.to_path_buf(),
        key: APP_CONFIG_KEY.to_string(),
    };
    let data = config_map.data.as_mut().ok_or_else(missing_key)?;
    let app_config = data.get(APP_CONFIG_KEY).ok_or_else(missing_key)?;

    let rewritten = rewrite_backend_base_url(app_config, base_url).map_err(|source| {
        ResourceError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;

    match rewritten {
        Some(app_config) => {
            data.insert(APP_CONFIG_KEY.to_string(), app_config);
            write_resource(path, &config_map)
        }
        None => {
            debug!(
                "application config in {} has no backend section, leaving it untouched",
                path.display()
            );
            Ok(())
        }
    }
}

/// Switches the service at `path` to `service_type`, provisioning the
/// default node port when the type becomes NodePort.
pub fn patch_service_type(path: &Path, service_type: ServiceType) -> Result<(), ResourceError> {
    let mut service: Service = read_resource(path)?;

    let spec = service.spec.get_or_insert_with(Default::default);
    spec.type_ = Some(service_type.to_string());

    if service_type == ServiceType::NodePort {
        let ports = spec.ports.get_or_insert_with(Vec::new);
        // Multi-port services get the node port on their first entry;
        // single-port ones get a dedicated entry appended.
        // TODO: appending leaves single-port services with a second,
        // port-zero entry; check whether the WebUI should instead expose the
        // node port on its existing http port.
        if ports.len() > 1 {
            ports[0].node_port = Some(DEFAULT_WEBUI_NODE_PORT);
        } else {
            ports.push(ServicePort {
                node_port: Some(DEFAULT_WEBUI_NODE_PORT),
                ..Default::default()
            });
        }
    }

    write_resource(path, &service)
}
