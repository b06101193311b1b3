use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ResourceError;

/// Decodes the YAML document at `path` into a typed Kubernetes resource.
pub fn read_resource<T: DeserializeOwned>(path: &Path) -> Result<T, ResourceError> {
    let raw = fs::read_to_string(path).map_err(|source| ResourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| ResourceError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Encodes the resource as YAML, replacing the document at `path`.
pub fn write_resource<T: Serialize>(path: &Path, resource: &T) -> Result<(), ResourceError> {
    let raw = serde_yaml::to_string(resource).map_err(|source| ResourceError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, raw).map_err(|source| ResourceError::Write {
        path: path.to_path_buf(),
        source,
    })
}
