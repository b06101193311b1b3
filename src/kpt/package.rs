use std::fmt::{Display, Formatter};

/// Identifies a kpt package: a git repository plus the sub-directory holding
/// the package, optionally pinned to a version ref.
///
/// Its [`Display`] form is the locator handed to `kpt pkg get`:
/// `<repo-uri>/<path>` or `<repo-uri>/<path>@<version>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    repo_uri: String,
    path: String,
    version: Option<String>,
}

impl PackageReference {
    pub fn new(repo_uri: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            repo_uri: repo_uri.into(),
            path: path.into(),
            version: None,
        }
    }

    /// Pins the reference to a version ref (a tag, branch or commit).
    pub fn with_version(self, version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..self
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Display for PackageReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.repo_uri, self.path)?;
        if let Some(version) = &self.version {
            write!(f, "@{version}")?;
        }
        Ok(())
    }
}
