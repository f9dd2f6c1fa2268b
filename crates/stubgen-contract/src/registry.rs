/// Contract registry
///
/// Resolves a dotted contract name to a descriptor file under a registry
/// root: `sample.pkg.Greeter` maps to `<root>/sample/pkg/Greeter.json`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::descriptor::ContractDescriptor;

/// Errors raised while resolving a contract name
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("contract '{0}' not found")]
    NotFound(String),

    #[error("contract '{name}' is malformed: {message}")]
    Malformed { name: String, message: String },
}

/// Filesystem-backed registry of contract descriptors
#[derive(Debug, Clone)]
pub struct ContractRegistry {
    root: PathBuf,
}

impl ContractRegistry {
    /// Create a registry rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Registry root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the descriptor file for a dotted contract name
    pub fn descriptor_path(&self, name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in name.split('.') {
            path.push(segment);
        }
        path.set_extension("json");
        path
    }

    /// Resolve a contract name to its descriptor
    ///
    /// Descriptors that omit `classpath` get the registry root as the
    /// contract's origin location.
    pub fn resolve(&self, name: &str) -> Result<ContractDescriptor, ResolveError> {
        let path = self.descriptor_path(name);
        if !path.exists() {
            return Err(ResolveError::NotFound(name.to_string()));
        }

        let text = fs::read_to_string(&path).map_err(|e| ResolveError::Malformed {
            name: name.to_string(),
            message: e.to_string(),
        })?;

        let mut descriptor: ContractDescriptor =
            serde_json::from_str(&text).map_err(|e| ResolveError::Malformed {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        if descriptor.classpath.is_none() {
            descriptor.classpath = Some(self.root.clone());
        }

        Ok(descriptor)
    }
}
