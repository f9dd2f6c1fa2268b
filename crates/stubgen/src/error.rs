/// Error types for the stubgen pipeline

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImplError>;

#[derive(Error, Debug)]
pub enum ImplError {
    #[error("{0} is not an interface")]
    NotAnInterface(String),

    #[error("cannot implement private interface {0}")]
    PrivateInterface(String),

    #[error("failed to write {}: {}", .file.display(), .message)]
    Write { file: PathBuf, message: String },

    #[error("compilation of {} failed: {}", .file.display(), .message)]
    Compile { file: PathBuf, message: String },

    #[error("failed to create archive {}: {}", .file.display(), .message)]
    ArchiveCreation { file: PathBuf, message: String },

    #[error("failed to copy compiled artifact {}: {}", .file.display(), .message)]
    ArtifactCopy { file: PathBuf, message: String },

    #[error("invalid destination: {}", .0.display())]
    InvalidDestination(PathBuf),

    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl ImplError {
    pub fn write(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ImplError::Write {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn compile(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ImplError::Compile {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn archive_creation(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ImplError::ArchiveCreation {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn artifact_copy(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ImplError::ArtifactCopy {
            file: file.into(),
            message: message.into(),
        }
    }
}
