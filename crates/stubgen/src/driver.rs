/// Driver that orchestrates stub generation, compilation, and packaging
///
/// Two entry points mirror the CLI modes: `implement` writes the generated
/// source under a destination root, `implement_jar` additionally compiles it
/// with the external compiler and packages the class file into a jar. The
/// jar pipeline owns an ephemeral working root that is torn down on every
/// exit path.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use stubgen_contract::ContractDescriptor;

use crate::codegen::{FormatConfig, SourceGenerator};
use crate::error::{ImplError, Result};
use crate::jar;
use crate::workdir::WorkRoot;

/// Separator between classpath entries
const CLASSPATH_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// Options for the implementor
#[derive(Debug, Clone)]
pub struct ImplementOptions {
    /// Formatting tokens for the generated source
    pub format: FormatConfig,
    /// External compiler program
    pub compiler: String,
}

impl ImplementOptions {
    pub fn new() -> Self {
        Self {
            format: FormatConfig::default(),
            compiler: "javac".to_string(),
        }
    }

    pub fn format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    pub fn compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }
}

impl Default for ImplementOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// The stub implementor
pub struct Implementor {
    options: ImplementOptions,
}

impl Implementor {
    /// Create an implementor with the given options
    pub fn new(options: ImplementOptions) -> Self {
        Self { options }
    }

    /// Generate-only mode: write the stub source under `root`
    ///
    /// Returns the path of the written source file. Contract validation runs
    /// before any filesystem mutation, so an invalid contract creates
    /// nothing under the destination.
    pub fn implement(&self, descriptor: &ContractDescriptor, root: &Path) -> Result<PathBuf> {
        let mut generator = SourceGenerator::with_config(self.options.format.clone());
        let source = generator.generate(descriptor)?;

        let path = self.source_path(descriptor, root);
        self.write_source(&path, &source)?;
        tracing::debug!(file = %path.display(), "wrote stub source");
        Ok(path)
    }

    /// Full pipeline: generate, compile, and package into `jar_file`
    ///
    /// The working root is removed before this returns, whichever step
    /// failed. Cleanup failures are logged and never mask the primary error.
    pub fn implement_jar(&self, descriptor: &ContractDescriptor, jar_file: &Path) -> Result<()> {
        if let Some(parent) = jar_file.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            return Err(ImplError::InvalidDestination(jar_file.to_path_buf()));
        }

        // Validate and render before touching the filesystem
        let mut generator = SourceGenerator::with_config(self.options.format.clone());
        let source = generator.generate(descriptor)?;

        let work = WorkRoot::create(descriptor.simple_name())
            .map_err(|e| ImplError::write(std::env::temp_dir(), e.to_string()))?;

        let result = self.build_jar(descriptor, &source, &work, jar_file);

        for (path, error) in work.remove_all() {
            tracing::warn!(path = %path.display(), %error, "failed to remove working file");
        }

        result
    }

    /// Guarded pipeline body: everything between workroot creation and cleanup
    fn build_jar(
        &self,
        descriptor: &ContractDescriptor,
        source: &str,
        work: &WorkRoot,
        jar_file: &Path,
    ) -> Result<()> {
        let source_path = self.source_path(descriptor, work.path());
        self.write_source(&source_path, source)?;

        self.compile(descriptor, work.path(), &source_path)?;
        tracing::debug!(file = %source_path.display(), "compiled stub source");

        let artifact = self.artifact_path(descriptor, work.path());
        let entry = jar::entry_name(descriptor, &self.options.format.impl_suffix);
        jar::package(jar_file, &entry, &artifact)?;
        tracing::debug!(file = %jar_file.display(), entry, "packaged jar");
        Ok(())
    }

    /// Path of the generated source file under `root`
    fn source_path(&self, descriptor: &ContractDescriptor, root: &Path) -> PathBuf {
        self.impl_path(descriptor, root, "java")
    }

    /// Expected path of the compiled class file under `root`
    fn artifact_path(&self, descriptor: &ContractDescriptor, root: &Path) -> PathBuf {
        self.impl_path(descriptor, root, "class")
    }

    fn impl_path(&self, descriptor: &ContractDescriptor, root: &Path, extension: &str) -> PathBuf {
        let mut path = root.to_path_buf();
        for segment in descriptor.namespace() {
            path.push(segment);
        }
        path.push(format!(
            "{}{}.{}",
            descriptor.simple_name(),
            self.options.format.impl_suffix,
            extension
        ));
        path
    }

    /// Write the source unit, creating missing parent directories
    ///
    /// A failed write removes the partial file so no readable artifact
    /// survives the failure.
    fn write_source(&self, path: &Path, source: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ImplError::write(path, e.to_string()))?;
        }
        fs::write(path, source).map_err(|e| {
            let _ = fs::remove_file(path);
            ImplError::write(path, e.to_string())
        })
    }

    /// Invoke the external compiler over the generated source
    ///
    /// The classpath is the working root plus the contract's own origin
    /// location, so the compiler can resolve the contract type itself.
    fn compile(
        &self,
        descriptor: &ContractDescriptor,
        work_root: &Path,
        source_path: &Path,
    ) -> Result<()> {
        let origin = descriptor
            .classpath
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let classpath = format!(
            "{}{}{}",
            work_root.display(),
            CLASSPATH_SEPARATOR,
            origin.display()
        );

        let output = Command::new(&self.options.compiler)
            .arg(source_path)
            .args(["-encoding", "UTF-8"])
            .arg("-d")
            .arg(work_root)
            .arg("-cp")
            .arg(&classpath)
            .output()
            .map_err(|e| ImplError::compile(source_path, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ImplError::compile(source_path, stderr.trim().to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implement_options_builder() {
        let options = ImplementOptions::new().compiler("ecj");
        assert_eq!(options.compiler, "ecj");
        assert_eq!(options.format.impl_suffix, "Impl");
    }
}
