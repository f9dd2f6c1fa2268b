/// Jar packaging for compiled stub artifacts
///
/// Writes a jar (zip container) with a minimal manifest and exactly one
/// class entry, copied from the working root.

use std::fs::File;
use std::io::{self, Write as _};
use std::path::Path;

use stubgen_contract::ContractDescriptor;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::{ImplError, Result};

/// Manifest entry path inside the jar
const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Minimal manifest: format-version attribute only
const MANIFEST: &str = "Manifest-Version: 1.0\r\n\r\n";

/// Jar entry name for a contract's compiled stub
///
/// `sample.pkg.Greeter` with suffix `Impl` maps to
/// `sample/pkg/GreeterImpl.class`; default-package contracts get a bare
/// file name.
pub fn entry_name(descriptor: &ContractDescriptor, impl_suffix: &str) -> String {
    let namespace = descriptor.namespace();
    let file = format!("{}{}.class", descriptor.simple_name(), impl_suffix);
    if namespace.is_empty() {
        file
    } else {
        format!("{}/{}", namespace.join("/"), file)
    }
}

/// Write `jar_file` containing the manifest and the one compiled artifact
///
/// A failed write removes the destination, so no half-written jar survives
/// in a state that looks successful.
pub fn package(jar_file: &Path, entry: &str, artifact: &Path) -> Result<()> {
    let file = File::create(jar_file)
        .map_err(|e| ImplError::archive_creation(jar_file, e.to_string()))?;

    let result = write_entries(file, jar_file, entry, artifact);
    if result.is_err() {
        // The ZipWriter finalizes the archive on drop; discard it
        let _ = std::fs::remove_file(jar_file);
    }
    result
}

fn write_entries(file: File, jar_file: &Path, entry: &str, artifact: &Path) -> Result<()> {
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    writer
        .start_file(MANIFEST_PATH, options)
        .map_err(|e| ImplError::archive_creation(jar_file, e.to_string()))?;
    writer
        .write_all(MANIFEST.as_bytes())
        .map_err(|e| ImplError::archive_creation(jar_file, e.to_string()))?;

    writer
        .start_file(entry, options)
        .map_err(|e| ImplError::archive_creation(jar_file, e.to_string()))?;
    let mut input =
        File::open(artifact).map_err(|e| ImplError::artifact_copy(artifact, e.to_string()))?;
    io::copy(&mut input, &mut writer)
        .map_err(|e| ImplError::artifact_copy(artifact, e.to_string()))?;

    writer
        .finish()
        .map_err(|e| ImplError::archive_creation(jar_file, e.to_string()))?;
    Ok(())
}
