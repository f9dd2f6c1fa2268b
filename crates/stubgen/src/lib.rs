/// Stub implementation generator
///
/// Synthesizes compilable Java stub implementations for interface contracts,
/// and optionally compiles and packages them into a jar.

pub mod codegen;
pub mod driver;
pub mod error;
pub mod jar;
pub mod workdir;

pub use codegen::{FormatConfig, SourceGenerator};
pub use driver::{ImplementOptions, Implementor};
pub use error::{ImplError, Result};
pub use workdir::WorkRoot;
