/// Contract metadata for stubgen
///
/// Provides the read-only descriptor model for behavioral contracts
/// (interfaces) and the registry that resolves a dotted contract name to a
/// descriptor file on disk.

pub mod descriptor;
pub mod registry;

pub use descriptor::{
    ContractDescriptor, ContractKind, MethodDescriptor, ParamDescriptor, Visibility,
};
pub use registry::{ContractRegistry, ResolveError};
