/// Contract descriptor types
///
/// These types are a read-only view of a behavioral contract: its qualified
/// name, kind, visibility, and method signatures. Descriptors come from the
/// registry (or any other metadata source) and are never mutated by the
/// generator.

use serde::Deserialize;
use std::path::PathBuf;

/// Kind of type a descriptor denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractKind {
    Interface,
    Class,
}

/// Declared visibility of a contract
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

/// A complete contract descriptor
///
/// `name` is the fully-qualified dotted name, e.g. `sample.pkg.Greeter`.
/// Method order is the file order and is stable across repeated loads.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractDescriptor {
    pub name: String,
    pub kind: ContractKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Location of the contract's own compiled form, used on the compiler
    /// classpath. Filled in by the registry when the file omits it.
    #[serde(default)]
    pub classpath: Option<PathBuf>,
}

impl ContractDescriptor {
    /// Namespace path segments, empty for the default package
    pub fn namespace(&self) -> Vec<&str> {
        match self.name.rsplit_once('.') {
            Some((namespace, _)) => namespace.split('.').collect(),
            None => Vec::new(),
        }
    }

    /// Simple (unqualified) name of the contract
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// One operation signature: `returns name(params) throws ...`
#[derive(Debug, Clone, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default = "default_return_type")]
    pub returns: String,
    #[serde(default)]
    pub params: Vec<ParamDescriptor>,
    #[serde(default)]
    pub throws: Vec<String>,
    /// True when the contract supplies a default body for this operation
    #[serde(default, rename = "default")]
    pub is_default: bool,
    /// True for non-instance operations
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

fn default_return_type() -> String {
    "void".to_string()
}

/// One method parameter
#[derive(Debug, Clone, Deserialize)]
pub struct ParamDescriptor {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_and_simple_name() {
        let descriptor: ContractDescriptor = serde_json::from_str(
            r#"{ "name": "sample.pkg.Greeter", "kind": "interface" }"#,
        )
        .unwrap();

        assert_eq!(descriptor.namespace(), vec!["sample", "pkg"]);
        assert_eq!(descriptor.simple_name(), "Greeter");
    }

    #[test]
    fn test_default_package() {
        let descriptor: ContractDescriptor =
            serde_json::from_str(r#"{ "name": "Greeter", "kind": "interface" }"#).unwrap();

        assert!(descriptor.namespace().is_empty());
        assert_eq!(descriptor.simple_name(), "Greeter");
    }

    #[test]
    fn test_parse_full_descriptor() {
        let descriptor: ContractDescriptor = serde_json::from_str(
            r#"{
                "name": "sample.pkg.Greeter",
                "kind": "interface",
                "visibility": "public",
                "methods": [
                    {
                        "name": "greet",
                        "returns": "java.lang.String",
                        "params": [{ "type": "java.lang.String", "name": "who" }],
                        "throws": ["java.io.IOException"]
                    },
                    { "name": "reset", "default": true },
                    { "name": "version", "returns": "int", "static": true }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(descriptor.kind, ContractKind::Interface);
        assert_eq!(descriptor.visibility, Visibility::Public);
        assert_eq!(descriptor.methods.len(), 3);

        let greet = &descriptor.methods[0];
        assert_eq!(greet.returns, "java.lang.String");
        assert_eq!(greet.params[0].type_name, "java.lang.String");
        assert_eq!(greet.params[0].name, "who");
        assert_eq!(greet.throws, vec!["java.io.IOException"]);
        assert!(!greet.is_default);

        assert!(descriptor.methods[1].is_default);
        assert_eq!(descriptor.methods[1].returns, "void");
        assert!(descriptor.methods[2].is_static);
    }

    #[test]
    fn test_visibility_defaults_to_public() {
        let descriptor: ContractDescriptor =
            serde_json::from_str(r#"{ "name": "X", "kind": "class" }"#).unwrap();

        assert_eq!(descriptor.visibility, Visibility::Public);
        assert_eq!(descriptor.kind, ContractKind::Class);
    }
}
