/// Stub source generation
///
/// Renders a contract descriptor into one complete Java source unit: a
/// public class named `<Simple><Suffix>` that implements the contract with
/// trivial default-value bodies. The generator never references any type
/// beyond the contract itself, so the compiled stub depends on nothing but
/// the contract's own classpath.

use std::fmt::Write as _;

use stubgen_contract::{ContractDescriptor, ContractKind, MethodDescriptor, Visibility};

use crate::error::{ImplError, Result};

/// Formatting tokens threaded through the generator
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// One level of indentation
    pub indent: String,
    /// Line terminator
    pub newline: String,
    /// Suffix appended to the contract's simple name
    pub impl_suffix: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            newline: "\n".to_string(),
            impl_suffix: "Impl".to_string(),
        }
    }
}

/// Java primitive type names, `void` included
const PRIMITIVES: [&str; 9] = [
    "void", "boolean", "byte", "short", "int", "long", "char", "float", "double",
];

/// Default-value category for a return type
///
/// This is a closed, total mapping: every possible return type lands in
/// exactly one category, with reference types as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReturnKind {
    Void,
    Boolean,
    Numeric,
    Reference,
}

fn return_kind(type_name: &str) -> ReturnKind {
    match type_name {
        "void" => ReturnKind::Void,
        "boolean" => ReturnKind::Boolean,
        name if PRIMITIVES.contains(&name) => ReturnKind::Numeric,
        _ => ReturnKind::Reference,
    }
}

/// Rendered default value for a return type, `None` for void
fn default_value(type_name: &str) -> Option<&'static str> {
    match return_kind(type_name) {
        ReturnKind::Void => None,
        ReturnKind::Boolean => Some("false"),
        ReturnKind::Numeric => Some("0"),
        ReturnKind::Reference => Some("null"),
    }
}

/// Java stub source generator
pub struct SourceGenerator {
    config: FormatConfig,
    /// Output buffer
    output: String,
}

impl SourceGenerator {
    /// Create a generator with default formatting
    pub fn new() -> Self {
        Self::with_config(FormatConfig::default())
    }

    /// Create a generator with explicit formatting tokens
    pub fn with_config(config: FormatConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Name of the generated implementation class
    pub fn impl_name(&self, descriptor: &ContractDescriptor) -> String {
        format!("{}{}", descriptor.simple_name(), self.config.impl_suffix)
    }

    /// Validate the contract and collect the methods that need a stub
    ///
    /// Methods with a supplied default body and static methods are excluded;
    /// the rest keep the descriptor's own order.
    pub fn stub_methods<'d>(
        &self,
        descriptor: &'d ContractDescriptor,
    ) -> Result<Vec<&'d MethodDescriptor>> {
        if descriptor.kind != ContractKind::Interface {
            return Err(ImplError::NotAnInterface(descriptor.name.clone()));
        }
        if descriptor.visibility == Visibility::Private {
            return Err(ImplError::PrivateInterface(descriptor.name.clone()));
        }

        Ok(descriptor
            .methods
            .iter()
            .filter(|m| !m.is_default && !m.is_static)
            .collect())
    }

    /// Generate the complete source unit for a contract
    pub fn generate(&mut self, descriptor: &ContractDescriptor) -> Result<String> {
        let methods = self.stub_methods(descriptor)?;

        self.generate_package(descriptor)?;
        self.generate_class_header(descriptor)?;
        self.output.push_str(" {");
        self.newline();
        self.newline();

        for (i, method) in methods.iter().enumerate() {
            if i > 0 {
                // Blank line between member blocks
                self.newline();
            }
            self.generate_method(method)?;
        }

        self.output.push('}');
        self.newline();

        Ok(std::mem::take(&mut self.output))
    }

    /// Generate the package declaration (omitted for the default package)
    fn generate_package(&mut self, descriptor: &ContractDescriptor) -> Result<()> {
        let namespace = descriptor.namespace();
        if namespace.is_empty() {
            return Ok(());
        }
        write!(self.output, "package {};", namespace.join("."))?;
        self.newline();
        self.newline();
        Ok(())
    }

    /// Generate the class header: `public class XImpl implements pkg.X`
    fn generate_class_header(&mut self, descriptor: &ContractDescriptor) -> Result<()> {
        write!(
            self.output,
            "public class {} implements {}",
            self.impl_name(descriptor),
            descriptor.name
        )?;
        Ok(())
    }

    /// Generate one member block: override marker, signature, body
    fn generate_method(&mut self, method: &MethodDescriptor) -> Result<()> {
        self.output.push_str(&self.config.indent);
        self.output.push_str("@Override");
        self.newline();

        self.output.push_str(&self.config.indent);
        self.generate_signature(method)?;
        self.generate_body(method)?;
        Ok(())
    }

    /// Generate the declaration: visibility, return type, name, parameters,
    /// declared failure types
    fn generate_signature(&mut self, method: &MethodDescriptor) -> Result<()> {
        write!(self.output, "public {} {}(", method.returns, method.name)?;
        for (i, param) in method.params.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            // Fully-qualified type names avoid collisions in the generated unit
            write!(self.output, "{} {}", param.type_name, param.name)?;
        }
        self.output.push(')');

        if !method.throws.is_empty() {
            write!(self.output, " throws {}", method.throws.join(", "))?;
        }
        Ok(())
    }

    /// Generate the trivial body keyed by the return-type category
    fn generate_body(&mut self, method: &MethodDescriptor) -> Result<()> {
        self.output.push_str(" {");
        self.newline();
        if let Some(value) = default_value(&method.returns) {
            self.output.push_str(&self.config.indent);
            self.output.push_str(&self.config.indent);
            write!(self.output, "return {};", value)?;
            self.newline();
        }
        self.output.push_str(&self.config.indent);
        self.output.push('}');
        self.newline();
        Ok(())
    }

    fn newline(&mut self) {
        self.output.push_str(&self.config.newline);
    }
}

impl Default for SourceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
