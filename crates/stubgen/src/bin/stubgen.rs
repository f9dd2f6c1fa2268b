/// Stub generator CLI
///
/// Two invocation forms:
///   stubgen <contract> <destination-dir>          generate the stub source
///   stubgen -jar <contract> <destination-jar>     generate, compile, package
///
/// Contract names resolve against the registry rooted at
/// `$STUBGEN_CONTRACT_PATH` (default: current directory).

use std::path::PathBuf;
use std::process;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stubgen::{ImplementOptions, Implementor};
use stubgen_contract::ContractRegistry;

#[derive(Parser, Debug)]
#[command(name = "stubgen")]
#[command(about = "Generates stub implementations for Java interfaces and packs them into jars")]
#[command(version)]
struct Args {
    /// `<contract> <destination-dir>` or `-jar <contract> <destination-jar>`
    #[arg(value_name = "ARGS", num_args = 2..=3, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Invocation mode parsed from the raw argument list
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Generate {
        contract: String,
        destination: PathBuf,
    },
    Jar {
        contract: String,
        destination: PathBuf,
    },
}

impl Mode {
    fn from_args(args: &[String]) -> Result<Self, String> {
        match args {
            [contract, destination] if contract != "-jar" => Ok(Mode::Generate {
                contract: contract.clone(),
                destination: PathBuf::from(destination),
            }),
            [token, contract, destination] if token == "-jar" => Ok(Mode::Jar {
                contract: contract.clone(),
                destination: PathBuf::from(destination),
            }),
            _ => Err(
                "usage: stubgen <contract> <destination-dir> | stubgen -jar <contract> <destination-jar>"
                    .to_string(),
            ),
        }
    }
}

fn run(mode: Mode) -> anyhow::Result<()> {
    let registry_root = std::env::var_os("STUBGEN_CONTRACT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let registry = ContractRegistry::new(registry_root);
    let implementor = Implementor::new(ImplementOptions::new());

    match mode {
        Mode::Generate {
            contract,
            destination,
        } => {
            let descriptor = registry
                .resolve(&contract)
                .with_context(|| format!("registry root {}", registry.root().display()))?;
            let path = implementor
                .implement(&descriptor, &destination)
                .with_context(|| format!("could not implement {}", contract))?;
            println!("Generated {}", path.display());
        }
        Mode::Jar {
            contract,
            destination,
        } => {
            let descriptor = registry
                .resolve(&contract)
                .with_context(|| format!("registry root {}", registry.root().display()))?;
            implementor
                .implement_jar(&descriptor, &destination)
                .with_context(|| format!("could not package {}", contract))?;
            println!("Packaged {}", destination.display());
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mode = match Mode::from_args(&args.args) {
        Ok(mode) => mode,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    if let Err(error) = run(mode) {
        eprintln!("{:#}", error);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generate_mode() {
        let mode = Mode::from_args(&strings(&["sample.pkg.Greeter", "out"])).unwrap();
        assert_eq!(
            mode,
            Mode::Generate {
                contract: "sample.pkg.Greeter".to_string(),
                destination: PathBuf::from("out"),
            }
        );
    }

    #[test]
    fn test_jar_mode() {
        let mode = Mode::from_args(&strings(&["-jar", "sample.pkg.Greeter", "out.jar"])).unwrap();
        assert_eq!(
            mode,
            Mode::Jar {
                contract: "sample.pkg.Greeter".to_string(),
                destination: PathBuf::from("out.jar"),
            }
        );
    }

    #[test]
    fn test_three_args_require_jar_token() {
        assert!(Mode::from_args(&strings(&["x", "y", "z"])).is_err());
    }

    #[test]
    fn test_jar_token_alone_is_rejected() {
        assert!(Mode::from_args(&strings(&["-jar", "out.jar"])).is_err());
    }
}
