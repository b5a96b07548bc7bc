//! CLI tool for card scheme validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number against the default networks
//! ccschemes validate 4242424242424242 --code 123
//!
//! # Add networks, drop others
//! ccschemes validate 6011000990139424 --with discover --without american-express
//!
//! # Load the network table from a JSON file
//! ccschemes validate 3566002020360505 --config networks.json --output json
//!
//! # Show the active scheme table
//! ccschemes schemes --with jcb
//!
//! # Luhn check only
//! ccschemes luhn 4539578763621486
//!
//! # Mask a card number (PCI-DSS compliant)
//! ccschemes mask 4242424242424242
//! ```
//!
//! Set `RUST_LOG=cc_schemes=trace` to see registry decisions on stderr.

use cc_schemes::{
    luhn, mask, options, Card, Network, NetworkConfig, RegistryError, SchemeRegistry,
    ValidationError,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ccschemes")]
#[command(author, version, about = "Payment card scheme validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card number and optional security code
    Validate {
        /// Card number to validate (whitespace allowed)
        card_number: String,

        /// Security code (CVV/CVC/CID/CVN)
        #[arg(short, long)]
        code: Option<u32>,

        #[command(flatten)]
        networks: NetworkArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// List the registered schemes in scan order
    Schemes {
        #[command(flatten)]
        networks: NetworkArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Check if a card number passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Mask a card number, keeping the BIN and last four
    Mask {
        /// Card number to mask
        card_number: String,
    },
}

#[derive(Args)]
struct NetworkArgs {
    /// JSON file listing networks to register and unregister
    #[arg(long)]
    config: Option<PathBuf>,

    /// Register an extra network (repeatable, applied in order)
    #[arg(long = "with", value_name = "NETWORK")]
    with: Vec<NetworkArg>,

    /// Unregister a network (repeatable)
    #[arg(long = "without", value_name = "NETWORK")]
    without: Vec<NetworkArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum NetworkArg {
    Visa,
    Mastercard,
    #[value(name = "american-express", alias = "amex")]
    Amex,
    #[value(name = "diners-club", alias = "diners")]
    Diners,
    Discover,
    Jcb,
    #[value(name = "unionpay")]
    UnionPay,
    Maestro,
}

impl From<NetworkArg> for Network {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Visa => Network::Visa,
            NetworkArg::Mastercard => Network::Mastercard,
            NetworkArg::Amex => Network::Amex,
            NetworkArg::Diners => Network::Diners,
            NetworkArg::Discover => Network::Discover,
            NetworkArg::Jcb => Network::Jcb,
            NetworkArg::UnionPay => Network::UnionPay,
            NetworkArg::Maestro => Network::Maestro,
        }
    }
}

impl NetworkArgs {
    /// Builds the registry: config file first, then `--without`, then `--with`.
    fn registry(&self) -> Result<SchemeRegistry, String> {
        let config = match &self.config {
            Some(path) => Some(NetworkConfig::from_file(path).map_err(|e| e.to_string())?),
            None => None,
        };
        let without: Vec<Network> = self.without.iter().copied().map(Network::from).collect();
        let with: Vec<Network> = self.with.iter().copied().map(Network::from).collect();
        build_registry(config, &without, &with).map_err(|e| e.to_string())
    }
}

/// Applies each source as its own option, in order, so `--without` also
/// removes networks the config file registered.
fn build_registry(
    config: Option<NetworkConfig>,
    without: &[Network],
    with: &[Network],
) -> Result<SchemeRegistry, RegistryError> {
    let mut builder = SchemeRegistry::builder();
    if let Some(config) = config {
        builder = builder.with(config);
    }
    for network in without {
        builder = builder.with(options::unregister_scheme(network.id()));
    }
    for network in with {
        builder = builder.with(options::register_network(*network));
    }
    builder.build()
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cc_schemes=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            card_number,
            code,
            networks,
            output,
        } => cmd_validate(&card_number, code, &networks, output),
        Commands::Schemes { networks, output } => cmd_schemes(&networks, output),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
        Commands::Mask { card_number } => cmd_mask(&card_number),
    }
}

fn cmd_validate(
    card_number: &str,
    code: Option<u32>,
    networks: &NetworkArgs,
    output: OutputFormat,
) -> ExitCode {
    let registry = match networks.registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut card = Card::new(card_number);
    if let Some(code) = code {
        card = card.with_code(code);
    }

    let result = registry.validate(&card);
    match output {
        OutputFormat::Text => match &result {
            Ok(scheme) => {
                println!("Valid: yes");
                println!("Scheme: {}", scheme.name);
                println!("Masked: {}", card.masked());
            }
            Err(e) => {
                println!("Valid: no");
                if let Some(scheme) = e.scheme() {
                    println!("Scheme: {}", scheme.name);
                }
                println!("Error: {}", e);
            }
        },
        OutputFormat::Json => {
            let body = match &result {
                Ok(scheme) => serde_json::json!({
                    "valid": true,
                    "scheme": scheme,
                    "masked": card.masked(),
                }),
                Err(e) => serde_json::json!({
                    "valid": false,
                    "scheme": e.scheme(),
                    "reason": reason(e),
                    "error": e.to_string(),
                }),
            };
            println!("{:#}", body);
        }
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn reason(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::ChecksumInvalid => "checksum_invalid",
        ValidationError::NoMatchingScheme => "no_matching_scheme",
        ValidationError::SecurityCodeLengthMismatch { .. } => "security_code_length_mismatch",
    }
}

fn cmd_schemes(networks: &NetworkArgs, output: OutputFormat) -> ExitCode {
    let registry = match networks.registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let schemes = registry.list();
    match output {
        OutputFormat::Text => {
            for scheme in &schemes {
                println!(
                    "{:<18} {:<18} {} {} lengths {:?}",
                    scheme.id.as_str(),
                    scheme.name,
                    scheme.code.name,
                    scheme.code.length,
                    scheme.lengths
                );
            }
        }
        OutputFormat::Json => println!("{:#}", serde_json::json!(schemes)),
    }
    ExitCode::SUCCESS
}

fn cmd_luhn(card_number: &str) -> ExitCode {
    if luhn::check(Card::new(card_number).number()) {
        println!("Luhn check: PASS");
        ExitCode::SUCCESS
    } else {
        println!("Luhn check: FAIL");
        ExitCode::FAILURE
    }
}

fn cmd_mask(card_number: &str) -> ExitCode {
    println!("{}", mask::mask_with_bin(Card::new(card_number).number()));
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_schemes::SchemeId;

    fn ids(registry: &SchemeRegistry) -> Vec<&str> {
        registry.ids().map(SchemeId::as_str).collect()
    }

    #[test]
    fn test_without_removes_config_registered_network() {
        let config = NetworkConfig::from_json(r#"{ "register": ["discover"] }"#).unwrap();
        let registry = build_registry(Some(config), &[Network::Discover], &[]).unwrap();
        assert_eq!(ids(&registry), ["visa", "mastercard", "american-express"]);
    }

    #[test]
    fn test_with_runs_after_without() {
        let registry =
            build_registry(None, &[Network::Visa], &[Network::Jcb, Network::Visa]).unwrap();
        assert_eq!(ids(&registry), ["mastercard", "american-express", "jcb", "visa"]);
    }

    #[test]
    fn test_with_duplicate_of_config_fails() {
        let config = NetworkConfig::from_json(r#"{ "register": ["jcb"] }"#).unwrap();
        assert_eq!(
            build_registry(Some(config), &[], &[Network::Jcb]).unwrap_err(),
            RegistryError::DuplicateScheme { id: SchemeId::JCB }
        );
    }

    #[test]
    fn test_flags_parse_in_order() {
        let cli = Cli::try_parse_from([
            "ccschemes",
            "schemes",
            "--without",
            "amex",
            "--with",
            "unionpay",
            "--with",
            "maestro",
        ])
        .unwrap();
        let Commands::Schemes { networks, .. } = cli.command else {
            panic!("expected schemes subcommand");
        };
        let registry = networks.registry().unwrap();
        assert_eq!(ids(&registry), ["visa", "mastercard", "unionpay", "maestro"]);
    }
}
