use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use num_bigint::BigInt;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zkhash_corelib::{params, DigestFormat, DigestReport, HashConfig, IntegerHasher, SignPolicy};

const EXIT_USAGE: u8 = 2;
const EXIT_OUT_OF_DOMAIN: u8 = 3;

#[derive(Parser)]
#[command(
    name = "zkhash",
    version,
    about = "Poseidon hash of an arbitrary-precision integer",
    allow_negative_numbers = true
)]
struct Cli {
    /// Integer to hash, in decimal
    integer: Option<String>,

    /// TOML file with hash settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Digest rendering: decimal, hex-le, hex-be or field
    #[arg(long)]
    format: Option<DigestFormat>,

    /// Number of field elements in the digest
    #[arg(long)]
    digest_len: Option<u32>,

    /// Negative input handling: reject, twos-complement or offset-unsigned
    #[arg(long)]
    sign_policy: Option<SignPolicy>,

    /// Input capacity in 253-bit limbs
    #[arg(long)]
    max_limbs: Option<u32>,

    /// Emit a JSON object instead of a sentence
    #[arg(long)]
    json: bool,

    /// Print the parameter set and exit
    #[arg(long)]
    params: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Invalid input '{0}'. Please provide an integer.")]
    InvalidArgument(String),
    #[error("Please provide an integer as a command line argument.")]
    MissingArgument,
}

#[derive(Serialize)]
struct HashOutput {
    input: String,
    #[serde(flatten)]
    digest: DigestReport,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_integer(raw: &str) -> Result<BigInt, CliError> {
    BigInt::from_str(raw.trim()).map_err(|_| CliError::InvalidArgument(raw.to_string()))
}

fn resolve_config(cli: &Cli) -> Result<HashConfig> {
    let mut cfg = match &cli.config {
        Some(path) => HashConfig::load(path)?,
        None => HashConfig::default(),
    };
    if let Some(format) = cli.format {
        cfg.format = format;
    }
    if let Some(len) = cli.digest_len {
        cfg.digest_len = len;
    }
    if let Some(policy) = cli.sign_policy {
        cfg.sign_policy = policy;
    }
    if let Some(limbs) = cli.max_limbs {
        cfg.max_limbs = limbs;
    }
    Ok(cfg)
}

fn run(cli: Cli) -> Result<ExitCode> {
    if cli.params {
        println!("{}", serde_json::to_string_pretty(&params().info())?);
        return Ok(ExitCode::SUCCESS);
    }

    let cfg = resolve_config(&cli)?;
    let hasher = IntegerHasher::new(cfg)?;
    debug!(config = ?hasher.config(), "resolved configuration");

    let raw = match cli.integer.as_deref() {
        Some(raw) => raw,
        None => {
            eprintln!("{}", CliError::MissingArgument);
            eprintln!("Usage: zkhash [OPTIONS] <INTEGER>");
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };

    let n = match parse_integer(raw) {
        Ok(n) => n,
        Err(e) => {
            debug!(input = raw, "rejected non-integer argument");
            eprintln!("{e}");
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };

    let digest = match hasher.hash(&n) {
        Ok(d) => d,
        Err(e) if e.is_out_of_domain() => {
            eprintln!("Cannot hash {n}: {e}");
            return Ok(ExitCode::from(EXIT_OUT_OF_DOMAIN));
        }
        Err(e) => return Err(e.into()),
    };

    let format = hasher.config().format;
    if cli.json {
        let out = HashOutput {
            input: n.to_string(),
            digest: digest.report(format),
        };
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("The hash of {n} is {}.", digest.render(format));
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
