use std::cmp::Ordering;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use java_version::config::{LOG_FILTER_ENV, ResolverConfig, data_dir, load_config, log_path};
use java_version::version::{EnvPropertySource, resolve_runtime_version};
use java_version::{JavaVersion, runtime_version};

#[derive(Parser)]
#[command(name = "java-version")]
#[command(version, about = "Parse and compare Java runtime versions")]
struct Cli {
    /// JSON file overriding the property names the runtime version is read from
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to the data directory instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical form of a version
    Parse {
        #[arg(value_name = "VERSION")]
        input: JavaVersion,
        /// Print all components as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print `<`, `=` or `>` for two versions
    Compare { left: JavaVersion, right: JavaVersion },
    /// Exit with status 1 unless the runtime version is at least MINIMUM
    Check { minimum: JavaVersion },
}

#[derive(Serialize)]
struct VersionFields<'a> {
    version: &'a JavaVersion,
    huge: u32,
    major: u32,
    minor: u32,
    patch: u32,
    identifier: Option<&'a str>,
}

impl<'a> From<&'a JavaVersion> for VersionFields<'a> {
    fn from(version: &'a JavaVersion) -> Self {
        Self {
            version,
            huge: version.huge(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            identifier: version.identifier(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file)?;

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ResolverConfig::default(),
    };

    match cli.command {
        None => println!("{}", detect_runtime_version(&config)),
        Some(Command::Parse { input, json }) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&VersionFields::from(&input))?);
            } else {
                println!("{input}");
            }
        }
        Some(Command::Compare { left, right }) => {
            let symbol = match left.cmp(&right) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!("{symbol}");
        }
        Some(Command::Check { minimum }) => {
            let runtime = detect_runtime_version(&config);
            if !runtime.is_at_least(&minimum) {
                eprintln!("Runtime version {runtime} is older than {minimum}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn detect_runtime_version(config: &ResolverConfig) -> JavaVersion {
    if *config == ResolverConfig::default() {
        return runtime_version().clone();
    }
    resolve_runtime_version(&EnvPropertySource, config).unwrap_or(JavaVersion::MIN_VALUE)
}

fn init_logging(log_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    if !log_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    std::fs::create_dir_all(data_dir())?;
    let path = log_path();
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid log path {}", path.display()))?;
    let appender = tracing_appender::rolling::never(data_dir(), file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .json()
        .init();

    Ok(Some(guard))
}
