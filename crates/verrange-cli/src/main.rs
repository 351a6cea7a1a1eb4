#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use verrange_config::PluginDescriptor;
use verrange_dotnet::{ReSharperVersion, WaveVersion};
use verrange_range::{parse_range, Version, VersionRange};

type CliResult = Result<(), Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(name = "verrange", about = "Parse and remap plugin version ranges")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a version range and print its bounds
    Range {
        /// Range expression, e.g. "[183,191)"
        range: String,
        /// Version scheme of the range endpoints
        #[arg(long, value_enum, default_value_t = Scheme::Wave)]
        scheme: Scheme,
    },
    /// Map a wave version to its ReSharper release
    Remap {
        /// Wave version, e.g. "183" or "183.2"
        wave: String,
    },
    /// Map a wave range to a ReSharper range
    RemapRange {
        /// Wave range expression, e.g. "[183,191)"
        range: String,
    },
    /// Check a plugin descriptor against a ReSharper release
    Check {
        /// Path to the plugin's verrange.toml
        descriptor: PathBuf,
        /// ReSharper release to check against, e.g. "2018.3"
        #[arg(long)]
        ide: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scheme {
    Wave,
    Resharper,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Range { range, scheme } => cmd_range(&range, scheme),
        Command::Remap { wave } => cmd_remap(&wave),
        Command::RemapRange { range } => cmd_remap_range(&range),
        Command::Check { descriptor, ide } => cmd_check(&descriptor, &ide),
    };

    if let Err(msg) = result {
        eprintln!("error: {msg}");
        process::exit(1);
    }
}

/// `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("warning: cannot initialize logging: {e}");
    }
}

fn cmd_range(raw: &str, scheme: Scheme) -> CliResult {
    let report = match scheme {
        Scheme::Wave => describe_range(&parse_range::<WaveVersion>(raw)?),
        Scheme::Resharper => describe_range(&parse_range::<ReSharperVersion>(raw)?),
    };
    println!("{report}");
    Ok(())
}

fn cmd_remap(raw: &str) -> CliResult {
    let wave = <WaveVersion as Version>::parse(raw)?;
    let resharper = verrange_dotnet::remap(&wave)?;
    debug!(%wave, %resharper, "remapped wave version");
    println!("{resharper}");
    Ok(())
}

fn cmd_remap_range(raw: &str) -> CliResult {
    let range = verrange_dotnet::resharper_range_from_wave_range(raw)?;
    println!("{range}");
    Ok(())
}

fn cmd_check(path: &Path, ide: &str) -> CliResult {
    let descriptor = PluginDescriptor::from_path(path)?;
    let ide = <ReSharperVersion as Version>::parse(ide)?;
    let range = descriptor.compatible_resharper_range()?;
    let compatible = range.as_ref().is_none_or(|range| range.contains(&ide));
    let supported = range.map_or_else(|| "any release".to_owned(), |range| range.to_string());

    if !compatible {
        return Err(format!(
            "{} {} is not compatible with ReSharper {ide} (supports {supported})",
            descriptor.plugin.id, descriptor.plugin.version
        )
        .into());
    }
    println!(
        "{} {} is compatible with ReSharper {ide} (supports {supported})",
        descriptor.plugin.id, descriptor.plugin.version
    );
    Ok(())
}

/// Render a range and its bounds, one per line.
fn describe_range<V: fmt::Display>(range: &VersionRange<V>) -> String {
    let bound = |version: Option<&V>, included: bool| match version {
        None => "unbounded".to_owned(),
        Some(v) if included => format!("{v} (inclusive)"),
        Some(v) => format!("{v} (exclusive)"),
    };
    format!(
        "range: {range}\nmin:   {}\nmax:   {}",
        bound(range.min(), range.min_included()),
        bound(range.max(), range.max_included()),
    )
}
