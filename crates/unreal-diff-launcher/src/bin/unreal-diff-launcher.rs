//! CLI entrypoint for unreal-diff-launcher.

#[path = "unreal-diff-launcher/cli.rs"]
mod cli;
#[path = "unreal-diff-launcher/completions.rs"]
mod completions;
#[path = "unreal-diff-launcher/launch.rs"]
mod launch;
#[path = "unreal-diff-launcher/style.rs"]
mod style;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use unreal_diff_launcher::{LaunchError, LauncherConfig};
use unreal_locate::{LocateError, Resolver};

use cli::{Cli, Command};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let message = format_error_with_tip(&err);
            eprintln!("{}", style::error(format!("Error: {message}")));
            std::process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<i32> {
    let raw_args: Vec<String> = std::env::args().collect();
    let cli = match Cli::try_parse_from(&raw_args) {
        Ok(cli) => cli,
        Err(err) => {
            if err.kind() == ErrorKind::InvalidSubcommand {
                if let Some(input) = subcommand_arg(&raw_args) {
                    if let Some(suggestion) = suggest_subcommand(input) {
                        eprintln!("Did you mean: {suggestion}?");
                    }
                }
            }
            err.exit();
        }
    };
    if let Command::Completions { shell } = cli.command {
        return completions::run_completions(shell);
    }

    let config = LauncherConfig::load(cli.config.as_deref())?;
    init_tracing(cli.verbose, &config);
    if let Some(source) = &config.source {
        tracing::debug!(config = %source.display(), "loaded launcher config");
    }
    let resolver = Resolver::new(config.layout);
    let layout = resolver.layout();
    tracing::debug!(
        targets = ?layout.targets(),
        platforms = ?layout.platforms().iter().map(|p| p.name()).collect::<Vec<_>>(),
        configurations = ?layout.configurations(),
        "binary layout"
    );

    match cli.command {
        Command::Diff { left, right } => launch::run_diff(&resolver, left, right, cli.dry_run),
        Command::Merge {
            remote,
            local,
            base,
            result,
        } => launch::run_merge(&resolver, remote, local, base, result, cli.dry_run),
        Command::Locate { path, json } => launch::run_locate(&resolver, &path, json),
        Command::Completions { shell } => completions::run_completions(shell),
    }
}

/// `RUST_LOG` wins, then `--verbose`, then the configured level.
fn init_tracing(verbose: bool, config: &LauncherConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose {
            "debug"
        } else {
            config.log_level.as_directive()
        };
        EnvFilter::new(level)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// First positional argument, skipping global flags and the `--config` value.
fn subcommand_arg(raw_args: &[String]) -> Option<&str> {
    let mut args = raw_args.iter().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            args.next();
        } else if !arg.starts_with('-') {
            return Some(arg.as_str());
        }
    }
    None
}

fn suggest_subcommand(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if input.is_empty() || input.starts_with('-') {
        return None;
    }
    let candidates = ["diff", "merge", "locate", "completions"];
    let mut best = None;
    let mut best_score = usize::MAX;
    for candidate in candidates {
        let score = levenshtein(input, candidate);
        if score < best_score {
            best_score = score;
            best = Some(candidate);
        }
    }
    if best_score <= 2 {
        best
    } else {
        None
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }
    prev[b.len()]
}

fn format_error_with_tip(err: &anyhow::Error) -> String {
    let message = err.to_string();
    let tip = match err.downcast_ref::<LaunchError>() {
        Some(LaunchError::Locate(LocateError::AmbiguousProjectRoot { .. })) => Some(
            "Tip: keep a single *.uproject per project folder, or move the extra descriptors elsewhere.",
        ),
        Some(LaunchError::Locate(LocateError::NotFound { .. }) | LaunchError::NoEditorForDiff { .. }) => Some(
            "Tip: run `unreal-diff-launcher locate <asset> --verbose` from inside the project to see which roots were checked.",
        ),
        Some(LaunchError::InvalidConfig(_) | LaunchError::InvalidLayout(_)) => Some(
            "Tip: check the [binaries] section of the launcher config.",
        ),
        _ => match err.downcast_ref::<LocateError>() {
            Some(LocateError::AmbiguousProjectRoot { .. }) => Some(
                "Tip: keep a single *.uproject per project folder, or move the extra descriptors elsewhere.",
            ),
            Some(LocateError::NotFound { .. }) => Some(
                "Tip: pass a path inside an Unreal project or Engine tree that contains built editor binaries.",
            ),
            _ => None,
        },
    };
    match tip {
        Some(tip) => format!("{message}\n{tip}"),
        None => message,
    }
}
