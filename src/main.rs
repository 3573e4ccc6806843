//! Rubric: HTML conformance checker CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rubric::checker::{AggregateStats, Checker};
use rubric::config::{build_ignore_set, is_ignored, load_config, starter_config, CONFIG_FILENAME};
use rubric::reporter::{ConsoleReporter, JsonReporter};
use rubric::rubric::{builtin_rubric, BUILTIN_RUBRICS};
use rubric::ScoreReport;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Rubric: grade a hand-authored HTML document against a rubric of structural rules
#[derive(Parser, Debug)]
#[command(name = "rubric")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// HTML file, or directory of submissions, to check
    #[arg(default_value = "index.html")]
    path: PathBuf,

    /// Built-in rubric to grade with (default: mips-homework)
    #[arg(long, short)]
    rubric: Option<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum percentage a document must reach (exit 1 if below). Default: 100
    #[arg(long, short)]
    threshold: Option<f64>,

    /// Quiet mode (one line per document)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output: list passing rules and log each verdict
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .rubricrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .rubricrc.json with defaults
    Init {
        /// Minimum percentage threshold (e.g. 80)
        #[arg(long)]
        threshold: Option<f64>,

        /// Built-in rubric to select
        #[arg(long)]
        rubric: Option<String>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// List built-in rubrics, or the rules of one rubric
    List {
        /// Rubric whose rules to list
        rubric: Option<String>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "rubric=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Init {
                threshold,
                rubric,
                dir,
            } => run_init(threshold, rubric.as_deref(), dir.as_deref()),
            Commands::List { rubric } => run_list(rubric.as_deref()),
        };
    }

    init_logging(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    // Resolve work directory for config search
    let work_dir = if args.path.is_dir() {
        args.path.clone()
    } else {
        match args.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    };
    let work_dir = work_dir.canonicalize().unwrap_or(work_dir);

    // Load config (CLI flags override config file)
    let config = load_config(&work_dir, args.config.as_deref())?
        .merge_with_cli(args.threshold, args.rubric.as_deref());

    let checker = Checker::from_config(&config)
        .with_context(|| format!("Failed to build rubric '{}'", config.rubric_name()))?;

    let directory_mode = args.path.is_dir();
    let (reports, unchecked) = if directory_mode {
        let ignore_set = if config.ignore.is_empty() {
            None
        } else {
            Some(build_ignore_set(&config.ignore)?)
        };
        let files = collect_documents(&args.path, config.document_name(), ignore_set.as_ref());
        if files.is_empty() {
            eprintln!(
                "{}: No {} files found under {}",
                "Warning".yellow(),
                config.document_name(),
                args.path.display()
            );
            return Ok(ExitCode::from(2));
        }
        checker.check_all(&files)
    } else {
        (vec![checker.check_file(&args.path)?], Vec::new())
    };

    let stats = AggregateStats::from_reports(&reports);

    let mut console = ConsoleReporter::new();
    if args.no_color {
        console = console.without_colors();
    }
    if args.verbose {
        console = console.verbose();
    }

    // Unreadable submissions are always reported, whatever the output mode
    for doc in &unchecked {
        console.report_unchecked(doc);
    }

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if directory_mode {
            println!(
                "{}",
                reporter.report_with_summary(&reports, &unchecked, &stats)
            );
        } else {
            println!("{}", reporter.report(&reports[0]));
        }
    } else if args.quiet {
        for report in &reports {
            console.report_quiet(report);
        }
    } else if directory_mode {
        console.report_many(&reports, &stats);
    } else {
        console.report(&reports[0]);
    }

    if !unchecked.is_empty() {
        if !args.quiet && !args.json {
            eprintln!(
                "{}: {} document(s) could not be checked",
                "Failed".red().bold(),
                unchecked.len()
            );
        }
        return Ok(ExitCode::from(2));
    }

    let threshold = config.threshold();
    let below: Vec<&ScoreReport> = reports
        .iter()
        .filter(|r| !r.meets_threshold(threshold))
        .collect();
    if below.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        if !args.quiet && !args.json {
            eprintln!(
                "{}: {} document(s) below threshold {:.2}%",
                "Failed".red().bold(),
                below.len(),
                threshold
            );
        }
        Ok(ExitCode::from(1))
    }
}

/// Find submission files named `document_name` under `root`
fn collect_documents(
    root: &Path,
    document_name: &str,
    ignore_set: Option<&globset::GlobSet>,
) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == document_name)
        .map(|e| e.into_path())
        .filter(|p| match ignore_set {
            Some(set) => !is_ignored(p, set),
            None => true,
        })
        .collect();

    // Sort for consistent output
    files.sort();
    files
}

fn run_init(threshold: Option<f64>, rubric: Option<&str>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(name) = rubric {
        builtin_rubric(name)?;
    }

    let config = starter_config(rubric, threshold);
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
    std::fs::write(&config_path, json + "\n")
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    eprintln!("{}: Created {}", "Info".blue(), config_path.display());
    Ok(ExitCode::SUCCESS)
}

fn run_list(rubric: Option<&str>) -> Result<ExitCode> {
    match rubric {
        None => {
            for (name, summary) in BUILTIN_RUBRICS {
                println!("{:<15} {}", name.bold(), summary);
            }
        }
        Some(name) => {
            let rubric = builtin_rubric(name)?;
            for rule in rubric.rules() {
                println!("{:<22} {}", rule.name().bold(), rule.description());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
