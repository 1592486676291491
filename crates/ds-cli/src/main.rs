//! DefectScope CLI - report generation and export.
//!
//! Stands in for the dashboard UI: creates report descriptors, runs the
//! export pipeline with the demo summary, and writes the artifact where a
//! browser download would land.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ds_common::error::format_error_human;
use ds_common::{demo, Report, ReportFormat, ReportStore, ReportType, Result};
use ds_report::ReportExporter;

/// DefectScope - defect prediction report exporter
#[derive(Parser)]
#[command(name = "defectscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a report descriptor and export it immediately
    Generate(GenerateArgs),

    /// List the seeded demo reports
    List(ListArgs),

    /// Export a seeded demo report by id
    Export(ExportArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Report title
    #[arg(long)]
    title: String,

    /// Report cadence
    #[arg(long, value_enum, default_value = "daily")]
    report_type: ReportType,

    /// Export encoding
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    format: ReportFormat,

    /// Output directory
    #[arg(long, short, default_value = ".")]
    out: PathBuf,
}

#[derive(Args)]
struct ListArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    format: ListFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ListFormat {
    /// Aligned text table
    Table,
    /// JSON array
    Json,
}

#[derive(Args)]
struct ExportArgs {
    /// Report id to export
    #[arg(long)]
    id: u64,

    /// Output directory
    #[arg(long, short, default_value = ".")]
    out: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.global);
    let use_color = !cli.global.no_color;

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_error_human(&err, use_color));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(global: &GlobalOpts) {
    let default_level = if global.quiet {
        "error"
    } else {
        match global.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!global.no_color)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate(args) => generate(args),
        Commands::List(args) => list(args),
        Commands::Export(args) => export(args),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut store = ReportStore::with_reports(demo::reports());
    let report = store.create(args.title, args.report_type, args.format);
    debug!(report_id = report.id, "Report descriptor created");

    let path = ReportExporter::new().export_to_dir(&report, &demo::summary(), &args.out)?;
    println!("{}", path.display());
    Ok(())
}

fn list(args: ListArgs) -> Result<()> {
    let store = ReportStore::with_reports(demo::reports());
    match args.format {
        ListFormat::Json => {
            println!("{}", serde_json::to_string_pretty(store.list())?);
        }
        ListFormat::Table => {
            println!("{:<4} {:<45} {:<8} {:<6} CREATED", "ID", "TITLE", "TYPE", "FMT");
            for report in store.list() {
                print_row(report);
            }
        }
    }
    Ok(())
}

fn export(args: ExportArgs) -> Result<()> {
    let store = ReportStore::with_reports(demo::reports());
    let report = store.get(args.id)?;

    let path = ReportExporter::new().export_to_dir(report, &demo::summary(), &args.out)?;
    println!("{}", path.display());
    Ok(())
}

fn print_row(report: &Report) {
    println!(
        "{:<4} {:<45} {:<8} {:<6} {}",
        report.id,
        report.title,
        report.report_type,
        report.report_format,
        report.created_at.format("%Y-%m-%d %H:%M"),
    );
}
