//! Validate a JSON export of table rows against the record schemas.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use backend::outbound::TableName;
use backend::record_check::{
    BatchReport, RecordCheckError, RecordCheckSettings, check_batch, load_batch,
};
use clap::Parser;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `record-check` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "record-check",
    about = "Check exported table rows against the course, term, and user record rules",
    version
)]
struct CliArgs {
    /// Table whose record rules apply: all_courses, courses, terms, or users.
    #[arg(long, value_name = "name")]
    table: TableName,
    /// Path to a JSON array of rows.
    #[arg(long, value_name = "path")]
    input: PathBuf,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(report) if report.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<BatchReport, RecordCheckError> {
    let settings = RecordCheckSettings::load_from_iter([OsString::from("record-check")])
        .map_err(|error| RecordCheckError::Config {
            message: error.to_string(),
        })?;
    init_tracing(settings.json_logs);

    let rows = load_batch(&args.input)?;
    let report = check_batch(args.table, rows, settings.fail_fast);
    print_report(io::stdout().lock(), &report);
    Ok(report)
}

fn init_tracing(json_logs: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn print_report(mut out: impl Write, report: &BatchReport) {
    let mut lines = vec![report.summary()];
    lines.extend(
        report
            .rejected()
            .iter()
            .map(|rejection| format!("  row {}: {}", rejection.index, rejection.message)),
    );
    for line in lines {
        if let Err(err) = writeln!(out, "{line}") {
            drop(err);
            return;
        }
    }
}
