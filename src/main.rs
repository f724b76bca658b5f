//! bench2csv - 将基准测试日志转换为 CSV
//!
//! ```bash
//! bench2csv experiment_results.txt            # 写出 experiment_results.csv
//! bench2csv -o out.csv --with-derived run.log
//! ```

use anyhow::{Context, Result};
use bench_log_parser::tools::csv_path_for;
use bench_log_parser::{
    CsvOptions, ParserConfig, parse_runs_from_file_with_config, write_csv_file,
};
use clap::Parser;
use log::{LevelFilter, debug, info};
use std::path::PathBuf;

/// Convert string-search benchmark logs into a CSV dataset.
#[derive(Parser, Debug)]
#[command(name = "bench2csv", version, about)]
struct Cli {
    /// Benchmark log file to parse.
    log_file: PathBuf,

    /// Output CSV path (defaults to the log path with a `.csv` extension).
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Reject runs that lack any of the six core fields.
    #[arg(long)]
    strict: bool,

    /// Append mem_peak_mbytes, query_length and method_id columns.
    #[arg(long)]
    with_derived: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only print errors.
    #[arg(long, short = 'q')]
    quiet: bool,
}

impl Cli {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.level())
        .parse_default_env()
        .init();

    let config = ParserConfig::default().strict(cli.strict);
    debug!("parser config: {:?}", config);

    let runs = parse_runs_from_file_with_config(&cli.log_file, config)
        .with_context(|| format!("failed to parse {}", cli.log_file.display()))?;
    info!("parsed {} run(s) from {}", runs.len(), cli.log_file.display());

    let output = cli.output.clone().unwrap_or_else(|| csv_path_for(&cli.log_file));
    let options = CsvOptions {
        with_derived: cli.with_derived,
    };
    write_csv_file(&output, &runs, options)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(())
}
