use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use triptych_metrics::error::MetricsError;
use triptych_metrics::pipeline;

#[derive(Parser, Debug)]
#[command(name = "triptych-metrics")]
#[command(about = "Render tables and charts from a Triptych benchmark report")]
struct Args {
    /// Path to the benchmark results JSON.
    #[arg(short, long, default_value = "triptych_bench_results.json")]
    input: PathBuf,

    /// Directory the chart files are written into.
    #[arg(short, long, default_value = "plots")]
    outdir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    // Tables go to stdout; diagnostics stay on stderr.
    let mut stdout = io::stdout().lock();
    match pipeline::run(&args.input, &args.outdir, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(MetricsError::EmptyReport) => {
            error!("no results found in {}", args.input.display());
            ExitCode::from(2)
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
