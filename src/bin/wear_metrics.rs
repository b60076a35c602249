use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use wear_metrics::report::render;
use wear_metrics::{analyze_file, ExtremaPolicy, OutputFormat, ReducerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "wear-metrics",
    version,
    about = "Log rate, wear rate and savings from a disk activity CSV"
)]
struct Args {
    /// CSV with `seconds_elapsed`, `size_logged` and `sectors_written` columns.
    input: PathBuf,

    /// How sector-counter extrema are tracked.
    #[arg(long, value_enum, env = "WEAR_METRICS_EXTREMA", default_value_t = ExtremaPolicy::Reference)]
    extrema: ExtremaPolicy,

    #[arg(long, value_enum, env = "WEAR_METRICS_FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let cfg = ReducerConfig {
        extrema: args.extrema,
    };

    let result = analyze_file(&args.input, cfg)
        .with_context(|| format!("computing wear metrics from {}", args.input.display()))?;
    let report = render(&result, args.format).context("rendering report")?;

    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(&args, &mut std::io::stdout().lock())
}
