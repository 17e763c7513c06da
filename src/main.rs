use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use env_logger::{Builder, Env};
use log::{debug, info, LevelFilter};
use polars::prelude::*;

use titanic_stats::records::{PassengerRecord, COL_SURVIVED};
use titanic_stats::{prepare, run_tests};

#[derive(Parser, Debug)]
#[command(version, about = "Chi-square, t-test and ANOVA over the Titanic passenger table")]
struct Args {
    #[arg(default_value = "Titanic-Dataset.csv", help = "Input CSV path")]
    input: PathBuf,
    #[arg(long, help = "Emit the result records as JSON")]
    json: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Verbose level")]
    verbose: u8,
}

fn read_csv<P: AsRef<Path>>(path: P) -> PolarsResult<DataFrame> {
    let file = File::open(path)?;

    CsvReader::new(file)
        .has_header(true)
        .with_dtypes(Some(Arc::new(PassengerRecord::raw_schema())))
        .finish()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.verbose {
        1 => LevelFilter::Debug,
        2.. => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    let env = Env::new().filter("TITANIC_LOG");
    Builder::new()
        .filter(Some("titanic_stats"), log_level)
        .parse_env(env)
        .init();

    debug!("arguments {:#?}", args);

    let raw = read_csv(&args.input)?;
    info!("loaded {} rows from {}", raw.height(), args.input.display());

    let cleaned = prepare(&raw)?;
    let results = run_tests(&cleaned)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let total = cleaned.height();
    let survivors = cleaned.column(COL_SURVIVED)?.sum::<i64>().unwrap_or(0);
    let survival_rate = 100.0 * survivors as f64 / total as f64;
    println!("Passengers: {total}");
    println!("Survivors:  {survivors} ({survival_rate:.1}%)");
    println!();
    for result in &results {
        println!("{}: {}", result.test_name, result.research_question);
        println!(
            "  {} vs {} | statistic = {:.4}, p-value = {:.6} -> {}",
            result.variable_1,
            result.variable_2.as_deref().unwrap_or("-"),
            result.statistic,
            result.p_value,
            result.conclusion
        );
    }

    Ok(())
}
