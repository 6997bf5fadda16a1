use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use workout::{
    Training,
    sensors::{Package, read_packages, sample_packages},
};

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file with sensor packages, e.g. `RUN,15000,1,75`. Sample packages are used if omitted
    pub input: Option<PathBuf>,
    /// Also save summaries to csv file. _Note_: will truncate old file if exists
    #[arg(short, long, required = false)]
    pub output: Option<PathBuf>,
    /// Skip packages which can't be read instead of stopping
    #[arg(short, long, default_value_t = false, required = false)]
    pub keep_going: bool,
    /// Log level, `RUST_LOG` takes precedence
    #[arg(long, default_value = "warn", required = false)]
    pub log_level: String,
}

fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("Failed to init logging. Reason: {e}"))?;

    Ok(())
}

fn load_packages(input: Option<PathBuf>) -> Result<Vec<Package>, Box<dyn std::error::Error>> {
    let Some(input) = input else {
        info!("no input given, using sample packages");
        return Ok(sample_packages());
    };

    let file = File::open(&input).map_err(|e| {
        format!(
            "Failed to open input file {}. Reason: {e}",
            input.to_string_lossy()
        )
    })?;

    Ok(read_packages(file).collect::<Result<Vec<_>, _>>()?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        input,
        output,
        keep_going,
        log_level,
    } = <Args as clap::Parser>::parse();

    init_tracing(&log_level)?;

    let packages = load_packages(input)?;

    info!(total = packages.len(), "packages loaded");

    let mut wrt = output
        .as_ref()
        .map(csv::Writer::from_path)
        .transpose()
        .map_err(|e| format!("Failed to create output file. Reason: {e}"))?;

    let io = std::io::stdout();
    let mut io = BufWriter::new(io.lock());

    for Package { workout_type, data } in packages {
        let training = match workout::read_package(&workout_type, &data) {
            Ok(training) => training,
            Err(e) if keep_going => {
                warn!(%workout_type, ?data, "skip package: {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let report = training.build_summary();

        writeln!(io, "{report}")?;

        if let Some(wrt) = &mut wrt {
            wrt.serialize(&report)?;
        }
    }

    io.flush()?;

    if let (Some(output), Some(mut wrt)) = (output, wrt) {
        info!("saving to {}", output.to_string_lossy());
        wrt.flush()?;
    }

    Ok(())
}
