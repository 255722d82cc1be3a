use clap::Parser;
use cy30_driver::RangeFinder;
use log::{error, info};
use std::time::Instant;

/// Takes a series of single measurements and logs how long each one took.
#[derive(Parser)]
struct Args {
    /// The device path to a serial port
    port: String,
    /// Number of measurements
    #[arg(short, long, default_value_t = 10)]
    count: usize,
    /// Print each reading as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut finder = match RangeFinder::open(&args.port) {
        Ok(finder) => finder,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let mut last_time = Instant::now();
    for _ in 0..args.count {
        match finder.single_distance() {
            Ok(distance) if args.json => match serde_json::to_string(&distance) {
                Ok(json) => println!("{json}"),
                Err(e) => error!("{e}"),
            },
            Ok(distance) => info!("{:?} {:.4} m", last_time.elapsed(), distance.meters()),
            Err(e) => error!("{:?} {e}", last_time.elapsed()),
        }
        last_time = Instant::now();
    }

    if let Err(e) = finder.close() {
        error!("{e}");
    }
}
