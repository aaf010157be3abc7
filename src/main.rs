//! Sensor Dash - live sensor telemetry in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use sensor_dash::Args;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = sensor_dash::run(args).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
