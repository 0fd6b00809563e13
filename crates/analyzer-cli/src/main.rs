//! Single-image lane analysis entry point
//!
//! Decodes the given image, runs the stateless analyzer and prints the
//! frame record as JSON. A decode failure prints an error object
//! instead of the record; only argument misuse exits non-zero.

use anyhow::Result;
use frame_ingest::decode_path;
use lane_pipeline::PipelineConfig;
use ride_session::analyze_frame;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: lane-analyzer <image_path>");
        std::process::exit(1);
    }

    let output = match decode_path(&args[1]) {
        Ok(frame) => {
            info!("Analyzing {} ({}x{})", args[1], frame.width, frame.height);
            let analysis = analyze_frame(&frame, 0, &PipelineConfig::default());
            serde_json::to_string_pretty(&analysis)?
        }
        Err(e) => serde_json::to_string_pretty(&serde_json::json!({ "error": e.to_string() }))?,
    };

    println!("{output}");
    Ok(())
}
