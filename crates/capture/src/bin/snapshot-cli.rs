//! Snapshot CLI Tool
//!
//! Captures one device-context snapshot from the simulated platform
//! services and prints the sealed record.

use std::path::PathBuf;
use std::process;

use geoseal_capture::{capture, sim};
use geoseal_core::{logging, Config};

fn print_usage() {
    println!("Snapshot CLI - capture a sealed device-context snapshot");
    println!();
    println!("USAGE:");
    println!("    snapshot-cli [--config <file>] [--json]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>   TOML configuration (defaults applied when omitted)");
    println!("    --json            Print the snapshot as pretty JSON");
}

fn run(config_path: Option<PathBuf>, json: bool) -> Result<(), String> {
    let config = match config_path {
        Some(path) => Config::from_file(&path)
            .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?,
        None => Config::default_config(),
    };

    logging::init_from(&config.logging);

    let context = sim::simulated_context(&config.simulation);
    let snapshot = capture(&context);

    if json {
        let out = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| format!("Failed to serialize snapshot: {}", e))?;
        println!("{}", out);
    } else {
        println!(
            "Position: {}, {} (accuracy {} m)",
            snapshot.latitude, snapshot.longitude, snapshot.accuracy
        );
        println!("Provider: {}", snapshot.provider);
        println!("Timestamp: {} ms", snapshot.timestamp_ms);
        println!("Wi-Fi: {}", snapshot.wifi_info);
        println!("Cells: {}", snapshot.cell_info);
        println!("Digest: {}", snapshot.digest);
        println!("Digest verified: {}", snapshot.verify_digest());
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config_path = None;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_path = Some(PathBuf::from(&args[i]));
                }
            }
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Error: unknown argument: {}", other);
                println!();
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if let Err(e) = run(config_path, json) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
