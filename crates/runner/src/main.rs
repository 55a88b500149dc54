use std::path::PathBuf;

use minibook_runner::{load_book, load_orders, replay};

fn print_help() {
    eprintln!(
        r#"Minibook Runner - replay an order stream through a limit order book

USAGE:
    minibook-runner [OPTIONS] --orders <PATH>

OPTIONS:
    --config <PATH>     Load engine configuration from JSON file
    --orders <PATH>     JSON array of order requests to replay
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Replay against an empty book
    minibook-runner --orders orders.json

    # Replay against a seeded, heap-backed book
    minibook-runner --config engine.json --orders orders.json
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<PathBuf> = None;
    let mut orders_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--config" | "-c" => config_path = Some(path_arg(&args, &mut i, "--config")),
            "--orders" | "-o" => orders_path = Some(path_arg(&args, &mut i, "--orders")),
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(orders_path) = orders_path else {
        eprintln!("Error: --orders is required");
        print_help();
        std::process::exit(1);
    };

    if let Err(err) = run(config_path, orders_path) {
        log::error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn path_arg(args: &[String], i: &mut usize, flag: &str) -> PathBuf {
    *i += 1;
    match args.get(*i) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Error: {} requires a path argument", flag);
            std::process::exit(1);
        }
    }
}

fn run(config_path: Option<PathBuf>, orders_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut book = load_book(config_path.as_deref())?;
    log::info!("Book storage: {}", book.storage_name());

    let requests = load_orders(&orders_path)?;
    log::info!("Replaying {} requests from {}", requests.len(), orders_path.display());

    let report = replay(&mut book, requests);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
