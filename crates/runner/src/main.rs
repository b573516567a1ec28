use ticksim_runner::{RunnerConfig, TickSimulation};

fn print_help() {
    eprintln!(
        r#"Ticksim - synthetic tick history generator

USAGE:
    ticksim [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Run the built-in one-minute ALEX demo
    ticksim

    # Run with config file
    ticksim --config ticksim.json

    # Trace every generated tick
    RUST_LOG=ticksim_engine=trace ticksim
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            RunnerConfig::from_file(&path)?
        }
        None => {
            log::info!("Using default configuration");
            RunnerConfig::load_default()?
        }
    };
    log::info!("Instruments: {}", config.instruments.len());
    log::info!("Output directory: {}", config.output_dir.display());

    let simulation = TickSimulation::new(config)?;
    let reports = simulation.run().await?;

    for report in &reports {
        for text in report.texts() {
            println!("{}", report.instrument_id);
            println!("{}", text);
        }
    }

    let total_ticks: usize = reports.iter().map(|r| r.tick_count()).sum();
    log::info!(
        "Done: {} instrument(s), {} ticks generated",
        reports.len(),
        total_ticks
    );
    Ok(())
}
