use clap::Parser;
use clickops_detector::azure::AzCli;
use clickops_detector::cli::Args;
use clickops_detector::config;
use clickops_detector::run_analysis;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    let args = Args::parse();
    log::info!("#Start main() output={:?}", args.output);

    let az = AzCli::default();
    let stdin = std::io::stdin();
    match run_analysis(&az, &args, stdin.lock(), std::io::stdout()) {
        Ok(summary) => {
            log::info!("#End main() {:?}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("fatal: {e}");
            eprintln!("\n❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// log4rs.yml in the working directory wins; otherwise warnings go to stderr.
fn init_logging() {
    if Path::new(config::LOG_CONFIG_FILE).exists() {
        match log4rs::init_file(config::LOG_CONFIG_FILE, Default::default()) {
            Ok(()) => return,
            Err(e) => eprintln!("Error initializing log4rs from {}: {e}", config::LOG_CONFIG_FILE),
        }
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Error initializing logging: {e}");
            }
        }
        Err(e) => eprintln!("Error building logging config: {e}"),
    }
}
