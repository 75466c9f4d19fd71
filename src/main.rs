mod api;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "mushaf", about = "Terminal Quran chapter browser")]
struct Args {
    /// Translation edition for verse text (e.g. "en.asad")
    #[arg(short, long)]
    edition: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to mushaf.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("mushaf.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match core::config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };
    let resolved = core::config::resolve(&config, args.edition.as_deref());

    log::info!(
        "Mushaf starting up (edition: {}, base_url: {})",
        resolved.edition,
        resolved.base_url
    );

    tui::run(resolved)
}
