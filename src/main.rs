use clap::Parser;
use navbar::LayoutMode;
use navbar::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navbar", about = "Responsive navigation bar for the terminal")]
struct Args {
    /// Config file to use instead of ~/.navbar/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Force a menu surface instead of picking by terminal width
    #[arg(short, long, value_enum)]
    layout: Option<LayoutMode>,

    /// Verbosity of navbar.log (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to navbar.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("navbar.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let resolved = config::load_config(args.config.as_deref())
        .and_then(|cfg| config::resolve(&cfg, args.layout));
    let resolved = match resolved {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            eprintln!("navbar: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Navbar starting up: {} entries, layout {:?}",
        resolved.model.len(),
        resolved.layout
    );

    navbar::tui::run(resolved)
}
