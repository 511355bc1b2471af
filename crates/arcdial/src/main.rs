use anyhow::Context;
use arcdial::config;
use arcdial::gui::app::AppModel;
use arcdial::sys::runtime;
use clap::Parser;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial progress value, overriding the configured one
    #[arg(short, long)]
    progress: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut dial_config = match args.config.as_deref() {
        Some(path) => config::load_config(Some(path))
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => {
            if let Ok(path) = config::write_default_config() {
                log::info!("Config file: {}", path.display());
            }
            config::load_or_default()
        }
    };
    if let Some(progress) = args.progress {
        dial_config.arc.progress = progress;
    }

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.arcdial.arcdial");
    app.run::<AppModel>((dial_config, rx));

    Ok(())
}
