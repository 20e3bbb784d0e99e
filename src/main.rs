mod bootstrap;

use depmap_events::{AppEvent, EventBus};
use crate::bootstrap::{cli::Cli, config, logging, pipeline};
use anyhow::Result;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize();

    let events = EventBus::new(cli.quiet);
    let config = config::load(cli.config.as_deref(), &events).await?;

    let Err(e) = pipeline::run(&cli, &config, &events).await else {
        return Ok(());
    };
    let Some(code) = pipeline::exit_code_for(&e) else {
        return Err(e);
    };

    events.emit(AppEvent::Error {
        context: "POM parsing".to_string(),
        error: e.to_string(),
    });
    events.emit(AppEvent::PomUnparseable {
        pom: cli.pom_path.trim().to_string(),
        bug_tracker: config.output.bug_tracker_url.clone(),
    });
    std::process::exit(code);
}
