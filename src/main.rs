use clap::Parser;
use delay_tracker::config::file::FileConfig;
use delay_tracker::core::{panel::PanelState, timeline};
use delay_tracker::domain::model::sample_statistics;
use delay_tracker::utils::{logger, validation::Validate};
use delay_tracker::{
    CliConfig, DraftSettings, EmailDrafter, FormSession, FormState, OpenAiDrafter, TemplateDrafter,
};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting delay-tracker CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut settings = DraftSettings::from_cli(&cli);
    if let Some(path) = &cli.config {
        match FileConfig::from_path(Path::new(path)) {
            Ok(file) => settings.apply_file(&file),
            Err(e) => {
                tracing::error!("Failed to load configuration file: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(e.exit_code());
            }
        }
    }

    println!("📊 Projects Dashboard");
    for card in sample_statistics() {
        println!("   {}: {}", card.title, card.value);
    }
    println!();

    let mut session = FormSession::new();
    session.selection.project = cli.project.clone().unwrap_or_default();
    session.selection.sub_project = cli.sub_project.clone().unwrap_or_default();
    session.selection.activity = cli.activity.clone().unwrap_or_default();
    session.planned_start = cli.planned_start;
    session.actual_start = cli.actual_start;

    if session.selection.is_complete() && !session.selection.is_cataloged() {
        tracing::warn!("Selection is outside the fixed option catalogs");
    }

    if let Err(e) = session.submit() {
        tracing::error!("Submission rejected: {}", e);
        if let FormState::Editing { error: Some(message) } = session.state() {
            eprintln!("❌ {}", message);
        }
        std::process::exit(e.exit_code());
    }

    if let Some(message) = session.message() {
        println!("⚠️ {}", message);
    }

    if cli.timeline {
        if let Some(route) = session.timeline_route() {
            let (start, end) = timeline::parse_timeline_query(&route);
            println!();
            println!("🗓  Project Timeline ({})", route);
            print!("{}", timeline::render_schedule(&timeline::sample_schedule(start, end)));
        }
    }

    if cli.email {
        let drafter: Arc<dyn EmailDrafter> = if cli.offline {
            tracing::info!("Using the offline letter template");
            Arc::new(TemplateDrafter)
        } else {
            if let Err(e) = settings.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(e.exit_code());
            }
            Arc::new(OpenAiDrafter::new(settings.clone()))
        };

        println!();
        println!("✉️  Generating email...");
        match session.open_email_panel(drafter) {
            Ok(panel) => match panel.wait().await {
                PanelState::Ready(body) => {
                    println!();
                    println!("{}", body);
                }
                PanelState::Failed(message) => {
                    eprintln!("❌ Failed to generate email. Please try again. ({})", message);
                    std::process::exit(1);
                }
                PanelState::Loading => unreachable!("wait() always settles the panel"),
            },
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(e.exit_code());
            }
        }
    }

    Ok(())
}
