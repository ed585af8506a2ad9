use clap::Parser;
use games_hub::{
    catalog::{CatalogClient, CatalogSource},
    cli::{Cli, Commands},
    config::Config,
    filter,
    gui::HubApp,
    state::NO_RESULTS_MESSAGE,
    Result,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging so its level can apply
    let mut config = Config::load()?;
    if let Some(catalog) = cli.catalog {
        config.catalog = catalog;
    }

    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::debug!("Configuration loaded, catalog source: {}", config.catalog);

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => run_gui(config),

        Commands::List { query } => {
            let client = CatalogClient::new(Duration::from_secs(config.request_timeout_secs))?;
            let catalog = match client.fetch(&CatalogSource::parse(&config.catalog)).await {
                Ok(catalog) => catalog,
                Err(e) => {
                    eprintln!("Failed to load games list: {}", e);
                    std::process::exit(1);
                }
            };

            let view = filter::filter(catalog.entries(), query.as_deref().unwrap_or(""));
            if view.is_empty() {
                println!("{}", NO_RESULTS_MESSAGE);
            } else {
                println!("Games:");
                println!("======");
                for game in view.iter() {
                    println!("  {} - {}", game.id, game.title);
                    println!("    {}", game.url);
                }
            }
        }

        Commands::Status => {
            println!("Games Hub Status");
            println!("================");
            println!();
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Configuration:");
            println!("  Catalog: {}", CatalogSource::parse(&config.catalog));
            println!("  Log Level: {}", config.log_level);
            println!("  Request Timeout: {}s", config.request_timeout_secs);
            println!();

            if let Ok(config_path) = Config::config_path() {
                println!("Config Path: {:?}", config_path);
            }
        }
    }

    Ok(())
}

fn run_gui(config: Config) {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Games Hub"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Games Hub",
        native_options,
        Box::new(move |cc| Ok(Box::new(HubApp::new(cc, &config)))),
    ) {
        eprintln!("Failed to run GUI: {}", e);
        std::process::exit(1);
    }
}
