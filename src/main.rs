//! AI Web Explorer: grounded answers with cited web sources
//!
//! Usage:
//!   web-explorer                          - Open the explorer window
//!   web-explorer search [--mode m] <q>    - Run one search and print it
//!   web-explorer help                     - Show help

mod app;
mod backend;
mod commands;
mod config;
mod error;
mod session;
mod ui;

use std::env;
use std::sync::Arc;

use app::Explorer;
use backend::api::GeminiClient;
use commands::Command;
use config::Config;
use iced::{window, Size, Task};
use session::{SearchState, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::results::{self, Presentation};

fn main() -> iced::Result {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();

    match Command::parse(&args) {
        Command::Gui => start_gui(load_client()),
        Command::Search { query, mode } => {
            let client = load_client();
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            let ok = rt.block_on(run_headless(client, query, mode));
            if !ok {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Help => {
            println!("{}", Command::help_text());
            Ok(())
        }
        Command::Invalid(reason) => {
            eprintln!("{}", reason);
            eprintln!("Run 'web-explorer help' for usage");
            std::process::exit(2);
        }
    }
}

/// Check configuration once, before any query is accepted
fn load_client() -> GeminiClient {
    match Config::from_env() {
        Ok(config) => {
            tracing::info!("Using model {} at {}", config.model, config.base_url);
            GeminiClient::new(&config)
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Drive one search through the same session the window uses
async fn run_headless(client: GeminiClient, query: String, mode: session::SearchMode) -> bool {
    let mut session = Session::new();
    session.set_mode(mode);
    session.set_query(query);

    let Some(outbound) = session.submit() else {
        return false;
    };
    let outcome = app::run_search(Arc::new(client), outbound).await;
    session.finish(outcome);

    match results::present(session.state(), session.mode()) {
        Presentation::Answer { text, sources } => {
            println!("{}", text);
            if !sources.is_empty() {
                println!("\nSources:");
                for (i, source) in sources.iter().enumerate() {
                    println!(
                        "  {}. {} ({})\n     {}",
                        i + 1,
                        results::display_title(source, "Untitled Source"),
                        results::display_host(&source.uri),
                        source.uri
                    );
                }
            }
        }
        Presentation::VideoGallery(sources) => {
            for (i, source) in sources.iter().enumerate() {
                println!(
                    "  {}. {} ({})\n     {}",
                    i + 1,
                    results::display_title(source, "Untitled Video"),
                    results::display_host(&source.uri),
                    source.uri
                );
            }
        }
        Presentation::NoVideos => println!("{}", results::NO_VIDEOS),
        Presentation::Error(message) => {
            eprintln!("{}", message);
            return false;
        }
        Presentation::Empty | Presentation::Loading | Presentation::AiPlaceholder => {}
    }

    matches!(session.state(), SearchState::Success(_))
}

fn start_gui(client: GeminiClient) -> iced::Result {
    tracing::info!("Starting AI Web Explorer...");

    iced::application("AI Web Explorer", Explorer::update, Explorer::view)
        .theme(Explorer::theme)
        .window(window::Settings {
            size: Size::new(960.0, 720.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (Explorer::new(client), Task::none()))
}
