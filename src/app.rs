//! Core application state and Iced Application implementation
//!
//! Uses the Iced 0.13 API. All search logic lives in [`Session`]; this
//! module wires it to widgets and to the Gemini client.

use std::sync::Arc;

use iced::widget::{column, container, scrollable, text, Space};
use iced::{Element, Length, Task, Theme};

use crate::backend::api::GeminiClient;
use crate::backend::types::SearchResult;
use crate::error::Failure;
use crate::session::{SearchMode, Session};
use crate::ui::theme::{self, DarkTheme};
use crate::ui::{modes, results, search_bar};

// ============================================================================
// Application State
// ============================================================================

pub struct Explorer {
    session: Session,
    client: Arc<GeminiClient>,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    ModeSelected(SearchMode),
    SearchFinished(Result<SearchResult, Failure>),
    OpenSource(String),
}

impl Explorer {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            session: Session::new(),
            client: Arc::new(client),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.session.set_query(query);
                Task::none()
            }

            Message::Submit => match self.session.submit() {
                Some(query) => {
                    tracing::info!("Starting {} search", self.session.mode());
                    Task::perform(
                        run_search(self.client.clone(), query),
                        Message::SearchFinished,
                    )
                }
                None => Task::none(),
            },

            Message::ModeSelected(mode) => {
                self.session.set_mode(mode);
                Task::none()
            }

            Message::SearchFinished(outcome) => {
                if let Err(ref failure) = outcome {
                    tracing::warn!("Search failed: {}", failure.display_message());
                }
                self.session.finish(outcome);
                Task::none()
            }

            Message::OpenSource(uri) => {
                if let Err(e) = open::that(&uri) {
                    tracing::warn!("Could not open {}: {}", uri, e);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let enabled = !self.session.is_loading();

        let header = column![
            text("AI Web Explorer").size(30).color(DarkTheme::TEXT),
            text("Your intelligent gateway to the web. Get direct answers, not just links.")
                .size(15)
                .color(DarkTheme::TEXT_MUTED),
        ]
        .spacing(8)
        .align_x(iced::Alignment::Center);

        let presentation = results::present(self.session.state(), self.session.mode());

        let content = column![
            container(header).width(Length::Fill).center_x(Length::Fill),
            Space::with_height(24),
            search_bar::view(
                self.session.query(),
                Message::QueryChanged,
                Message::Submit,
                enabled,
            ),
            Space::with_height(12),
            modes::view(self.session.mode(), enabled, Message::ModeSelected),
            Space::with_height(24),
            results::view(presentation, Message::OpenSource),
            Space::with_height(24),
            container(text("Powered by Gemini API").size(12).color(DarkTheme::TEXT_MUTED))
                .width(Length::Fill)
                .center_x(Length::Fill),
        ]
        .max_width(900);

        container(scrollable(
            container(content)
                .padding(24)
                .width(Length::Fill)
                .center_x(Length::Fill),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::window)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Run one search on its own task so a panic surfaces as a failure.
pub async fn run_search(client: Arc<GeminiClient>, query: String) -> Result<SearchResult, Failure> {
    match tokio::spawn(async move { client.search(&query).await }).await {
        Ok(outcome) => outcome.map_err(Failure::from),
        Err(e) => {
            tracing::error!("Search task aborted: {}", e);
            Err(Failure::Unexpected)
        }
    }
}
