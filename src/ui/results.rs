//! Result presentation
//!
//! [`present`] decides what the results area shows; [`view`] draws it.

use iced::widget::{button, column, container, text, Column, Row, Space};
use iced::{Element, Length, Padding};

use super::theme::{self, DarkTheme};
use crate::backend::types::WebSource;
use crate::session::{SearchMode, SearchState};

const GALLERY_COLUMNS: usize = 3;

pub const AI_MODE_HINT: &str = "Get a direct, intelligent answer synthesized from multiple web sources. \
This mode is best for questions where you want a comprehensive summary rather than just a list of links.";
pub const NO_VIDEOS: &str = "No video results found for your query.";

/// What the results area shows for a given state and mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation<'a> {
    Empty,
    Loading,
    Error(&'a str),
    AiPlaceholder,
    VideoGallery(&'a [WebSource]),
    NoVideos,
    Answer {
        text: &'a str,
        sources: &'a [WebSource],
    },
}

pub fn present(state: &SearchState, mode: SearchMode) -> Presentation<'_> {
    match state {
        SearchState::Idle if mode == SearchMode::Ai => Presentation::AiPlaceholder,
        SearchState::Idle => Presentation::Empty,
        SearchState::Loading => Presentation::Loading,
        SearchState::Error(message) => Presentation::Error(message),
        SearchState::Success(result) if mode == SearchMode::Videos => {
            if result.sources.is_empty() {
                Presentation::NoVideos
            } else {
                Presentation::VideoGallery(&result.sources)
            }
        }
        SearchState::Success(result) => Presentation::Answer {
            text: &result.text,
            sources: &result.sources,
        },
    }
}

/// Host shown under a source link, without a leading `www.`.
///
/// Falls back to the raw string when it does not parse or has no host.
pub fn display_host(uri: &str) -> String {
    match url::Url::parse(uri) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => host.strip_prefix("www.").unwrap_or(host).to_string(),
            _ => uri.to_string(),
        },
        Err(_) => uri.to_string(),
    }
}

/// Title shown for a source, with a fallback for empty titles
pub fn display_title<'a>(source: &'a WebSource, fallback: &'a str) -> &'a str {
    if source.title.is_empty() {
        fallback
    } else {
        &source.title
    }
}

pub fn view<'a, Message: Clone + 'a>(
    presentation: Presentation<'a>,
    on_open: fn(String) -> Message,
) -> Element<'a, Message> {
    match presentation {
        Presentation::Empty => Space::with_height(0).into(),
        Presentation::Loading => centered(
            text("Searching the web...")
                .size(16)
                .color(DarkTheme::TEXT_MUTED)
                .into(),
        ),
        Presentation::Error(message) => container(text(message).color(DarkTheme::ERROR_TEXT))
            .padding(Padding::from([12.0, 16.0]))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(theme::error_banner)
            .into(),
        Presentation::AiPlaceholder => centered(
            column![
                text("AI Mode").size(20).color(DarkTheme::TEXT),
                text(AI_MODE_HINT).size(14).color(DarkTheme::TEXT_MUTED),
            ]
            .spacing(8)
            .into(),
        ),
        Presentation::NoVideos => centered(text(NO_VIDEOS).color(DarkTheme::TEXT_MUTED).into()),
        Presentation::VideoGallery(sources) => gallery(sources, on_open),
        Presentation::Answer { text: answer, sources } => {
            let mut content = Column::new().spacing(16).push(
                container(
                    column![
                        text("Answer").size(22).color(DarkTheme::PRIMARY),
                        text(answer).size(16).color(DarkTheme::TEXT),
                    ]
                    .spacing(12),
                )
                .padding(20)
                .width(Length::Fill)
                .style(theme::panel),
            );

            if !sources.is_empty() {
                content = content.push(source_list(sources, on_open));
            }

            content.into()
        }
    }
}

fn centered<'a, Message: 'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn source_list<'a, Message: Clone + 'a>(
    sources: &'a [WebSource],
    on_open: fn(String) -> Message,
) -> Element<'a, Message> {
    let items = sources.iter().map(|source| {
        let entry = column![
            text(display_title(source, "Untitled Source"))
                .size(15)
                .color(DarkTheme::TEXT),
            text(display_host(&source.uri))
                .size(12)
                .color(DarkTheme::TEXT_MUTED),
        ]
        .spacing(2);

        let element: Element<'a, Message> = button(entry)
            .on_press(on_open(source.uri.clone()))
            .style(button::text)
            .width(Length::Fill)
            .into();
        element
    });

    container(
        column![
            text("Sources").size(18).color(DarkTheme::PRIMARY),
            Column::with_children(items).spacing(6),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::panel)
    .into()
}

fn gallery<'a, Message: Clone + 'a>(
    sources: &'a [WebSource],
    on_open: fn(String) -> Message,
) -> Element<'a, Message> {
    let rows = sources.chunks(GALLERY_COLUMNS).map(|chunk| {
        let mut cards: Vec<Element<'a, Message>> = chunk
            .iter()
            .map(|source| video_card(source, on_open))
            .collect();
        while cards.len() < GALLERY_COLUMNS {
            cards.push(Space::with_width(Length::FillPortion(1)).into());
        }

        let element: Element<'a, Message> = Row::with_children(cards).spacing(16).into();
        element
    });

    Column::with_children(rows).spacing(16).into()
}

fn video_card<'a, Message: Clone + 'a>(
    source: &'a WebSource,
    on_open: fn(String) -> Message,
) -> Element<'a, Message> {
    let thumbnail = container(text("▶").size(36).color(DarkTheme::TEXT_MUTED))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .center_y(96)
        .style(theme::window);

    let card = container(
        column![
            thumbnail,
            text(display_title(source, "Untitled Video"))
                .size(15)
                .color(DarkTheme::TEXT),
            text(display_host(&source.uri))
                .size(12)
                .color(DarkTheme::TEXT_MUTED),
        ]
        .spacing(8),
    )
    .padding(12)
    .width(Length::Fill)
    .style(theme::panel);

    button(card)
        .on_press(on_open(source.uri.clone()))
        .style(button::text)
        .padding(0)
        .width(Length::FillPortion(1))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::SearchResult;

    fn source(uri: &str, title: &str) -> WebSource {
        WebSource {
            uri: uri.into(),
            title: title.into(),
        }
    }

    #[test]
    fn test_display_host_strips_www() {
        assert_eq!(display_host("https://www.example.com/page"), "example.com");
    }

    #[test]
    fn test_display_host_keeps_other_labels() {
        assert_eq!(display_host("https://docs.rs/iced"), "docs.rs");
        assert_eq!(display_host("https://www2.example.com"), "www2.example.com");
        assert_eq!(display_host("https://sub.www.example.com"), "sub.www.example.com");
    }

    #[test]
    fn test_display_host_falls_back_verbatim() {
        assert_eq!(display_host("not a url"), "not a url");
        assert_eq!(display_host(""), "");
        assert_eq!(display_host("mailto:someone@example.com"), "mailto:someone@example.com");
    }

    #[test]
    fn test_display_title_fallback() {
        assert_eq!(display_title(&source("u", ""), "Untitled Source"), "Untitled Source");
        assert_eq!(display_title(&source("u", "Dune"), "Untitled Source"), "Dune");
        assert_eq!(display_title(&source("u", "  "), "Untitled Video"), "  ");
    }

    #[test]
    fn test_ai_placeholder_before_any_result() {
        assert_eq!(present(&SearchState::Idle, SearchMode::Ai), Presentation::AiPlaceholder);
        assert_eq!(present(&SearchState::Idle, SearchMode::All), Presentation::Empty);
        assert_eq!(present(&SearchState::Idle, SearchMode::Videos), Presentation::Empty);
    }

    #[test]
    fn test_video_mode_without_sources_shows_no_results() {
        let state = SearchState::Success(SearchResult {
            text: "some text".into(),
            sources: vec![],
        });
        assert_eq!(present(&state, SearchMode::Videos), Presentation::NoVideos);
    }

    #[test]
    fn test_video_mode_hides_answer_text() {
        let sources = vec![source("https://youtube.com/watch?v=1", "Cats")];
        let state = SearchState::Success(SearchResult {
            text: "ignored".into(),
            sources: sources.clone(),
        });
        assert_eq!(
            present(&state, SearchMode::Videos),
            Presentation::VideoGallery(&sources)
        );
    }

    #[test]
    fn test_answer_with_and_without_sources() {
        let state = SearchState::Success(SearchResult {
            text: "answer".into(),
            sources: vec![],
        });
        assert_eq!(
            present(&state, SearchMode::All),
            Presentation::Answer {
                text: "answer",
                sources: &[]
            }
        );

        let state = SearchState::Success(SearchResult {
            text: "answer".into(),
            sources: vec![source("https://a.example", "A")],
        });
        match present(&state, SearchMode::Ai) {
            Presentation::Answer { text, sources } => {
                assert_eq!(text, "answer");
                assert_eq!(sources.len(), 1);
            }
            other => panic!("Expected Answer, got {:?}", other),
        }
    }

    #[test]
    fn test_loading_and_error() {
        assert_eq!(present(&SearchState::Loading, SearchMode::Ai), Presentation::Loading);
        let state = SearchState::Error("Error: boom".into());
        assert_eq!(present(&state, SearchMode::Videos), Presentation::Error("Error: boom"));
    }
}
