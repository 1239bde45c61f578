//! Search bar widget

use iced::widget::{button, container, row, text, text_input};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::DarkTheme;

/// Search bar component.
///
/// While `enabled` is false the input and button accept nothing.
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
    enabled: bool,
) -> Element<'a, Message> {
    let mut input = text_input("Ask anything...", value)
        .padding(Padding::new(14.0))
        .size(18)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(iced::Color::TRANSPARENT),
            border: Border::default(),
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::PRIMARY,
        });

    let mut submit = button(text("Search").size(16)).padding(Padding::from([10.0, 18.0]));

    if enabled {
        input = input.on_input(on_input).on_submit(on_submit.clone());
        submit = submit.on_press(on_submit);
    }

    container(row![input, submit].spacing(8).align_y(iced::Alignment::Center))
        .padding(Padding::from([4.0, 8.0]))
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::SURFACE)),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 24.0.into(),
            },
            ..Default::default()
        })
        .into()
}
