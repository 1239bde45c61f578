//! Mode selector: three mutually exclusive buttons

use iced::widget::{button, container, text, Row};
use iced::{Element, Length, Padding, Theme};

use crate::session::SearchMode;

pub fn view<'a, Message: Clone + 'a>(
    active: SearchMode,
    enabled: bool,
    on_select: fn(SearchMode) -> Message,
) -> Element<'a, Message> {
    let buttons = SearchMode::ALL.into_iter().map(|mode| {
        let style: fn(&Theme, button::Status) -> button::Style = if mode == active {
            button::primary
        } else {
            button::secondary
        };

        let mut b = button(text(mode.label()).size(14))
            .padding(Padding::from([8.0, 16.0]))
            .style(style);
        if enabled {
            b = b.on_press(on_select(mode));
        }
        let element: Element<'a, Message> = b.into();
        element
    });

    container(Row::with_children(buttons).spacing(8))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
