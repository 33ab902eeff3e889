/// Lightbox overlay view
///
/// Renders the full-screen overlay for the media the session is
/// showing: close/next/prev controls around the media and its title.
/// The whole tree is rebuilt from the session state on every
/// navigation step.

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Color, Element};

use crate::catalog::query;
use crate::state::data::{Media, Photographer};
use crate::state::lightbox::Direction;
use crate::Message;

/// The overlay content for one media item
pub fn overlay<'a>(photographer: &'a Photographer, media: &'a Media) -> Element<'a, Message> {
    let close = button(text("✕").size(28))
        .on_press(Message::CloseLightbox)
        .style(button::text);

    let prev = button(text("❮").size(36))
        .on_press(Message::Navigate(Direction::Prev))
        .style(button::text);

    let next = button(text("❯").size(36))
        .on_press(Message::Navigate(Direction::Next))
        .style(button::text);

    let content: Element<'a, Message> = if media.is_video() {
        // Caption-track label and fallback line are presentational only
        column![
            container(text("▶").size(72))
                .center_x(760)
                .center_y(500)
                .style(container::rounded_box),
            text("English captions").size(12),
            text("This viewer does not support video playback.").size(12),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .into()
    } else {
        image(image::Handle::from_path(query::media_source(photographer, media)))
            .width(760)
            .height(500)
            .into()
    };

    let viewer = column![content, text(&media.title).size(22)]
        .spacing(10)
        .align_x(Alignment::Center);

    let panel = row![
        prev,
        viewer,
        column![close, next].spacing(180).align_x(Alignment::End),
    ]
    .spacing(20)
    .align_y(Alignment::Center);

    container(panel)
        .padding(30)
        .style(|_theme| container::Style {
            background: Some(Color { a: 0.92, ..Color::BLACK }.into()),
            ..container::Style::default()
        })
        .into()
}
