/// Card widgets for the landing and detail grids

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use crate::catalog::query;
use crate::state::data::{Media, Photographer};
use crate::state::likes::LikeBoard;
use crate::Message;

/// A landing-page photographer card: portrait, name, location,
/// tagline and day rate; clicking it opens the detail page
pub fn photographer_card(photographer: &Photographer) -> Element<'_, Message> {
    let portrait = image(image::Handle::from_path(query::portrait_source(photographer)))
        .width(200)
        .height(200);

    let card = column![
        portrait,
        text(&photographer.name).size(28),
        text(format!("{}, {}", photographer.city, photographer.country)).size(14),
        text(&photographer.tagline).size(13),
        text(format!("{}€/day", photographer.price)).size(12),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    button(card)
        .on_press(Message::OpenPhotographer(photographer.id))
        .style(button::text)
        .padding(15)
        .into()
}

/// A detail-page media card: thumbnail, title and like counter
///
/// Activating the thumbnail opens the lightbox on this media; the
/// heart toggles the like. Lightbox adjacency never comes from the
/// card's grid position, only from the sorted sequence.
pub fn media_card<'a>(
    photographer: &'a Photographer,
    media: &Media,
    likes: &LikeBoard,
) -> Element<'a, Message> {
    // The card only keeps owned copies of the media's fields; the
    // sorted sequence it came from is rebuilt on every render
    let thumbnail: Element<'a, Message> = if media.is_video() {
        // No inline video decode; the grid shows a play marker
        container(text("▶").size(44))
            .center_x(300)
            .center_y(220)
            .style(container::rounded_box)
            .into()
    } else {
        image(image::Handle::from_path(query::media_source(photographer, media)))
            .width(300)
            .height(220)
            .into()
    };

    let heart = if likes.is_liked(media.id) { "♥" } else { "♡" };
    let like_row = button(row![text(likes.count(media.id).to_string()).size(14), text(heart).size(14)].spacing(4))
        .on_press(Message::ToggleLike(media.id))
        .style(button::text)
        .padding(0);

    let caption = row![
        text(media.title.clone()).size(16).width(Length::Fill),
        like_row,
    ]
    .width(300)
    .align_y(Alignment::Center);

    column![
        button(thumbnail)
            .on_press(Message::OpenLightbox(media.id))
            .style(button::text)
            .padding(0),
        caption,
    ]
    .spacing(4)
    .into()
}
