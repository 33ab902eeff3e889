/// Contact modal view
///
/// The form fields with their validation feedback: after a submit
/// attempt, invalid fields carry a red border and an error line,
/// valid ones a green border.

use iced::widget::{button, column, text, text_input};
use iced::{Color, Element};

use crate::state::contact::{ContactForm, Field};
use crate::state::data::Photographer;
use crate::Message;

const ERROR_RED: Color = Color::from_rgb(0.565, 0.110, 0.110);
const VALID_GREEN: Color = Color::from_rgb(0.153, 0.620, 0.478);

/// One labelled input with its validation border and error line
fn field<'a>(
    label: &'a str,
    value: &'a str,
    form: &ContactForm,
    which: Field,
) -> Element<'a, Message> {
    let error = form.error_for(which);
    let confirmed = form.is_confirmed(which);

    let input = text_input(label, value)
        .on_input(move |v| Message::ContactEdited(which, v))
        .padding(8)
        .style(move |theme, status| {
            let mut style = text_input::default(theme, status);
            if error.is_some() {
                style.border.color = ERROR_RED;
                style.border.width = 2.0;
            } else if confirmed {
                style.border.color = VALID_GREEN;
                style.border.width = 2.0;
            }
            style
        });

    let mut block = column![text(label).size(14), input].spacing(4);
    if let Some(message) = error {
        block = block.push(text(message).size(12).color(ERROR_RED));
    }
    block.into()
}

/// The contact modal for one photographer
pub fn modal<'a>(photographer: &'a Photographer, form: &'a ContactForm) -> Element<'a, Message> {
    let header = column![
        text("Contact me").size(30),
        text(&photographer.name).size(30),
    ]
    .spacing(2);

    column![
        header,
        field("First name", &form.first_name, form, Field::FirstName),
        field("Last name", &form.last_name, form, Field::LastName),
        field("Email", &form.email, form, Field::Email),
        field("Message", &form.message, form, Field::Message),
        button(text("Send").size(18))
            .on_press(Message::ContactSubmitted)
            .padding([8.0, 30.0]),
        button(text("Close").size(14))
            .on_press(Message::CloseContact)
            .style(button::text),
    ]
    .spacing(14)
    .padding(30)
    .width(480)
    .into()
}
