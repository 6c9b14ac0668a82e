use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, image, row, text};
use iced::{Alignment, Color, ContentFit, Element, Length};

use crate::state::viewer::Lightbox;
use crate::{LightboxAction, Message};

/// Full-window image overlay. Replaces the gallery while open.
pub fn view<'a>(lightbox: &'a Lightbox, handle: Option<&'a Handle>) -> Element<'a, Message> {
    let src = lightbox.current_src().unwrap_or_default();

    let picture: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => text("Image unavailable").size(16).into(),
    };

    let mut toolbar = row![
        text(src).size(13),
        horizontal_space(),
        button("Copy path").on_press(Message::CopyToClipboard(src.to_string())),
        button("Close")
            .style(button::secondary)
            .on_press(Message::Lightbox(LightboxAction::Close)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    if lightbox.has_navigation() {
        toolbar = toolbar.push(text(lightbox.counter()).size(14));
    }

    let stage: Element<'a, Message> = if lightbox.has_navigation() {
        row![
            button(text("‹").size(32)).on_press_maybe(
                (!lightbox.is_first()).then_some(Message::Lightbox(LightboxAction::Prev))
            ),
            container(picture).width(Length::Fill).height(Length::Fill).center(Length::Fill),
            button(text("›").size(32)).on_press_maybe(
                (!lightbox.is_last()).then_some(Message::Lightbox(LightboxAction::Next))
            ),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    } else {
        container(picture).width(Length::Fill).height(Length::Fill).center(Length::Fill).into()
    };

    container(column![toolbar, stage].spacing(16))
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.92).into()),
            ..container::Style::default()
        })
        .into()
}
