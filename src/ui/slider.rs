/// Screenshot slider shown on a project card
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, mouse_area, row, text, Row};
use iced::{Alignment, ContentFit, Element, Length};

use crate::images::ResolvedImage;
use crate::state::viewer::{Gesture, Slider, SwipeGesture};
use crate::{Message, SlideAction};

/// Height of the slide area in logical pixels
const SLIDE_HEIGHT: f32 = 320.0;

/// A card's resolved screenshots plus its own navigation state
#[derive(Debug, Clone)]
pub struct Gallery {
    pub images: Vec<ResolvedImage<Handle>>,
    pub slider: Slider,
    pub swipe: SwipeGesture,
}

/// What the app should do after a slider event
#[derive(Debug, Clone, PartialEq)]
pub enum SlideOutcome {
    None,
    /// A tap on the current slide: open the lightbox on it
    OpenLightbox(String),
}

impl Gallery {
    pub fn new(images: Vec<ResolvedImage<Handle>>) -> Self {
        let slider = Slider::new(images.len());
        Self {
            images,
            slider,
            swipe: SwipeGesture::default(),
        }
    }

    pub fn srcs(&self) -> Vec<String> {
        self.images.iter().map(|i| i.src.clone()).collect()
    }

    pub fn handle_for(&self, src: &str) -> Option<&Handle> {
        self.images.iter().find(|i| i.src == src).map(|i| &i.image)
    }

    /// Apply a slider event to this card's state
    pub fn apply(&mut self, action: SlideAction, swipe_threshold: f32) -> SlideOutcome {
        match action {
            SlideAction::Prev => self.slider.prev(),
            SlideAction::Next => self.slider.next(),
            SlideAction::Goto(index) => self.slider.goto(index),
            SlideAction::PointerMoved(x) => self.swipe.track(x),
            SlideAction::Pressed => self.swipe.press(),
            SlideAction::Exited => self.swipe.cancel(),
            SlideAction::Released => match self.swipe.finish(swipe_threshold) {
                Some(Gesture::Next) => self.slider.next(),
                Some(Gesture::Prev) => self.slider.prev(),
                Some(Gesture::Tap) => {
                    if let Some(current) = self.images.get(self.slider.current()) {
                        return SlideOutcome::OpenLightbox(current.src.clone());
                    }
                }
                None => {}
            },
        }
        SlideOutcome::None
    }
}

/// Render the slider for the card at `card` in the catalog
pub fn view(card: usize, gallery: &Gallery) -> Element<'_, Message> {
    let slider = &gallery.slider;
    let Some(current) = gallery.images.get(slider.current()) else {
        return column![].into();
    };

    let slide = mouse_area(
        image(current.image.clone())
            .width(Length::Fill)
            .height(Length::Fixed(SLIDE_HEIGHT))
            .content_fit(ContentFit::Contain),
    )
    .on_enter(Message::CardFocused(card))
    .on_press(slide_message(card, SlideAction::Pressed))
    .on_release(slide_message(card, SlideAction::Released))
    .on_exit(slide_message(card, SlideAction::Exited))
    .on_move(move |point| slide_message(card, SlideAction::PointerMoved(point.x)));

    if !slider.has_controls() {
        return column![slide, text("🔍 Click to enlarge").size(12)]
            .spacing(6)
            .align_x(Alignment::Center)
            .into();
    }

    let prev = button(text("‹").size(28))
        .on_press_maybe((!slider.is_first()).then(|| slide_message(card, SlideAction::Prev)))
        .style(button::secondary);
    let next = button(text("›").size(28))
        .on_press_maybe((!slider.is_last()).then(|| slide_message(card, SlideAction::Next)))
        .style(button::secondary);

    let stage = row![prev, slide, next]
        .spacing(8)
        .align_y(Alignment::Center);

    let dots: Row<Message> = gallery
        .images
        .iter()
        .enumerate()
        .fold(Row::new().spacing(4), |dots, (index, _)| {
            let glyph = if index == slider.current() { "●" } else { "○" };
            dots.push(
                button(text(glyph).size(12))
                    .padding(2)
                    .style(button::text)
                    .on_press(slide_message(card, SlideAction::Goto(index))),
            )
        });

    column![
        stage,
        container(dots).center_x(Length::Fill),
        row![
            text(slider.counter()).size(13),
            text("🔍 Click to enlarge").size(12),
        ]
        .spacing(16),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .into()
}

fn slide_message(card: usize, action: SlideAction) -> Message {
    Message::Slide { card, action }
}
