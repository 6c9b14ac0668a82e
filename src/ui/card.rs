/// Project card: header, badges, summary, highlights, demo link and
/// the screenshot area.
use iced::font::{self, Font};
use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

use super::slider::{self, Gallery};
use crate::images::probe::is_http_url;
use crate::state::data::Project;
use crate::Message;

/// Screenshot area state for one card
#[derive(Debug, Clone)]
pub enum Screenshots {
    /// Probes still running
    Pending,
    Ready(Gallery),
    /// Nothing loaded (or nothing declared): the area is removed
    Removed,
}

/// How a project's demo recording is offered
#[derive(Debug, Clone, PartialEq)]
pub enum DemoLink<'a> {
    /// Small "Watch Demo" button under the highlights
    Button(&'a str),
    /// Prominent call to action, used when there is nothing else to look at
    CallToAction(&'a str),
}

/// Remote links always get the small button; a local recording on a
/// project without screenshots gets the call to action.
pub fn demo_link(project: &Project, has_candidates: bool) -> Option<DemoLink<'_>> {
    let video = project.video.as_deref().filter(|v| !v.trim().is_empty())?;

    if is_http_url(video) || has_candidates {
        Some(DemoLink::Button(video))
    } else {
        Some(DemoLink::CallToAction(video))
    }
}

pub fn view<'a>(
    card: usize,
    project: &'a Project,
    screenshots: Option<&'a Screenshots>,
    has_candidates: bool,
) -> Element<'a, Message> {
    let badge = if project.is_done() {
        text(format!("✅ {}", project.status)).style(text::success)
    } else {
        text(format!("🛠 {}", project.status)).style(text::primary)
    };

    let mut meta = row![badge.size(13)].spacing(12).align_y(Alignment::Center);
    if !project.tags.is_empty() {
        meta = meta.push(text(project.tags.join(" • ")).size(13).style(text::secondary));
    }

    let mut content: Column<'a, Message> = column![
        text("PROJECT").size(11).style(text::secondary),
        text(&project.title).size(24),
        meta,
        text(&project.summary).size(15),
    ]
    .spacing(10);

    if !project.highlights.is_empty() {
        let list = project
            .highlights
            .iter()
            .fold(Column::new().spacing(4), |list, h| {
                list.push(text(format!("• {}", h)).size(14))
            });
        content = content.push(column![text("HIGHLIGHTS").size(11).style(text::secondary), list].spacing(6));
    }

    match demo_link(project, has_candidates) {
        Some(DemoLink::Button(url)) => {
            content = content.push(
                button(text("Watch Demo").size(14))
                    .on_press(Message::CopyToClipboard(url.to_string())),
            );
        }
        Some(DemoLink::CallToAction(url)) => {
            content = content.push(
                container(
                    column![
                        text("🎬").size(32),
                        text("This project features a live demo recording").size(14),
                        button("Watch Full Demo Video")
                            .on_press(Message::CopyToClipboard(url.to_string())),
                    ]
                    .spacing(8)
                    .align_x(Alignment::Center),
                )
                .padding(16)
                .center_x(Length::Fill)
                .style(container::bordered_box),
            );
        }
        None => {}
    }

    if let Some(note) = project.visible_note() {
        content = content.push(
            text(note)
                .size(12)
                .style(text::secondary)
                .font(Font {
                    style: font::Style::Italic,
                    ..Font::default()
                }),
        );
    }

    match screenshots {
        Some(Screenshots::Pending) => {
            content = content.push(
                container(text("Loading screenshots…").size(13).style(text::secondary))
                    .padding(24)
                    .center_x(Length::Fill),
            );
        }
        Some(Screenshots::Ready(gallery)) => {
            content = content.push(slider::view(card, gallery));
        }
        Some(Screenshots::Removed) | None => {}
    }

    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// Shown in place of the grid when nothing matches the filters
pub fn no_matches<'a>() -> Element<'a, Message> {
    container(
        column![
            text("No matching projects").size(20),
            text("Try clearing filters or searching a different keyword.")
                .size(14)
                .style(text::secondary),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .padding(40)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(container::rounded_box)
    .into()
}

/// Shown when the project list could not be loaded
pub fn load_failed<'a>(source: String, error: &'a str) -> Element<'a, Message> {
    container(
        column![
            text("⚠️ Projects failed to load").size(20).style(text::danger),
            text(format!("Ensure projects.json exists at {}.", source)).size(14),
            text(error).size(12).style(text::secondary),
            button("Reload").on_press(Message::Reload),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .padding(40)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(container::rounded_box)
    .into()
}
