use chrono::Datelike;
use iced::keyboard::{self, key};
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use iced_aw::Wrap;
use log::{info, warn};
use rfd::FileDialog;
use std::collections::HashMap;
use std::sync::Arc;

mod config;
mod error;
mod images;
mod state;
mod ui;

use config::{DataSource, Settings};
use images::{build_image_candidates, has_image_candidates, resolve, ResolvedImage, SiteProbe};
use state::catalog::{load_projects, Catalog, Filter};
use state::data::Project;
use state::viewer::Lightbox;
use ui::card::Screenshots;
use ui::slider::{Gallery, SlideOutcome};

/// Where the project list is in its lifecycle
#[derive(Debug, Clone)]
enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Main application state
struct Portfolio {
    settings: Settings,
    /// The loaded project list
    catalog: Catalog,
    load_state: LoadState,
    filter: Filter,
    /// Bumped on every (re)load so results of an older load are ignored
    generation: u64,
    /// Screenshot state per card, keyed by catalog position
    screenshots: HashMap<usize, Screenshots>,
    lightbox: Lightbox,
    /// Card whose images the lightbox is showing
    lightbox_owner: Option<usize>,
    /// Card whose slider the arrow keys drive while the lightbox is closed
    focused_card: Option<usize>,
    /// Status message to display to the user
    status: String,
}

/// Slider events, routed to the card that emitted them
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideAction {
    Prev,
    Next,
    Goto(usize),
    PointerMoved(f32),
    Pressed,
    Released,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Prev,
    Next,
    Close,
}

/// Navigation keys, routed to the open lightbox or else the focused slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyNav {
    Prev,
    Next,
    Close,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Re-read the current data source
    Reload,
    /// User clicked "Open…" to pick another projects.json
    OpenFile,
    /// Background load finished for the given generation
    ProjectsLoaded(u64, Result<Vec<Project>, String>),
    /// Screenshot resolution finished for one card
    ImagesResolved {
        generation: u64,
        card: usize,
        images: Vec<ResolvedImage<iced::widget::image::Handle>>,
    },
    SearchChanged(String),
    TagSelected(String),
    Slide { card: usize, action: SlideAction },
    /// Pointer entered a card's slider
    CardFocused(usize),
    Lightbox(LightboxAction),
    KeyPressed(KeyNav),
    CopyToClipboard(String),
}

impl Portfolio {
    /// Create a new instance of the application and start loading projects
    fn new(settings: Settings) -> (Self, Task<Message>) {
        info!("🎨 Portfolio viewer starting with {}", settings.source.describe());

        let mut portfolio = Portfolio {
            settings,
            catalog: Catalog::default(),
            load_state: LoadState::Loading,
            filter: Filter::default(),
            generation: 0,
            screenshots: HashMap::new(),
            lightbox: Lightbox::default(),
            lightbox_owner: None,
            focused_card: None,
            status: String::from("Loading projects..."),
        };

        let task = portfolio.reload();
        (portfolio, task)
    }

    /// Start a fresh load of the data source
    fn reload(&mut self) -> Task<Message> {
        self.generation += 1;
        self.load_state = LoadState::Loading;
        self.screenshots.clear();
        self.focused_card = None;
        self.close_lightbox();

        let generation = self.generation;
        Task::perform(load_projects(self.settings.source.clone()), move |result| {
            Message::ProjectsLoaded(generation, result.map_err(|e| e.to_string()))
        })
    }

    /// Kick off screenshot resolution for every project in the catalog
    fn resolve_screenshots(&mut self) -> Task<Message> {
        let probe = match SiteProbe::new(self.settings.source.site_root()) {
            Ok(probe) => Arc::new(probe),
            Err(e) => {
                warn!("⚠️  Screenshot probing disabled: {}", e);
                for card in 0..self.catalog.len() {
                    self.screenshots.insert(card, Screenshots::Removed);
                }
                return Task::none();
            }
        };

        let mut tasks = Vec::new();
        for (card, project) in self.catalog.projects().iter().enumerate() {
            let candidates = build_image_candidates(project);

            if candidates.is_empty() {
                self.screenshots.insert(card, Screenshots::Removed);
                continue;
            }

            self.screenshots.insert(card, Screenshots::Pending);

            let generation = self.generation;
            tasks.push(Task::perform(
                resolve(
                    Arc::clone(&probe),
                    candidates,
                    self.settings.order_policy,
                    self.settings.probe_timeout,
                ),
                move |images| Message::ImagesResolved {
                    generation,
                    card,
                    images,
                },
            ));
        }

        Task::batch(tasks)
    }

    fn close_lightbox(&mut self) {
        self.lightbox.close();
        self.lightbox_owner = None;
    }

    fn gallery(&self, card: usize) -> Option<&Gallery> {
        match self.screenshots.get(&card) {
            Some(Screenshots::Ready(gallery)) => Some(gallery),
            _ => None,
        }
    }

    /// Apply a slider event to one card, opening the lightbox on a tap
    fn slide(&mut self, card: usize, action: SlideAction) {
        let threshold = self.settings.swipe_threshold;
        let Some(Screenshots::Ready(gallery)) = self.screenshots.get_mut(&card) else {
            return;
        };

        if let SlideOutcome::OpenLightbox(src) = gallery.apply(action, threshold) {
            let all = gallery.srcs();
            self.lightbox.open(&src, &all);
            self.lightbox_owner = Some(card);
        }
    }

    /// Arrow keys and Escape act on the open lightbox; otherwise the
    /// arrows move the focused card's slider
    fn navigate(&mut self, key: KeyNav) {
        if self.lightbox.is_open() {
            match key {
                KeyNav::Prev => self.lightbox.prev(),
                KeyNav::Next => self.lightbox.next(),
                KeyNav::Close => self.close_lightbox(),
            }
            return;
        }

        let Some(card) = self.focused_card else {
            return;
        };
        match key {
            KeyNav::Prev => self.slide(card, SlideAction::Prev),
            KeyNav::Next => self.slide(card, SlideAction::Next),
            KeyNav::Close => {}
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Reload => {
                self.status = format!("Reloading {}...", self.settings.source.describe());
                self.reload()
            }
            Message::OpenFile => {
                let file = FileDialog::new()
                    .set_title("Open projects.json")
                    .add_filter("JSON", &["json"])
                    .pick_file();

                match file {
                    Some(path) => {
                        self.settings.source = DataSource::File(path);
                        self.filter = Filter::default();
                        self.status = format!("Loading {}...", self.settings.source.describe());
                        self.reload()
                    }
                    None => Task::none(),
                }
            }
            Message::ProjectsLoaded(generation, result) => {
                if generation != self.generation {
                    return Task::none();
                }

                match result {
                    Ok(projects) => {
                        self.catalog = Catalog::new(projects);
                        self.load_state = LoadState::Loaded;
                        if !self.catalog.unique_tags().contains(&self.filter.tag) {
                            self.filter.tag = Filter::default().tag;
                        }
                        self.status = format!(
                            "Ready. {} projects from {}.",
                            self.catalog.len(),
                            self.settings.source.describe()
                        );
                        self.resolve_screenshots()
                    }
                    Err(e) => {
                        warn!("⚠️  Projects failed to load: {}", e);
                        self.catalog = Catalog::default();
                        self.load_state = LoadState::Failed(e);
                        self.status = String::from("Projects failed to load.");
                        Task::none()
                    }
                }
            }
            Message::ImagesResolved {
                generation,
                card,
                images,
            } => {
                if generation != self.generation {
                    return Task::none();
                }

                let title = self
                    .catalog
                    .projects()
                    .get(card)
                    .map(|p| p.title.as_str())
                    .unwrap_or_default();
                info!("📸 {}: {} screenshots", title, images.len());

                let screenshots = if images.is_empty() {
                    Screenshots::Removed
                } else {
                    Screenshots::Ready(Gallery::new(images))
                };
                self.screenshots.insert(card, screenshots);
                Task::none()
            }
            Message::SearchChanged(query) => {
                self.filter.query = query;
                self.focused_card = None;
                Task::none()
            }
            Message::TagSelected(tag) => {
                self.filter.tag = tag;
                self.focused_card = None;
                Task::none()
            }
            Message::Slide { card, action } => {
                self.focused_card = Some(card);
                self.slide(card, action);
                Task::none()
            }
            Message::CardFocused(card) => {
                self.focused_card = Some(card);
                Task::none()
            }
            Message::Lightbox(action) => {
                match action {
                    LightboxAction::Prev => self.lightbox.prev(),
                    LightboxAction::Next => self.lightbox.next(),
                    LightboxAction::Close => self.close_lightbox(),
                }
                Task::none()
            }
            Message::KeyPressed(key) => {
                self.navigate(key);
                Task::none()
            }
            Message::CopyToClipboard(contents) => {
                self.status = format!("📋 Copied to clipboard: {}", contents);
                iced::clipboard::write(contents)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        if self.lightbox.is_open() {
            let handle = self.lightbox_owner.and_then(|owner| {
                let src = self.lightbox.current_src()?;
                self.gallery(owner)?.handle_for(src)
            });
            return ui::lightbox::view(&self.lightbox, handle);
        }

        let header = row![
            column![
                text("Projects").size(36),
                text("Things I have built and shipped").size(14).style(text::secondary),
            ]
            .spacing(4)
            .width(Length::Fill),
            button("Open…").on_press(Message::OpenFile),
            button("Reload").style(button::secondary).on_press(Message::Reload),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let body: Element<Message> = match &self.load_state {
            LoadState::Loading => container(text("Loading projects...").size(16))
                .padding(40)
                .center_x(Length::Fill)
                .into(),
            LoadState::Failed(error) => {
                ui::card::load_failed(self.settings.source.describe(), error)
            }
            LoadState::Loaded => self.gallery_view(),
        };

        let footer = text(format!(
            "© {}  ·  {}",
            chrono::Local::now().year(),
            self.status
        ))
        .size(12)
        .style(text::secondary);

        let content = column![header, body, footer]
            .spacing(20)
            .padding(32)
            .max_width(1100);

        scrollable(container(content).center_x(Length::Fill))
            .height(Length::Fill)
            .into()
    }

    /// Search box, tag chips and the filtered project cards
    fn gallery_view(&self) -> Element<Message> {
        let search = text_input("Search projects...", &self.filter.query)
            .on_input(Message::SearchChanged)
            .padding(10);

        let chips: Vec<Element<Message>> = self
            .catalog
            .unique_tags()
            .into_iter()
            .map(|tag| {
                let style = if tag == self.filter.tag {
                    button::primary
                } else {
                    button::secondary
                };
                button(text(tag.clone()).size(13))
                    .style(style)
                    .on_press(Message::TagSelected(tag))
                    .into()
            })
            .collect();

        let cards: Vec<Element<Message>> = self
            .catalog
            .filtered(&self.filter)
            .map(|(card, project)| {
                ui::card::view(
                    card,
                    project,
                    self.screenshots.get(&card),
                    has_image_candidates(project),
                )
            })
            .collect();

        let grid: Element<Message> = if cards.is_empty() {
            ui::card::no_matches()
        } else {
            Column::with_children(cards).spacing(18).into()
        };

        column![
            search,
            Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0),
            grid,
        ]
        .spacing(16)
        .into()
    }

    /// Keyboard navigation for the lightbox and the focused slider
    fn subscription(&self) -> Subscription<Message> {
        if !self.lightbox.is_open() && self.focused_card.is_none() {
            return Subscription::none();
        }

        keyboard::on_key_press(|pressed, _modifiers| match pressed.as_ref() {
            keyboard::Key::Named(key::Named::ArrowLeft) => {
                Some(Message::KeyPressed(KeyNav::Prev))
            }
            keyboard::Key::Named(key::Named::ArrowRight) => {
                Some(Message::KeyPressed(KeyNav::Next))
            }
            keyboard::Key::Named(key::Named::Escape) => {
                Some(Message::KeyPressed(KeyNav::Close))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::init();

    let settings = Settings::from_args(std::env::args().skip(1));

    iced::application("Portfolio", Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .centered()
        .run_with(move || Portfolio::new(settings))
}
