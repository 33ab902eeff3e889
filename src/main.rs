use clap::Parser;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, opaque, pick_list,
    row, scrollable, stack, text,
};
use iced::{Alignment, Color, Element, Length, Subscription, Task, Theme};
use iced_aw::Wrap;

// Declare the application modules
mod catalog;
mod state;
mod ui;

use catalog::loader::{self, CatalogError};
use catalog::query::{self, SortCriterion};
use state::contact::{ContactForm, Field};
use state::data::{Catalog, Media, Photographer};
use state::lightbox::{Direction, Lightbox};
use state::likes::LikeBoard;

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "lightfolio", about = "A native photographer portfolio browser")]
struct Args {
    /// Open directly on this photographer's portfolio page
    #[arg(long)]
    photographer: Option<i64>,
}

/// Which page is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Landing,
    Photographer(i64),
}

/// Main application state
struct Portfolio {
    /// The catalog, cached after the one-time load
    catalog: Option<Catalog>,
    page: Page,
    /// Photographer requested on the command line, applied once the
    /// catalog arrives
    requested_id: Option<i64>,
    /// Active sort criterion for the media grid
    criterion: SortCriterion,
    /// Like counters for the current detail page
    likes: LikeBoard,
    lightbox: Lightbox,
    contact_open: bool,
    contact: ContactForm,
    /// Status message shown while the catalog is unavailable
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The one-time catalog load finished
    CatalogLoaded(Result<Catalog, CatalogError>),
    /// A landing-page card was activated
    OpenPhotographer(i64),
    BackToLanding,
    SortChanged(SortCriterion),
    /// A media thumbnail was activated
    OpenLightbox(i64),
    /// Lightbox next/prev, from the controls or the arrow keys
    Navigate(Direction),
    CloseLightbox,
    ToggleLike(i64),
    OpenContact,
    CloseContact,
    ContactEdited(Field, String),
    ContactSubmitted,
    /// Escape closes whichever overlay is on top
    EscapePressed,
}

impl Portfolio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let args = Args::parse();

        println!("📷 Lightfolio starting, loading {}", loader::CATALOG_PATH);

        let portfolio = Portfolio {
            catalog: None,
            page: Page::Landing,
            requested_id: args.photographer,
            criterion: SortCriterion::default(),
            likes: LikeBoard::default(),
            lightbox: Lightbox::default(),
            contact_open: false,
            contact: ContactForm::default(),
            status: "Loading the catalog...".to_string(),
        };

        (
            portfolio,
            Task::perform(
                loader::load_catalog(loader::CATALOG_PATH.to_string()),
                Message::CatalogLoaded,
            ),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                println!(
                    "📖 Catalog loaded: {} photographers, {} media",
                    catalog.photographers.len(),
                    catalog.media.len()
                );
                self.catalog = Some(catalog);
                self.status = String::new();

                // Apply the --photographer launch flag now that the data
                // is here; an unknown id lands on the landing page
                if let Some(id) = self.requested_id.take() {
                    self.enter_photographer(id);
                }
            }
            Message::CatalogLoaded(Err(e)) => {
                eprintln!("❌ {e}");
                self.status = "The catalog could not be loaded.".to_string();
                self.requested_id = None;
            }
            Message::OpenPhotographer(id) => {
                self.enter_photographer(id);
            }
            Message::BackToLanding => {
                self.page = Page::Landing;
                self.lightbox.close();
                self.contact_open = false;
            }
            Message::SortChanged(criterion) => {
                self.criterion = criterion;
            }
            Message::OpenLightbox(media_id) => {
                self.lightbox.open(media_id);
            }
            Message::Navigate(direction) => {
                // Adjacency always comes from the current sorted, filtered
                // sequence, re-derived from the cached catalog
                let sequence = self.current_sequence();
                if let Lightbox::Open(session) = &mut self.lightbox {
                    if let Err(e) = session.advance(&sequence, direction) {
                        eprintln!("⚠️  Lightbox navigation failed: {e}");
                    }
                }
            }
            Message::CloseLightbox => {
                self.lightbox.close();
            }
            Message::ToggleLike(media_id) => {
                self.likes.toggle(media_id);
            }
            Message::OpenContact => {
                self.contact_open = true;
            }
            Message::CloseContact => {
                self.contact_open = false;
            }
            Message::ContactEdited(field, value) => {
                self.contact.set(field, value);
            }
            Message::ContactSubmitted => {
                println!(
                    "First name: {}\nLast name: {}\nEmail: {}\nMessage: {}",
                    self.contact.first_name,
                    self.contact.last_name,
                    self.contact.email,
                    self.contact.message
                );
                if self.contact.submit() {
                    println!("✅ The form is valid");
                    self.contact_open = false;
                    self.contact.reset();
                } else {
                    eprintln!("⚠️  The form is not valid");
                }
            }
            Message::EscapePressed => {
                if self.lightbox.is_open() {
                    self.lightbox.close();
                } else {
                    self.contact_open = false;
                }
            }
        }

        Task::none()
    }

    /// Switch to a photographer's detail page
    ///
    /// Seeds the like board from their media and resets the sort to
    /// its default. An unknown id falls back to the landing page.
    fn enter_photographer(&mut self, id: i64) {
        let Some(catalog) = &self.catalog else {
            return;
        };

        if catalog.photographer(id).is_none() {
            eprintln!("⚠️  No photographer with id {id}, showing the landing page");
            self.page = Page::Landing;
            return;
        }

        self.likes = LikeBoard::seed(&query::media_for_photographer(catalog, id));
        self.criterion = SortCriterion::default();
        self.lightbox.close();
        self.contact_open = false;
        self.page = Page::Photographer(id);
    }

    /// The current sorted, filtered media sequence for the active page
    fn current_sequence(&self) -> Vec<Media> {
        match (self.page, &self.catalog) {
            (Page::Photographer(id), Some(catalog)) => {
                query::sort_media(&query::media_for_photographer(catalog, id), self.criterion)
            }
            _ => Vec::new(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match self.page {
            Page::Landing => self.landing_view(),
            Page::Photographer(id) => {
                match self
                    .catalog
                    .as_ref()
                    .and_then(|catalog| catalog.photographer(id).map(|p| (catalog, p)))
                {
                    Some((catalog, photographer)) => self.detail_view(catalog, photographer),
                    None => self.landing_view(),
                }
            }
        };

        let mut layers: Vec<Element<'_, Message>> = vec![scrollable(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()];

        // Overlays re-render wholesale from state on every transition
        if let (Lightbox::Open(session), Some(catalog)) = (&self.lightbox, self.catalog.as_ref())
        {
            let shown = catalog
                .media
                .iter()
                .find(|media| media.id == session.current_media_id())
                .and_then(|media| {
                    catalog
                        .photographer(media.photographer_id)
                        .map(|photographer| (photographer, media))
                });
            if let Some((photographer, media)) = shown {
                layers.push(opaque(
                    center(ui::lightbox::overlay(photographer, media)).style(dim_backdrop),
                ));
            }
        }

        if self.contact_open {
            if let (Page::Photographer(id), Some(catalog)) = (self.page, self.catalog.as_ref()) {
                if let Some(photographer) = catalog.photographer(id) {
                    let panel = container(ui::contact::modal(photographer, &self.contact))
                        .style(container::rounded_box);
                    layers.push(opaque(
                        mouse_area(center(opaque(panel)).style(dim_backdrop))
                            .on_press(Message::CloseContact),
                    ));
                }
            }
        }

        stack(layers).into()
    }

    /// The landing page: all photographer cards
    fn landing_view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match &self.catalog {
            Some(catalog) => Wrap::with_elements(
                catalog
                    .photographers
                    .iter()
                    .map(ui::cards::photographer_card)
                    .collect(),
            )
            .spacing(24.0)
            .line_spacing(24.0)
            .into(),
            // Load failure renders the section empty, with the status line
            None => text(&self.status).size(16).into(),
        };

        column![
            text("Lightfolio").size(44),
            text("Our photographers").size(28),
            body,
        ]
        .spacing(25)
        .padding(30)
        .into()
    }

    /// A photographer's detail page: header, sortable media grid and
    /// the aggregate likes banner
    fn detail_view<'a>(
        &'a self,
        catalog: &'a Catalog,
        photographer: &'a Photographer,
    ) -> Element<'a, Message> {
        let sequence = query::sort_media(
            &query::media_for_photographer(catalog, photographer.id),
            self.criterion,
        );

        let header = row![
            column![
                text(&photographer.name).size(40),
                text(format!("{}, {}", photographer.city, photographer.country)).size(16),
                text(&photographer.tagline).size(14),
            ]
            .spacing(4),
            horizontal_space(),
            button(text("Contact me").size(18))
                .on_press(Message::OpenContact)
                .padding([10.0, 20.0]),
            image(image::Handle::from_path(query::portrait_source(photographer)))
                .width(160)
                .height(160),
        ]
        .spacing(30)
        .align_y(Alignment::Center);

        let sort_row = row![
            text("Sort by").size(16),
            pick_list(SortCriterion::ALL, Some(self.criterion), Message::SortChanged),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let grid = Wrap::with_elements(
            sequence
                .iter()
                .map(|media| ui::cards::media_card(photographer, media, &self.likes))
                .collect(),
        )
        .spacing(24.0)
        .line_spacing(24.0);

        let banner = container(
            row![
                text(format!("{} ♥", self.likes.total())).size(18),
                text(format!("{}€ / day", photographer.price)).size(18),
            ]
            .spacing(30),
        )
        .padding(12)
        .style(container::rounded_box);

        column![
            button(text("← Back").size(14))
                .on_press(Message::BackToLanding)
                .style(button::text),
            header,
            sort_row,
            grid,
            banner,
        ]
        .spacing(25)
        .padding(30)
        .into()
    }

    /// Keyboard navigation, scoped to the overlays' lifetime
    ///
    /// The listener exists exactly while the lightbox session (or the
    /// contact modal) is alive and fires for every key press.
    fn subscription(&self) -> Subscription<Message> {
        if self.lightbox.is_open() || self.contact_open {
            keyboard::on_key_press(handle_key)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Map overlay key presses to messages
fn handle_key(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(Named::ArrowRight) => Some(Message::Navigate(Direction::Next)),
        Key::Named(Named::ArrowLeft) => Some(Message::Navigate(Direction::Prev)),
        Key::Named(Named::Escape) => Some(Message::EscapePressed),
        _ => None,
    }
}

/// Semi-transparent backdrop behind the overlays
fn dim_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.85, ..Color::BLACK }.into()),
        ..container::Style::default()
    }
}

fn main() -> iced::Result {
    iced::application("Lightfolio", Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .centered()
        .run_with(Portfolio::new)
}
