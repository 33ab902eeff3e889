/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer. Everything here is
/// immutable after load; display-only state (likes, lightbox,
/// contact form) lives in its own modules.

use chrono::NaiveDate;

/// A photographer listed on the landing page
#[derive(Debug, Clone, PartialEq)]
pub struct Photographer {
    /// Unique catalog ID
    pub id: i64,
    /// Full name (e.g., "Ellie-Rose Wilkens")
    pub name: String,
    pub city: String,
    pub country: String,
    pub tagline: String,
    /// Day rate in euros
    pub price: u32,
    /// Portrait filename, resolved under assets/photographers/
    pub portrait: String,
}

/// The kind of a media item, holding its filename
///
/// Exactly one of image/video is set in the catalog document;
/// the loader rejects records violating that, so this enum is
/// the only representation the rest of the app ever sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Image(String),
    Video(String),
}

/// A single media item in a photographer's portfolio
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    /// Unique catalog ID
    pub id: i64,
    /// Foreign key to the owning Photographer
    pub photographer_id: i64,
    pub title: String,
    /// Publication date, used for the default sort
    pub date: NaiveDate,
    /// Price in euros
    pub price: u32,
    /// Like count as shipped in the catalog (display baseline)
    pub likes: u32,
    pub kind: MediaKind,
}

impl Media {
    /// The media filename, whatever the kind
    pub fn file_name(&self) -> &str {
        match &self.kind {
            MediaKind::Image(file) => file,
            MediaKind::Video(file) => file,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self.kind, MediaKind::Video(_))
    }
}

/// The full loaded catalog: all photographers and all media
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub photographers: Vec<Photographer>,
    pub media: Vec<Media>,
}

impl Catalog {
    /// Look up a photographer by ID
    pub fn photographer(&self, id: i64) -> Option<&Photographer> {
        self.photographers.iter().find(|p| p.id == id)
    }
}
