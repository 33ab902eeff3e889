/// Catalog document loader
///
/// This module reads the photographer/media catalog from its JSON
/// document and validates it into the typed data model. The document
/// is loaded once per run; there is no retry. Failures are surfaced
/// to the caller, which either renders an empty landing page or
/// falls back to it from a detail launch.

use serde::Deserialize;
use thiserror::Error;

use crate::state::data::{Catalog, Media, MediaKind, Photographer};

/// Fixed relative path of the catalog document
pub const CATALOG_PATH: &str = "data/photographers.json";

/// Errors raised while loading the catalog
///
/// `Fetch` covers I/O failures reading the document; `Data` covers a
/// document that parses as JSON but violates the catalog schema,
/// including a media record that does not carry exactly one of
/// image/video.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("failed to read catalog at {path}: {reason}")]
    Fetch { path: String, reason: String },
    #[error("malformed catalog: {0}")]
    Data(String),
}

/// Wire format of the catalog document (`{photographers, media}`)
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    photographers: Vec<PhotographerRecord>,
    media: Vec<MediaRecord>,
}

#[derive(Debug, Deserialize)]
struct PhotographerRecord {
    id: i64,
    name: String,
    city: String,
    country: String,
    tagline: String,
    price: u32,
    portrait: String,
}

/// Raw media record: image/video arrive as two optional fields,
/// validated into a single `MediaKind` below
#[derive(Debug, Deserialize)]
struct MediaRecord {
    id: i64,
    #[serde(rename = "photographerId")]
    photographer_id: i64,
    title: String,
    image: Option<String>,
    video: Option<String>,
    likes: u32,
    date: String,
    price: u32,
}

/// Load and validate the catalog document
///
/// The one suspending operation in the application; awaited once at
/// startup and never again.
pub async fn load_catalog(path: String) -> Result<Catalog, CatalogError> {
    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| CatalogError::Fetch {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    parse_catalog(&text)
}

/// Parse and validate a catalog document from its JSON text
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument =
        serde_json::from_str(text).map_err(|e| CatalogError::Data(e.to_string()))?;

    let photographers = document
        .photographers
        .into_iter()
        .map(|record| Photographer {
            id: record.id,
            name: record.name,
            city: record.city,
            country: record.country,
            tagline: record.tagline,
            price: record.price,
            portrait: record.portrait,
        })
        .collect();

    let media = document
        .media
        .into_iter()
        .map(media_from_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog {
        photographers,
        media,
    })
}

/// Validate one media record: exactly one of image/video must be set,
/// and the date must be a valid ISO date
fn media_from_record(record: MediaRecord) -> Result<Media, CatalogError> {
    let kind = match (record.image, record.video) {
        (Some(file), None) => MediaKind::Image(file),
        (None, Some(file)) => MediaKind::Video(file),
        (Some(_), Some(_)) => {
            return Err(CatalogError::Data(format!(
                "media {} has both an image and a video",
                record.id
            )))
        }
        (None, None) => {
            return Err(CatalogError::Data(format!(
                "media {} has neither an image nor a video",
                record.id
            )))
        }
    };

    let date = chrono::NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|e| {
        CatalogError::Data(format!("media {} has a bad date {:?}: {}", record.id, record.date, e))
    })?;

    Ok(Media {
        id: record.id,
        photographer_id: record.photographer_id,
        title: record.title,
        date,
        price: record.price,
        likes: record.likes,
        kind,
    })
}
