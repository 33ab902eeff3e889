/// Catalog queries
///
/// Filtered, sorted views over the loaded catalog. These are pure
/// functions: they never mutate the catalog, and sorting returns a
/// fresh sequence. The sorted, photographer-scoped sequence produced
/// here defines the lightbox's next/prev adjacency.

use std::fmt;

use crate::state::data::{Catalog, Media, Photographer};

/// Sort criterion for a photographer's media grid
///
/// `DateDesc` is the default. Rust's `sort_by` is stable, so ties
/// keep their catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    /// Newest first
    #[default]
    DateDesc,
    /// Most liked first
    LikesDesc,
    /// Alphabetical by title, case-insensitive
    TitleAsc,
}

impl SortCriterion {
    /// All criteria, in the order the sort selector offers them
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::LikesDesc,
        SortCriterion::DateDesc,
        SortCriterion::TitleAsc,
    ];
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortCriterion::DateDesc => write!(f, "Date"),
            SortCriterion::LikesDesc => write!(f, "Popularity"),
            SortCriterion::TitleAsc => write!(f, "Title"),
        }
    }
}

/// All media belonging to one photographer, in catalog order
///
/// Catalog order is preserved so a subsequent stable sort has a
/// deterministic base.
pub fn media_for_photographer(catalog: &Catalog, photographer_id: i64) -> Vec<Media> {
    catalog
        .media
        .iter()
        .filter(|media| media.photographer_id == photographer_id)
        .cloned()
        .collect()
}

/// Sort a media sequence by the given criterion
///
/// Pure: the input is left untouched and a sorted copy is returned.
pub fn sort_media(media: &[Media], criterion: SortCriterion) -> Vec<Media> {
    let mut sorted = media.to_vec();
    match criterion {
        SortCriterion::DateDesc => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        SortCriterion::LikesDesc => sorted.sort_by(|a, b| b.likes.cmp(&a.likes)),
        SortCriterion::TitleAsc => {
            sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }
    sorted
}

/// Photographer's first name as used in the asset folder convention
///
/// First whitespace-separated token, with '-' replaced by ' '
/// ("Ellie-Rose Wilkens" -> "Ellie Rose").
fn first_name(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or_default()
        .replace('-', " ")
}

/// Path of a media file under the fixed assets convention
///
/// The path is derived by concatenation only; nothing checks that the
/// file actually exists.
pub fn media_source(photographer: &Photographer, media: &Media) -> String {
    format!("assets/{}/{}", first_name(&photographer.name), media.file_name())
}

/// Path of a photographer's portrait
pub fn portrait_source(photographer: &Photographer) -> String {
    format!("assets/photographers/{}", photographer.portrait)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::MediaKind;
    use chrono::NaiveDate;

    fn media(id: i64, photographer_id: i64, title: &str, date: &str, likes: u32) -> Media {
        Media {
            id,
            photographer_id,
            title: title.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            price: 50,
            likes,
            kind: MediaKind::Image(format!("{id}.jpg")),
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            photographers: vec![Photographer {
                id: 1,
                name: "Ellie-Rose Wilkens".to_string(),
                city: "Paris".to_string(),
                country: "France".to_string(),
                tagline: "Capturer des compositions".to_string(),
                price: 250,
                portrait: "ellie.jpg".to_string(),
            }],
            media: vec![
                media(10, 1, "Banana", "2024-01-01", 5),
                media(11, 2, "Other", "2024-01-02", 9),
                media(12, 1, "apple", "2024-03-01", 3),
                media(13, 1, "Cherry", "2024-02-01", 7),
            ],
        }
    }

    #[test]
    fn test_filter_keeps_catalog_order() {
        let sequence = media_for_photographer(&catalog(), 1);

        let ids: Vec<i64> = sequence.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![10, 12, 13]);
    }

    #[test]
    fn test_filter_unknown_photographer_is_empty() {
        let sequence = media_for_photographer(&catalog(), 99);

        assert!(sequence.is_empty());
    }

    #[test]
    fn test_sort_date_desc() {
        let input = vec![
            media(1, 1, "a", "2024-01-01", 0),
            media(2, 1, "b", "2024-03-01", 0),
            media(3, 1, "c", "2024-02-01", 0),
        ];

        let sorted = sort_media(&input, SortCriterion::DateDesc);

        let ids: Vec<i64> = sorted.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_likes_desc() {
        let sorted = sort_media(&media_for_photographer(&catalog(), 1), SortCriterion::LikesDesc);

        let likes: Vec<u32> = sorted.iter().map(|m| m.likes).collect();
        assert_eq!(likes, vec![7, 5, 3]);
    }

    #[test]
    fn test_sort_title_case_insensitive() {
        let input = vec![
            media(1, 1, "Banana", "2024-01-01", 0),
            media(2, 1, "apple", "2024-01-01", 0),
            media(3, 1, "Cherry", "2024-01-01", 0),
        ];

        let sorted = sort_media(&input, SortCriterion::TitleAsc);

        let titles: Vec<&str> = sorted.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_sort_is_stable_and_pure() {
        let input = vec![
            media(1, 1, "a", "2024-01-01", 5),
            media(2, 1, "b", "2024-01-01", 5),
            media(3, 1, "c", "2024-01-01", 5),
        ];

        let sorted = sort_media(&input, SortCriterion::LikesDesc);

        // Ties keep input order; the input itself is untouched
        let ids: Vec<i64> = sorted.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(input.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_asset_paths() {
        let catalog = catalog();
        let photographer = catalog.photographer(1).unwrap();

        assert_eq!(
            media_source(photographer, &catalog.media[0]),
            "assets/Ellie Rose/10.jpg"
        );
        assert_eq!(portrait_source(photographer), "assets/photographers/ellie.jpg");
    }
}
