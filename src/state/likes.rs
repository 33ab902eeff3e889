/// Like counters for the media grid
///
/// Each media card carries a boolean "liked" flag (default false,
/// never persisted) and a displayed count. Toggling a card adjusts
/// its count and the page-level aggregate in lockstep. The board is
/// re-seeded from the catalog every time a detail page is entered.

use std::collections::HashMap;

use crate::state::data::Media;

#[derive(Debug, Clone)]
struct LikeEntry {
    liked: bool,
    count: u32,
}

/// Per-page like state: one entry per media card plus the aggregate
#[derive(Debug, Clone, Default)]
pub struct LikeBoard {
    entries: HashMap<i64, LikeEntry>,
    total: u32,
}

impl LikeBoard {
    /// Seed the board from a photographer's media
    ///
    /// Counts start at the catalog's like values, all cards unliked.
    pub fn seed(media: &[Media]) -> Self {
        let entries = media
            .iter()
            .map(|m| {
                (
                    m.id,
                    LikeEntry {
                        liked: false,
                        count: m.likes,
                    },
                )
            })
            .collect();
        let total = media.iter().map(|m| m.likes).sum();

        LikeBoard { entries, total }
    }

    /// Flip a card's liked flag, adjusting card count and aggregate
    /// in lockstep; returns the new liked state
    pub fn toggle(&mut self, media_id: i64) -> bool {
        let Some(entry) = self.entries.get_mut(&media_id) else {
            // A card exists only for a seeded media, so this is unreachable
            // from the UI; ignore rather than invent an entry
            return false;
        };

        if entry.liked {
            entry.liked = false;
            entry.count -= 1;
            self.total -= 1;
        } else {
            entry.liked = true;
            entry.count += 1;
            self.total += 1;
        }

        entry.liked
    }

    /// Displayed like count for one card
    pub fn count(&self, media_id: i64) -> u32 {
        self.entries.get(&media_id).map_or(0, |entry| entry.count)
    }

    pub fn is_liked(&self, media_id: i64) -> bool {
        self.entries.get(&media_id).is_some_and(|entry| entry.liked)
    }

    /// Page-level aggregate like count
    pub fn total(&self) -> u32 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::MediaKind;
    use chrono::NaiveDate;

    fn media(id: i64, likes: u32) -> Media {
        Media {
            id,
            photographer_id: 1,
            title: format!("media {id}"),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            price: 10,
            likes,
            kind: MediaKind::Image(format!("{id}.jpg")),
        }
    }

    #[test]
    fn test_seed_totals_catalog_likes() {
        let board = LikeBoard::seed(&[media(1, 10), media(2, 20), media(3, 5)]);

        assert_eq!(board.total(), 35);
        assert_eq!(board.count(2), 20);
        assert!(!board.is_liked(2));
    }

    #[test]
    fn test_toggle_adjusts_card_and_aggregate_in_lockstep() {
        let mut board = LikeBoard::seed(&[media(1, 10), media(2, 20)]);

        assert!(board.toggle(1));
        assert_eq!(board.count(1), 11);
        assert_eq!(board.total(), 31);

        assert!(!board.toggle(1));
        assert_eq!(board.count(1), 10);
        assert_eq!(board.total(), 30);
    }

    #[test]
    fn test_toggle_unknown_media_is_ignored() {
        let mut board = LikeBoard::seed(&[media(1, 10)]);

        assert!(!board.toggle(99));
        assert_eq!(board.total(), 10);
    }
}
