/// Lightbox viewer state machine
///
/// The lightbox is either `Closed` or `Open` with an ephemeral
/// session tracking which media is displayed. Navigation is computed
/// against the *current* sorted, filtered media sequence, which the
/// page controller re-derives from the cached catalog on every step,
/// so the session never holds a stale ordering.
///
/// Traversal is circular in both directions: advancing past the last
/// item wraps to the first and vice versa. There is no end-of-sequence
/// condition.

use thiserror::Error;

use crate::state::data::Media;

/// Navigation direction through the media sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Raised when the displayed media cannot be found in the sequence
///
/// Under the session invariant this cannot happen; if it does, the
/// operation is abandoned and the session is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigateError {
    #[error("media {0} is not in the current sequence")]
    NotFound(i64),
}

/// Ephemeral per-open state: which media the overlay is showing
///
/// Created on open, discarded on close, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current_media_id: i64,
}

impl Session {
    pub fn current_media_id(&self) -> i64 {
        self.current_media_id
    }

    /// Step to the adjacent media in the sequence, wrapping circularly
    ///
    /// Locates the current media by linear scan, then moves one step:
    /// index -1 maps to len-1 and index len maps to 0. On success the
    /// session tracks the new media and its ID is returned; on a
    /// failed lookup the session is unchanged.
    pub fn advance(
        &mut self,
        sequence: &[Media],
        direction: Direction,
    ) -> Result<i64, NavigateError> {
        let index = sequence
            .iter()
            .position(|media| media.id == self.current_media_id)
            .ok_or(NavigateError::NotFound(self.current_media_id))?;

        let last = sequence.len() - 1;
        let target = match direction {
            Direction::Next if index == last => 0,
            Direction::Next => index + 1,
            Direction::Prev if index == 0 => last,
            Direction::Prev => index - 1,
        };

        self.current_media_id = sequence[target].id;
        Ok(self.current_media_id)
    }
}

/// The two lightbox states
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(Session),
}

impl Lightbox {
    /// Open the overlay on the given media
    pub fn open(&mut self, media_id: i64) {
        *self = Lightbox::Open(Session {
            current_media_id: media_id,
        });
    }

    /// Discard the session and close the overlay
    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::MediaKind;
    use chrono::NaiveDate;

    fn sequence(ids: &[i64]) -> Vec<Media> {
        ids.iter()
            .map(|&id| Media {
                id,
                photographer_id: 1,
                title: format!("media {id}"),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                price: 10,
                likes: 0,
                kind: MediaKind::Image(format!("{id}.jpg")),
            })
            .collect()
    }

    fn open_on(media_id: i64) -> Session {
        let mut lightbox = Lightbox::default();
        lightbox.open(media_id);
        match lightbox {
            Lightbox::Open(session) => session,
            Lightbox::Closed => unreachable!(),
        }
    }

    #[test]
    fn test_next_then_prev_returns_to_start() {
        let sequence = sequence(&[3, 5, 7]);

        for start in [3, 5, 7] {
            let mut session = open_on(start);
            session.advance(&sequence, Direction::Next).unwrap();
            session.advance(&sequence, Direction::Prev).unwrap();
            assert_eq!(session.current_media_id(), start);
        }
    }

    #[test]
    fn test_next_wraps_circularly() {
        let sequence = sequence(&[3, 5, 7]);
        let mut session = open_on(5);

        assert_eq!(session.advance(&sequence, Direction::Next), Ok(7));
        assert_eq!(session.advance(&sequence, Direction::Next), Ok(3));
    }

    #[test]
    fn test_prev_wraps_from_first_to_last() {
        let sequence = sequence(&[3, 5, 7]);
        let mut session = open_on(3);

        assert_eq!(session.advance(&sequence, Direction::Prev), Ok(7));
    }

    #[test]
    fn test_full_cycle_returns_to_every_start() {
        let sequence = sequence(&[1, 2, 3, 4, 5]);

        for start in [1, 2, 3, 4, 5] {
            let mut session = open_on(start);
            for _ in 0..sequence.len() {
                session.advance(&sequence, Direction::Next).unwrap();
            }
            assert_eq!(session.current_media_id(), start);
        }
    }

    #[test]
    fn test_single_item_sequence_stays_put() {
        let sequence = sequence(&[42]);
        let mut session = open_on(42);

        assert_eq!(session.advance(&sequence, Direction::Next), Ok(42));
        assert_eq!(session.advance(&sequence, Direction::Prev), Ok(42));
    }

    #[test]
    fn test_missing_media_leaves_session_unchanged() {
        let sequence = sequence(&[3, 5, 7]);
        let mut session = open_on(99);

        let result = session.advance(&sequence, Direction::Next);

        assert_eq!(result, Err(NavigateError::NotFound(99)));
        assert_eq!(session.current_media_id(), 99);
    }

    #[test]
    fn test_close_from_any_open_state() {
        let sequence = sequence(&[3, 5, 7]);
        let mut lightbox = Lightbox::default();
        lightbox.open(3);

        if let Lightbox::Open(session) = &mut lightbox {
            session.advance(&sequence, Direction::Next).unwrap();
            session.advance(&sequence, Direction::Next).unwrap();
        }

        lightbox.close();
        assert_eq!(lightbox, Lightbox::Closed);
        assert!(!lightbox.is_open());
    }
}
