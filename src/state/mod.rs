/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The lightbox viewer session and navigation (lightbox.rs)
/// - Like counters for the media cards (likes.rs)
/// - The contact form and its field validation (contact.rs)

pub mod contact;
pub mod data;
pub mod lightbox;
pub mod likes;
