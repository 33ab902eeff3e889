/// UI widgets module
///
/// Pure view functions mapping application state to widget trees:
/// - Photographer and media cards (cards.rs)
/// - The lightbox overlay (lightbox.rs)
/// - The contact modal (contact.rs)
///
/// Every function here is re-invoked wholesale on each state change;
/// nothing holds widget state of its own.

pub mod cards;
pub mod contact;
pub mod lightbox;
