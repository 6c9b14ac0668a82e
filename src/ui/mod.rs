/// User interface building blocks
///
/// - Project cards and the empty/error cards (card.rs)
/// - Per-card screenshot slider (slider.rs)
/// - Full-window lightbox (lightbox.rs)

pub mod card;
pub mod lightbox;
pub mod slider;
