/// State management module
///
/// This module handles all application state, including:
/// - The projects.json data model (data.rs)
/// - Loading and filtering the project list (catalog.rs)
/// - Slider, swipe and lightbox navigation (viewer.rs)

pub mod catalog;
pub mod data;
pub mod viewer;
