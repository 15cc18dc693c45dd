//! Listing, decoding and splash timing. Nothing in here knows about iced.

pub mod image_data;
pub mod lister;
pub mod splash;

pub use image_data::{Error, Id, ImageData, Rgba, Size};
pub use lister::{Category, ImageReference, list_images};
pub use splash::{SplashEvent, SplashSchedule, SplashSequence, SplashTimers};
