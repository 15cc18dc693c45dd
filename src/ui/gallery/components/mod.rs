pub mod preview;
pub mod viewer;

pub use preview::{Preview, card};
pub use viewer::Viewer;
