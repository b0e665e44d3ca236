//! Image Viewer
//!
//! - `state`: open/closed overlay state and thumbnail detection
//! - `gallery`: per-gallery shown-image index with bounded prev/next

pub mod state;
pub mod gallery;

pub use state::{is_thumbnail, ViewerState};
pub use gallery::{Gallery, GalleryRegistry, Step, Toggle};
