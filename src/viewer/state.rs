//! Overlay state machine
//!
//! `Closed` until a full-size image is clicked, then `Open` with that
//! image's source. Re-opening replaces the source; closing twice is a no-op.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewerState {
    #[default]
    Closed,
    Open { src: String },
}

impl ViewerState {
    pub fn open(&mut self, src: impl Into<String>) {
        *self = ViewerState::Open { src: src.into() };
    }

    /// Returns true when this call changed the state
    pub fn close(&mut self) -> bool {
        match self {
            ViewerState::Closed => false,
            ViewerState::Open { .. } => {
                *self = ViewerState::Closed;
                true
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ViewerState::Open { .. })
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            ViewerState::Open { src } => Some(src),
            ViewerState::Closed => None,
        }
    }
}

/// Thumbnails carry `marker` in their source path and never open the viewer
pub fn is_thumbnail(src: &str, marker: &str) -> bool {
    !marker.is_empty() && src.contains(marker)
}
