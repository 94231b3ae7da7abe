//! Data models shared across the simulator front-ends

use serde::{Deserialize, Serialize};

/// A photo handed over by an image source (picker or camera).
///
/// The engine never inspects or validates `uri`; it is passed through
/// unchanged to whichever surface displays the image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedImage {
    /// Opaque resource locator for the picked or captured photo
    pub uri: String,

    /// Pixel width reported by the source
    pub width: u32,

    /// Pixel height reported by the source
    pub height: u32,
}
