// SPDX-License-Identifier: MPL-2.0
//! The atomic unit of presented content.

use serde::{Deserialize, Serialize};

/// One slide as shown on a presentation surface: either a block of text or a
/// reference to an image, never both.
///
/// Slides cross the process boundary inside the live session document, hence
/// the serde derives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slide {
    /// A block of text, rendered centered and word-wrapped.
    Text(String),
    /// An opaque reference (path or URL) to a bitmap, rendered contained.
    Image(String),
}

impl Slide {
    /// Returns the text payload, if this is a text slide.
    pub fn text(&self) -> Option<&str> {
        match self {
            Slide::Text(text) => Some(text),
            Slide::Image(_) => None,
        }
    }

    /// Returns the image reference, if this is an image slide.
    pub fn image_ref(&self) -> Option<&str> {
        match self {
            Slide::Text(_) => None,
            Slide::Image(reference) => Some(reference),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_slide_exposes_only_text() {
        let slide = Slide::Text("Amazing grace".into());
        assert_eq!(slide.text(), Some("Amazing grace"));
        assert_eq!(slide.image_ref(), None);
    }

    #[test]
    fn image_slide_exposes_only_reference() {
        let slide = Slide::Image("banners/easter.png".into());
        assert_eq!(slide.text(), None);
        assert_eq!(slide.image_ref(), Some("banners/easter.png"));
    }
}
