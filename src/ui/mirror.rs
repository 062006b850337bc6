// SPDX-License-Identifier: MPL-2.0
//! The mirror screen: the subscriber side of the live channel.
//!
//! Strictly a display - it renders whatever slide the shared document last
//! held and nothing else. No navigation input, no chrome beyond the
//! awaiting placeholder; F11 fullscreen is handled by the application
//! shell, not here.

use crate::content::Slide;
use crate::ui::surface;
use iced::Element;

/// Heading shown before the first slide goes live and after close.
pub const AWAITING_HEADING: &str = "Awaiting presentation";

pub struct ViewContext<'a> {
    /// The last slide observed in the shared document, if any.
    pub current_slide: Option<&'a Slide>,
}

pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    match ctx.current_slide {
        Some(slide) => surface::view(surface::ViewContext {
            slide,
            title: "",
            position: None,
            opacity: 1.0,
        }),
        None => surface::awaiting(AWAITING_HEADING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_placeholder_without_a_slide() {
        let _element: Element<'_, ()> = view(ViewContext {
            current_slide: None,
        });
    }

    #[test]
    fn renders_the_observed_slide() {
        let slide = Slide::Text("Verse one".into());
        let _element: Element<'_, ()> = view(ViewContext {
            current_slide: Some(&slide),
        });
    }
}
