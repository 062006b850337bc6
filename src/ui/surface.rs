// SPDX-License-Identifier: MPL-2.0
//! The presentation surface: a black full-screen canvas rendering exactly
//! one slide.
//!
//! Text slides render centered and word-wrapped; image slides render
//! contained, never cropped. The surface itself exposes no input - the
//! controller screen layers the keyboard contract on top of it, the mirror
//! screen nothing at all. The fade animation only modulates opacity here;
//! it never touches which slide is current.

use crate::content::Slide;
use crate::ui::design_tokens::{opacity as opacity_tokens, palette, spacing, typography};
use iced::widget::{container, image, text, Column, Container, Image, Text};
use iced::{alignment, Color, ContentFit, Element, Length, Theme};

/// Context required to render the surface.
pub struct ViewContext<'a> {
    pub slide: &'a Slide,
    /// Source title above the slide; empty hides the header (mirror mode).
    pub title: &'a str,
    /// 1-based position and total, as "n / N" below the slide; `None`
    /// hides the counter (mirror mode).
    pub position: Option<(usize, usize)>,
    /// Fade opacity in `[0, 1]`, applied to the slide content only.
    pub opacity: f32,
}

/// Renders one slide on the black canvas.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let opacity = ctx.opacity.clamp(opacity_tokens::TRANSPARENT, opacity_tokens::OPAQUE);

    let content: Element<'a, M> = match ctx.slide {
        Slide::Text(body) => Text::new(body.as_str())
            .size(typography::SLIDE)
            .align_x(alignment::Horizontal::Center)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: opacity,
                    ..palette::WHITE
                }),
            })
            .into(),
        Slide::Image(reference) => Image::new(image::Handle::from_path(reference))
            .content_fit(ContentFit::Contain)
            .opacity(opacity)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if !ctx.title.is_empty() {
        column = column.push(
            Container::new(
                Text::new(ctx.title)
                    .size(typography::TITLE_LG)
                    .align_x(alignment::Horizontal::Center)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::WHITE),
                    }),
            )
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center),
        );
    }

    column = column.push(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::XL),
    );

    if let Some((position, total)) = ctx.position {
        column = column.push(
            Container::new(
                Text::new(format!("{} / {}", position, total))
                    .size(typography::TITLE_MD)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::GRAY_200),
                    }),
            )
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center),
        );
    }

    backdrop(column.into())
}

/// The placeholder shown when nothing is presented (mirror side).
pub fn awaiting<'a, M: 'a>(heading: &'a str) -> Element<'a, M> {
    backdrop(
        Container::new(
            Text::new(heading)
                .size(typography::SLIDE)
                .align_x(alignment::Horizontal::Center)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_200),
                }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into(),
    )
}

/// Wraps content in the black full-screen canvas.
fn backdrop<'a, M: 'a>(content: Element<'a, M>) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(palette::BLACK)),
            text_color: Some(palette::WHITE),
            ..Default::default()
        })
        .into()
}
