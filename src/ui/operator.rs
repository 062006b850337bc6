// SPDX-License-Identifier: MPL-2.0
//! The operator screen: library tabs on the left, the playlist panel on the
//! right.
//!
//! Everything an operator does before and between presentations happens
//! here - searching the hymnal, picking a passage, typing a custom slide,
//! curating the playlist and toggling the live session. Activating an item
//! switches the application to the full-screen presenter.

use crate::library::{Bible, CatalogKind, Hymnal, SlideCatalog};
use crate::playlist::{ItemId, Playlist, PlaylistItem};
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{
    button, container, pick_list, scrollable, text, text_editor, text_input, Column, Container,
    Row, Text,
};
use iced::{alignment, Element, Length, Theme};
use std::fmt;

/// Library tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Hymnal,
    Bible,
    Slides,
}

/// Messages emitted by the operator screen.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    HymnQueryChanged(String),
    AddHymn(u32),
    BookSelected(String),
    ChapterInputChanged(String),
    VerseInputChanged(String),
    /// Add only the selected verse.
    AddVerse,
    /// Add the whole chapter, starting at the selected verse.
    AddChapter,
    FreeTextAction(text_editor::Action),
    AddFreeText,
    AddCatalogSlide(usize),
    /// Open the file dialog for an image slide.
    PickImageSlide,
    RemoveItem(ItemId),
    PresentItem(ItemId),
    ToggleLive,
}

/// Operator screen state: tab selection and the library input fields.
/// The playlist, presenter and live session live on the application root.
pub struct State {
    pub active_tab: Tab,
    pub hymn_query: String,
    /// Selected book, by display name (the pick list's item type).
    pub selected_book: Option<String>,
    pub chapter_input: String,
    pub verse_input: String,
    pub free_text: text_editor::Content,
}

impl State {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Hymnal,
            hymn_query: String::new(),
            selected_book: None,
            chapter_input: String::from("1"),
            verse_input: String::from("1"),
            free_text: text_editor::Content::new(),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("active_tab", &self.active_tab)
            .field("selected_book", &self.selected_book)
            .finish()
    }
}

/// Context required to render the operator screen.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub hymnal: &'a Hymnal,
    pub bible: &'a Bible,
    pub catalog: &'a SlideCatalog,
    pub playlist: &'a Playlist,
    pub live: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let library = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(tab_bar(ctx.state.active_tab))
        .push(match ctx.state.active_tab {
            Tab::Hymnal => hymnal_tab(ctx.state, ctx.hymnal),
            Tab::Bible => bible_tab(ctx.state, ctx.bible),
            Tab::Slides => slides_tab(ctx.state, ctx.catalog),
        });

    let playlist_panel = playlist_panel(ctx.playlist, ctx.live);

    Row::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(Container::new(library).width(Length::Fill).height(Length::Fill))
        .push(
            Container::new(playlist_panel)
                .width(Length::Fixed(sizing::PLAYLIST_WIDTH))
                .height(Length::Fill)
                .style(panel_style),
        )
        .into()
}

fn tab_bar<'a>(active: Tab) -> Element<'a, Message> {
    let tab = |label: &'a str, tab: Tab| {
        button(Text::new(label).size(typography::BODY))
            .on_press(Message::TabSelected(tab))
            .padding([spacing::XS, spacing::MD])
            .style(move |theme: &Theme, status| tab_button_style(theme, status, tab == active))
    };

    Row::new()
        .spacing(spacing::XS)
        .push(tab("Hymnal", Tab::Hymnal))
        .push(tab("Bible", Tab::Bible))
        .push(tab("Slides", Tab::Slides))
        .into()
}

fn hymnal_tab<'a>(state: &'a State, hymnal: &'a Hymnal) -> Element<'a, Message> {
    let search = text_input("Search by number or title...", &state.hymn_query)
        .on_input(Message::HymnQueryChanged)
        .padding(spacing::XS);

    let mut list = Column::new().spacing(spacing::XS);
    for hymn in hymnal.search(&state.hymn_query) {
        list = list.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    Text::new(format!("{} - {}", hymn.number, hymn.title))
                        .size(typography::BODY)
                        .width(Length::Fill),
                )
                .push(button(Text::new("Add").size(typography::BODY)).on_press(Message::AddHymn(hymn.number))),
        );
    }

    Column::new()
        .spacing(spacing::MD)
        .push(search)
        .push(scrollable(list).height(Length::Fill))
        .into()
}

fn bible_tab<'a>(state: &'a State, bible: &'a Bible) -> Element<'a, Message> {
    let book_names: Vec<String> = bible.books().iter().map(|book| book.name.clone()).collect();

    let book_picker = pick_list(
        book_names,
        state.selected_book.clone(),
        Message::BookSelected,
    )
    .placeholder("Choose a book...")
    .width(Length::Fill);

    let chapter_input = text_input("Chapter", &state.chapter_input)
        .on_input(Message::ChapterInputChanged)
        .padding(spacing::XS)
        .width(Length::Fixed(90.0));

    let verse_input = text_input("Verse", &state.verse_input)
        .on_input(Message::VerseInputChanged)
        .padding(spacing::XS)
        .width(Length::Fixed(90.0));

    let reference_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("Chapter").size(typography::BODY))
        .push(chapter_input)
        .push(Text::new("Verse").size(typography::BODY))
        .push(verse_input);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(button(Text::new("Add verse").size(typography::BODY)).on_press(Message::AddVerse))
        .push(
            button(Text::new("Add whole chapter").size(typography::BODY))
                .on_press(Message::AddChapter),
        );

    let hint = Text::new("Adding the whole chapter starts presentation at the selected verse.")
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    Column::new()
        .spacing(spacing::MD)
        .push(book_picker)
        .push(reference_row)
        .push(actions)
        .push(hint)
        .into()
}

fn slides_tab<'a>(state: &'a State, catalog: &'a SlideCatalog) -> Element<'a, Message> {
    let editor = text_editor(&state.free_text)
        .on_action(Message::FreeTextAction)
        .placeholder("Type the slide text; separate slides with a blank line...")
        .height(Length::Fixed(140.0));

    let add_custom = button(Text::new("Add custom slide").size(typography::BODY))
        .on_press(Message::AddFreeText);

    let add_image = button(Text::new("Add image slide...").size(typography::BODY))
        .on_press(Message::PickImageSlide);

    let mut catalog_list = Column::new().spacing(spacing::XS);
    for (index, entry) in catalog.entries().iter().enumerate() {
        let summary = match entry.kind {
            CatalogKind::Text => entry.content.lines().next().unwrap_or("").to_string(),
            CatalogKind::Image => String::from("Image slide"),
        };
        catalog_list = catalog_list.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    Column::new()
                        .push(Text::new(entry.title.as_str()).size(typography::BODY))
                        .push(Text::new(summary).size(typography::CAPTION).style(
                            |theme: &Theme| text::Style {
                                color: Some(theme.extended_palette().background.strong.text),
                            },
                        ))
                        .width(Length::Fill),
                )
                .push(
                    button(Text::new("Add").size(typography::BODY))
                        .on_press(Message::AddCatalogSlide(index)),
                ),
        );
    }

    Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Custom slide").size(typography::TITLE_MD))
        .push(editor)
        .push(Row::new().spacing(spacing::SM).push(add_custom).push(add_image))
        .push(Text::new("Pre-made slides").size(typography::TITLE_MD))
        .push(scrollable(catalog_list).height(Length::Fill))
        .into()
}

fn playlist_panel(playlist: &Playlist, live: bool) -> Element<'_, Message> {
    let live_label = if live { "End live session" } else { "Go live" };
    let live_button = button(Text::new(live_label).size(typography::BODY))
        .on_press(Message::ToggleLive)
        .style(move |theme: &Theme, status| live_button_style(theme, status, live));

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new("Playlist")
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(live_button);

    let body: Element<'_, Message> = if playlist.is_empty() {
        Text::new("Add items to start presenting.")
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            })
            .into()
    } else {
        let mut list = Column::new().spacing(spacing::XS);
        for item in playlist.items() {
            list = list.push(playlist_row(item));
        }
        scrollable(list).height(Length::Fill).into()
    };

    let mut panel = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(header);
    if live {
        panel = panel.push(
            Text::new("\u{25CF} LIVE - every slide change is mirrored")
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::LIVE_500),
                }),
        );
    }
    panel.push(body).into()
}

fn playlist_row(item: &PlaylistItem) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(item.title())
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("Present").size(typography::CAPTION))
                .on_press(Message::PresentItem(item.id())),
        )
        .push(
            button(Text::new("Remove").size(typography::CAPTION))
                .on_press(Message::RemoveItem(item.id())),
        )
        .into()
}

fn panel_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

fn tab_button_style(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let palette = theme.extended_palette();
    let background = if active {
        palette.primary.strong.color
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
            _ => palette.background.weak.color,
        }
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: if active {
            palette.primary.strong.text
        } else {
            palette.background.base.text
        },
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn live_button_style(theme: &Theme, status: button::Status, live: bool) -> button::Style {
    let base = theme.extended_palette();
    let background = if live {
        palette::LIVE_500
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => base.primary.strong.color,
            _ => base.primary.base.color,
        }
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
