// SPDX-License-Identifier: MPL-2.0
//! Design catalog picker and custom color editor.

use crate::ticket::design::{self, ColorScheme, PresetScheme, DESIGNS, PRESET_SCHEMES};
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{button, column, container, pick_list, row, text, text_input, Column};
use iced::{Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    DesignSelected(&'static str),
    PresetSelected(PresetScheme),
    PrimaryChanged(String),
    SecondaryChanged(String),
    AccentChanged(String),
    TextColorChanged(String),
}

/// Applies a picker message to the selected design id and custom scheme.
pub fn apply(design_id: &mut String, custom: &mut ColorScheme, message: Message) {
    match message {
        Message::DesignSelected(id) => *design_id = id.to_string(),
        Message::PresetSelected(preset) => *custom = preset.scheme(),
        Message::PrimaryChanged(value) => {
            custom.background = value.clone();
            custom.primary = value;
        }
        Message::SecondaryChanged(value) => custom.secondary = value,
        Message::AccentChanged(value) => custom.accent = value,
        Message::TextColorChanged(value) => custom.text = value,
    }
}

pub fn view<'a>(design_id: &'a str, custom: &'a ColorScheme) -> Element<'a, Message> {
    let mut picker = Column::new()
        .spacing(spacing::SM)
        .push(text("Design").size(typography::TITLE_SM));

    for design in &DESIGNS {
        let selected = design.id == design_id;
        let scheme = if design.is_custom() {
            custom.clone()
        } else {
            design.scheme()
        };

        let swatch = container(text(" "))
            .width(Length::Fixed(22.0))
            .height(Length::Fixed(22.0))
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(scheme.primary_color())),
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let label = column![
            text(design.name).size(typography::BODY),
            text(design.description).size(typography::CAPTION),
        ]
        .spacing(spacing::XXS);

        let entry = button(
            row![swatch, label]
                .spacing(spacing::SM)
                .align_y(iced::alignment::Vertical::Center),
        )
        .width(Length::Fill)
        .on_press(Message::DesignSelected(design.id))
        .style(move |theme: &Theme, status| selectable_style(theme, status, selected));

        picker = picker.push(entry);
    }

    if design::design_by_id(design_id).is_custom() {
        picker = picker
            .push(text("Custom Colors").size(typography::BODY))
            .push(pick_list(PRESET_SCHEMES, None::<PresetScheme>, Message::PresetSelected)
                .placeholder("Start from a preset")
                .width(Length::Fill))
            .push(hex_field("Primary", &custom.primary, Message::PrimaryChanged))
            .push(hex_field("Secondary", &custom.secondary, Message::SecondaryChanged))
            .push(hex_field("Accent", &custom.accent, Message::AccentChanged))
            .push(hex_field("Text", &custom.text, Message::TextColorChanged));
    }

    picker.into()
}

fn hex_field<'a>(
    label: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(typography::CAPTION).width(Length::Fixed(80.0)),
        text_input("#rrggbb", value).on_input(on_input),
    ]
    .spacing(spacing::SM)
    .align_y(iced::alignment::Vertical::Center)
    .into()
}

fn selectable_style(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let palette = theme.extended_palette();
    let background = if selected {
        palette.primary.weak.color
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => palette.background.weak.color,
            _ => palette.background.base.color,
        }
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette.background.base.text,
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}
