//! Input Panel (Left Side)
//!
//! Weight and reps fields, the LBS/KG toggle, the table-mode picker and the
//! Calculate button. Enter in the weight field moves to reps; Enter in the
//! reps field calculates.

use iced::widget::{
    button, column, container, pick_list, radio, row, text, text_input, Id, Space,
};
use iced::{Alignment, Element, Length, Padding};

use onerep_core::calculations::TableMode;
use onerep_core::units::WeightUnit;

use crate::{App, Message};

/// Widget id of the reps field, focused when Enter is pressed in the weight field
pub fn reps_input_id() -> Id {
    Id::new("reps-input")
}

/// Render the input panel
///
/// The `ratio` parameter determines the relative size of this panel vs results panel.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let form = &app.form;

    let weight_row = row![
        text("Weight:").size(12).width(Length::Fixed(70.0)),
        text_input("225", &form.weight)
            .on_input(Message::WeightChanged)
            .on_submit(Message::WeightSubmitted)
            .width(Length::Fixed(110.0))
            .padding(4)
            .size(12),
        Space::new().width(6),
        text(form.unit.label()).size(12),
    ]
    .align_y(Alignment::Center);

    let reps_row = row![
        text("Reps:").size(12).width(Length::Fixed(70.0)),
        text_input("5", &form.reps)
            .id(reps_input_id())
            .on_input(Message::RepsChanged)
            .on_submit(Message::Calculate)
            .width(Length::Fixed(110.0))
            .padding(4)
            .size(12),
    ]
    .align_y(Alignment::Center);

    let unit_row = row![
        text("Units:").size(12).width(Length::Fixed(70.0)),
        radio(
            WeightUnit::Pounds.label(),
            WeightUnit::Pounds,
            Some(form.unit),
            Message::UnitSelected
        )
        .size(14)
        .text_size(12),
        Space::new().width(12),
        radio(
            WeightUnit::Kilograms.label(),
            WeightUnit::Kilograms,
            Some(form.unit),
            Message::UnitSelected
        )
        .size(14)
        .text_size(12),
    ]
    .align_y(Alignment::Center);

    let mode_row = row![
        text("Table:").size(12).width(Length::Fixed(70.0)),
        pick_list(TableMode::ALL, Some(form.mode), Message::ModeSelected)
            .width(Length::Fixed(150.0))
            .text_size(12),
    ]
    .align_y(Alignment::Center);

    let panel = column![
        text("Your Set").size(14),
        Space::new().height(8),
        weight_row,
        reps_row,
        unit_row,
        mode_row,
        Space::new().height(10),
        button(text("Calculate").size(12))
            .on_press(Message::Calculate)
            .padding(Padding::from([6, 12]))
            .style(button::primary),
    ]
    .spacing(6)
    .padding(8);

    // Convert ratio to fill portion (scale to 0-100 for better precision)
    let portion = (ratio * 100.0) as u16;

    container(panel)
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
