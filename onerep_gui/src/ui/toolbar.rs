//! Header component

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length};

use onerep_core::units::WeightUnit;

use crate::Message;

/// Render the application header with the active unit
pub fn view_header(unit: WeightUnit) -> Element<'static, Message> {
    row![
        text("OneRep").size(28),
        Space::new().width(Length::Fill),
        text(format!("1RM Calculator ({})", unit.label())).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}
