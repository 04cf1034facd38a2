//! Results Panel (Right Side)
//!
//! Shows the last error (if any) above the last successful result. A failed
//! calculation never clears the previous numbers.

use iced::widget::{column, container, row, scrollable, text, Column, Space};
use iced::{Element, Length};

use onerep_core::calculations::OneRepMaxResult;

use crate::{App, Message};

/// Placeholder shown before the first successful calculation
const EMPTY_VALUE: &str = "--";

/// Render the results panel
///
/// This panel uses the complementary ratio (1 - input_ratio).
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let mut content: Column<'_, Message> = column![].spacing(6);

    if let Some(ref error) = app.error_message {
        content = content.push(
            column![
                text("Error").size(14),
                text(error.as_str()).size(12).color([0.8, 0.2, 0.2]),
                Space::new().height(8),
            ]
            .spacing(4),
        );
    }

    content = content.push(match app.form.result {
        Some(ref result) => view_result(result),
        None => column![
            text("Estimated 1RM").size(14),
            text(EMPTY_VALUE).size(32),
            text("Enter a weight and reps, then Calculate").size(12).color([0.5, 0.5, 0.5]),
        ]
        .spacing(4),
    });

    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_result(result: &OneRepMaxResult) -> Column<'_, Message> {
    let unit = result.unit.label();

    let rows = result
        .formatted_rows()
        .into_iter()
        .fold(column![].spacing(2), |table, (label, value)| {
            table.push(
                row![
                    text(label).size(12).width(Length::Fixed(60.0)),
                    text(format!("{} {}", value, unit)).size(12),
                ]
                .spacing(8),
            )
        });

    column![
        text("Estimated 1RM").size(14),
        text(format!("{} {}", result.formatted_one_rep_max(), unit)).size(32),
        Space::new().height(10),
        text(result.table.mode.display_name()).size(14),
        rows,
    ]
    .spacing(4)
}
