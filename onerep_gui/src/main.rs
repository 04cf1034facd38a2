//! # OneRep GUI Application
//!
//! Graphical one-rep-max calculator built with Iced for cross-platform
//! support (Windows, macOS, Linux, WASM).
//!
//! The window holds the weight and reps fields, a unit toggle, a table-mode
//! picker and the results. All calculation state lives in a
//! [`CalculatorForm`]; this crate only maps UI events onto it.

mod ui;

use iced::widget::{column, operation, row};
use iced::{Element, Length, Size, Task};
use tracing::{debug, warn};

use onerep_core::calculations::TableMode;
use onerep_core::form::CalculatorForm;
use onerep_core::units::WeightUnit;
use onerep_core::CalcError;

/// Ratio of the window width given to the input panel
const INPUT_PANEL_RATIO: f32 = 0.45;

#[derive(Debug, Clone)]
pub enum Message {
    WeightChanged(String),
    RepsChanged(String),
    /// Enter pressed in the weight field
    WeightSubmitted,
    UnitSelected(WeightUnit),
    ModeSelected(TableMode),
    Calculate,
}

#[derive(Debug, Default)]
pub struct App {
    pub form: CalculatorForm,
    /// Last failure, shown above the (unchanged) previous results
    pub error_message: Option<String>,
    pub status: String,
}

impl App {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WeightChanged(value) => self.form.weight = value,
            Message::RepsChanged(value) => self.form.reps = value,
            Message::WeightSubmitted => {
                return operation::focus(ui::input_panel::reps_input_id());
            }
            Message::UnitSelected(unit) => {
                let outcome = self.form.change_unit(unit);
                self.status = format!("Units: {}", unit.label());
                self.report(outcome);
            }
            Message::ModeSelected(mode) => {
                let outcome = self.form.set_mode(mode);
                self.status = format!("Showing {}", mode.display_name().to_lowercase());
                self.report(outcome);
            }
            Message::Calculate => self.calculate(),
        }
        Task::none()
    }

    fn calculate(&mut self) {
        let outcome = self.form.submit().map(|result| {
            format!(
                "1RM: {} {}",
                result.formatted_one_rep_max(),
                result.unit.label()
            )
        });
        match outcome {
            Ok(status) => {
                debug!(%status, "calculated");
                self.status = status;
                self.error_message = None;
            }
            Err(e) => self.show_error(e),
        }
    }

    fn report(&mut self, outcome: Result<(), CalcError>) {
        match outcome {
            Ok(()) => self.error_message = None,
            Err(e) => self.show_error(e),
        }
    }

    fn show_error(&mut self, error: CalcError) {
        warn!(code = error.error_code(), %error, "calculation rejected");
        self.error_message = Some(error.user_message());
    }

    fn view(&self) -> Element<'_, Message> {
        let panels = row![
            ui::input_panel::view_input_panel(self, INPUT_PANEL_RATIO),
            ui::results_panel::view_results_panel(self, INPUT_PANEL_RATIO),
        ]
        .spacing(10)
        .height(Length::Fill);

        column![
            ui::toolbar::view_header(self.form.unit),
            panels,
            ui::status_bar::view_status_bar(&self.status),
        ]
        .spacing(8)
        .padding(12)
        .into()
    }
}

fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn main() -> iced::Result {
    init_logging();

    iced::application(App::default, App::update, App::view)
        .title("OneRep - 1RM Calculator")
        .window_size(Size::new(760.0, 520.0))
        .run()
}
