use eframe::egui::{CentralPanel, Context, ScrollArea, SidePanel, TextEdit, TopBottomPanel};
use eframe::{CreationContext, Frame};

use crate::Cli;
use crate::data::sample_input_json;
use crate::pipeline::{TransformResult, transform_weigh_ins};
use crate::ui::{
    UI_TEXT, render_empty_state, render_header, render_messages, render_summary,
    render_weigh_in_plot,
};

/// Editor on the left, chart and summary in the middle. The pipeline result is cached against
/// the text it was computed from and only recomputed when the text changes.
pub struct WeighInApp {
    input: String,
    computed_for: String,
    result: TransformResult,
}

impl WeighInApp {
    pub fn new(_cc: &CreationContext<'_>, args: Cli) -> Self {
        Self::with_input(initial_input(&args))
    }

    pub fn with_input(input: String) -> Self {
        let result = transform_weigh_ins(&input);
        Self {
            computed_for: input.clone(),
            input,
            result,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> &TransformResult {
        &self.result
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.refresh();
    }

    pub fn reset_to_sample(&mut self) {
        self.set_input(sample_input_json());
    }

    /// Returns true when the pipeline actually re-ran.
    pub(crate) fn refresh(&mut self) -> bool {
        if self.input == self.computed_for {
            return false;
        }
        self.result = transform_weigh_ins(&self.input);
        self.computed_for.clone_from(&self.input);
        true
    }

    fn render_editor(&mut self, ui: &mut eframe::egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong(UI_TEXT.editor_label);
            if ui.button(UI_TEXT.button_reset_sample).clicked() {
                self.reset_to_sample();
            }
        });
        ui.separator();

        ScrollArea::vertical().show(ui, |ui| {
            let response = ui.add(
                TextEdit::multiline(&mut self.input)
                    .code_editor()
                    .desired_rows(24)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                self.refresh();
            }
        });
    }

    fn render_result(&self, ui: &mut eframe::egui::Ui) {
        render_messages(ui, &self.result);
        ui.add_space(8.0);

        if self.result.is_renderable() {
            render_summary(ui, &self.result);
            ui.add_space(8.0);
            render_weigh_in_plot(ui, &self.result.candles);
        } else {
            render_empty_state(ui);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_input(args: &Cli) -> String {
    match &args.input {
        Some(path) => match crate::data::read_document(Some(path)) {
            Ok(text) => text,
            Err(e) => {
                log::error!("{:#}. Falling back to the sample series.", e);
                sample_input_json()
            }
        },
        None => sample_input_json(),
    }
}

#[cfg(target_arch = "wasm32")]
fn initial_input(_args: &Cli) -> String {
    sample_input_json()
}

impl eframe::App for WeighInApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        TopBottomPanel::top("header_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            render_header(ui);
            ui.add_space(4.0);
        });

        SidePanel::left("editor_panel")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| self.render_editor(ui));

        CentralPanel::default().show(ctx, |ui| self.render_result(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrendDirection;

    #[test]
    fn test_starts_from_sample() {
        let app = WeighInApp::with_input(sample_input_json());
        assert!(app.result().is_renderable());
        assert_eq!(app.result().entry_count(), 10);
        assert_eq!(app.result().summary.direction, TrendDirection::Down);
    }

    #[test]
    fn test_edit_recomputes_once() {
        let mut app = WeighInApp::with_input(sample_input_json());
        app.set_input("{not json");
        assert_eq!(
            app.result().error_messages(),
            vec!["Invalid JSON. Check commas, quotes, and brackets."]
        );
        // Same text again: cached result is kept.
        assert!(!app.refresh());
    }

    #[test]
    fn test_reset_restores_sample() {
        let mut app = WeighInApp::with_input("[]".to_string());
        assert_eq!(app.result().entry_count(), 0);
        app.reset_to_sample();
        assert_eq!(app.input(), sample_input_json());
        assert_eq!(app.result().entry_count(), 10);
    }
}
