use eframe::egui::{Color32, RichText, Ui};

use crate::config::PLOT_CONFIG;
use crate::pipeline::TransformResult;
use crate::ui::{DirectionColor, UI_TEXT, UiStyleExt};
use crate::utils::{format_delta, format_pct};

pub(crate) fn render_header(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(UI_TEXT.app_title);
            ui.label_subdued(UI_TEXT.app_subtitle);
        });
        ui.add_space(24.0);
        ui.label(RichText::new(UI_TEXT.legend_open).color(PLOT_CONFIG.candle_rising_color));
        ui.label(RichText::new(UI_TEXT.legend_close).color(PLOT_CONFIG.close_line_color));
    });
}

/// Errors win over warnings: with errors present the warning list is never shown.
pub(crate) fn render_messages(ui: &mut Ui, result: &TransformResult) {
    if result.has_errors() {
        ui.message_list(
            UI_TEXT.errors_heading,
            &result.error_messages(),
            PLOT_CONFIG.color_error,
        );
    } else if !result.warnings.is_empty() {
        ui.message_list(
            UI_TEXT.warnings_heading,
            &result.warning_messages(),
            PLOT_CONFIG.color_warning,
        );
    }
}

pub(crate) fn render_summary(ui: &mut Ui, result: &TransformResult) {
    let summary = &result.summary;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 32.0;
        ui.metric(
            UI_TEXT.metric_trend,
            summary.direction.label(),
            summary.direction.color(),
        );
        ui.metric(
            UI_TEXT.metric_net_change,
            &change_text(summary.net_change, summary.net_change_pct),
            Color32::WHITE,
        );
        ui.metric(
            UI_TEXT.metric_rolling_change,
            &change_text(summary.rolling_change, summary.rolling_change_pct),
            Color32::WHITE,
        );
        ui.metric(
            UI_TEXT.metric_entries,
            &result.entry_count().to_string(),
            Color32::WHITE,
        );
    });
}

pub(crate) fn render_empty_state(ui: &mut Ui) {
    ui.centered_and_justified(|ui| {
        ui.label_subdued(UI_TEXT.empty_state);
    });
}

/// "+0.70 (+0.38%)"
pub(crate) fn change_text(delta: f64, pct: f64) -> String {
    format!("{} ({})", format_delta(delta), format_pct(pct))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_text() {
        assert_eq!(change_text(-2.1, -1.15131), "-2.10 (-1.15%)");
        assert_eq!(change_text(0.0, 0.0), "0.00 (0.00%)");
    }
}
