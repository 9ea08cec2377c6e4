use eframe::egui::Ui;
use egui_plot::{Axis, AxisHints, GridInput, GridMark, HPlacement, Legend, Plot};

use crate::config::PLOT_CONFIG;
use crate::domain::CandlestickPoint;
use crate::ui::{CandlestickLayer, CloseLineLayer, LayerContext, PlotLayer, UI_TEXT};
use crate::utils::{format_date, format_weight};

/// Date label for a plot x value, or an empty label between/outside candles.
pub(crate) fn date_label_at(candles: &[CandlestickPoint], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    candles
        .get(rounded as usize)
        .map(|c| format_date(c.time))
        .unwrap_or_default()
}

/// One grid mark per candle, thinned out so roughly `target` labels fit the visible range.
fn day_marks(input: GridInput, target: f64) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let step = ((max - min) / target).ceil().max(1.0);
    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;

    (start..=end)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}

fn create_time_axis(candles: &[CandlestickPoint]) -> AxisHints<'static> {
    let candles = candles.to_vec();
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis)
        .formatter(move |mark, _range| date_label_at(&candles, mark.value))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format_weight(grid_mark.value))
        .placement(HPlacement::Right)
}

pub(crate) fn render_weigh_in_plot(ui: &mut Ui, candles: &[CandlestickPoint]) {
    let hover_candles = candles.to_vec();

    Plot::new("weigh_in_plot")
        .height(PLOT_CONFIG.chart_height)
        .legend(Legend::default())
        .custom_x_axes(vec![create_time_axis(candles)])
        .custom_y_axes(vec![create_y_axis()])
        .x_grid_spacer(|input| day_marks(input, 10.0))
        .label_formatter(move |_name, point| {
            let date = date_label_at(&hover_candles, point.x.round());
            format!("{}\n{}", date, format_weight(point.y))
        })
        .show(ui, |plot_ui| {
            // --- LAYER STACK ---
            let ctx = LayerContext { candles };
            let layers: [&dyn PlotLayer; 2] = [&CandlestickLayer, &CloseLineLayer];
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
}
