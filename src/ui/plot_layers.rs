use eframe::egui::{Color32, Stroke};
use egui_plot::{Line, PlotPoints, PlotUi, Points, Polygon};

use crate::config::PLOT_CONFIG;
use crate::domain::{CandleType, CandlestickPoint};
use crate::ui::UI_TEXT;

/// Context passed to every layer during rendering.
/// Candle `i` is drawn at x = i.
pub struct LayerContext<'a> {
    pub candles: &'a [CandlestickPoint],
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

pub struct CandlestickLayer;

impl PlotLayer for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for (idx, candle) in ctx.candles.iter().enumerate() {
            draw_candle(plot_ui, idx as f64, candle);
        }
    }
}

pub struct CloseLineLayer;

impl PlotLayer for CloseLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.candles.is_empty() {
            return;
        }
        let closes: Vec<[f64; 2]> = ctx
            .candles
            .iter()
            .enumerate()
            .map(|(idx, c)| [idx as f64, c.close])
            .collect();

        plot_ui.line(
            Line::new(UI_TEXT.series_night_close, PlotPoints::new(closes.clone()))
                .color(PLOT_CONFIG.close_line_color)
                .width(PLOT_CONFIG.close_line_width),
        );
        plot_ui.points(
            Points::new(UI_TEXT.series_night_close, PlotPoints::new(closes))
                .color(PLOT_CONFIG.close_line_color)
                .radius(PLOT_CONFIG.close_marker_radius),
        );
    }
}

// --- HELPERS (Keep the main logic clean) ---
fn draw_candle(ui: &mut PlotUi, x: f64, candle: &CandlestickPoint) {
    let color = match candle.get_type() {
        CandleType::Rising => PLOT_CONFIG.candle_rising_color,
        CandleType::Falling => PLOT_CONFIG.candle_falling_color,
    };

    if candle.high > candle.low {
        draw_wick_line(ui, x, candle.high, candle.low, color);
    }

    let (body_bot, body_top_raw) = candle.body_range();
    // Doji: give equal morning/night readings a sliver of body so it stays visible
    let body_top = if (body_top_raw - body_bot).abs() < f64::EPSILON {
        body_bot + 0.02
    } else {
        body_top_raw
    };
    draw_body_rect(ui, x, body_top, body_bot, color);
}

#[inline]
fn draw_wick_line(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(PLOT_CONFIG.candle_wick_width),
    );
}

#[inline]
fn draw_body_rect(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    let half_w = PLOT_CONFIG.candle_width_pct / 2.0;
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    ui.polygon(
        Polygon::new(UI_TEXT.series_weigh_ins, PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}
