//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- CANDLESTICKS ---
    pub candle_rising_color: Color32,
    pub candle_falling_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to one day step)
    pub candle_wick_width: f32, // Pixels

    // --- NIGHT CLOSE LINE ---
    pub close_line_color: Color32,
    pub close_line_width: f32,
    pub close_marker_radius: f32,

    /// Fixed height of the chart area in points
    pub chart_height: f32,

    // --- SEMANTIC COLORS ---
    pub color_trend_up: Color32,
    pub color_trend_down: Color32,
    pub color_trend_flat: Color32,
    pub color_error: Color32,
    pub color_warning: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_rising_color: Color32::from_rgb(111, 191, 115),  // #6fbf73
    candle_falling_color: Color32::from_rgb(242, 139, 130), // #f28b82
    candle_width_pct: 0.6,
    candle_wick_width: 1.5,

    close_line_color: Color32::from_rgb(76, 111, 255), // #4c6fff
    close_line_width: 2.0,
    close_marker_radius: 3.0,

    chart_height: 420.0,

    // Upward weight trend is shown in red
    color_trend_up: Color32::from_rgb(242, 139, 130),
    color_trend_down: Color32::from_rgb(111, 191, 115),
    color_trend_flat: Color32::GRAY,
    color_error: Color32::from_rgb(192, 57, 43),
    color_warning: Color32::from_rgb(230, 160, 40),
    color_text_subdued: Color32::from_gray(140),
};
