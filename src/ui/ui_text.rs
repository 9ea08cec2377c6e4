pub struct UiText {
    // --- HEADER ---
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub legend_open: &'static str,
    pub legend_close: &'static str,

    // --- EDITOR ---
    pub editor_label: &'static str,
    pub button_reset_sample: &'static str,

    // --- MESSAGES ---
    pub errors_heading: &'static str,
    pub warnings_heading: &'static str,
    pub empty_state: &'static str,

    // --- SUMMARY ---
    pub metric_trend: &'static str,
    pub metric_net_change: &'static str,
    pub metric_rolling_change: &'static str,
    pub metric_entries: &'static str,

    // --- PLOT LABELS ---
    pub series_weigh_ins: &'static str,
    pub series_night_close: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Weigh-In Candlestick",
    app_subtitle: "Compare morning vs night weigh-ins and track trends over time.",
    legend_open: "Open = Morning",
    legend_close: "Close = Night",

    editor_label: "Weigh-in data (JSON array)",
    button_reset_sample: "Reset to sample",

    errors_heading: "Fix these issues:",
    warnings_heading: "Warnings:",
    empty_state: "Enter valid data to render the chart.",

    metric_trend: "Trend",
    metric_net_change: "Net Change",
    metric_rolling_change: "7-Day Change",
    metric_entries: "Entries",

    series_weigh_ins: "Weigh-ins",
    series_night_close: "Night Close",
    plot_x_axis: "Date",
    plot_y_axis: "Weight",
};
