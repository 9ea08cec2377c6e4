mod app;
mod plot_layers;
mod styles;
mod ui_panels;
mod ui_plot_view;
mod ui_text;

pub use app::WeighInApp;

pub(crate) use plot_layers::{CandlestickLayer, CloseLineLayer, LayerContext, PlotLayer};
pub(crate) use styles::{DirectionColor, UiStyleExt};
pub(crate) use ui_panels::{render_empty_state, render_header, render_messages, render_summary};
pub(crate) use ui_plot_view::render_weigh_in_plot;
pub use ui_text::{UI_TEXT, UiText};
