//! Everything derived from a frozen `AggregateState`: the ranked view, the
//! text report and the usage charts. Nothing here mutates the state.

pub mod ranking;
pub mod text;
pub mod visualizer;

pub use ranking::{rank_class, RankedClass, RankedPattern, RankedValue, RankedVariable};
pub use text::render_text_report;
pub use visualizer::{
    gen_colormap, pie_chart_basic, pie_chart_class, pie_chart_var, render_figure, Color, Figure,
    PieChart, PlotSurface, Slice,
};
