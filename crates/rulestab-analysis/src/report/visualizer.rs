//! Pie-chart data built from the aggregated usage statistics.
//!
//! This module only decides slices, labels and colors. Drawing is delegated
//! to a `PlotSurface` supplied by the caller.

use std::fmt;

use rulestab_core::errors::VisualizationError;
use rulestab_core::types::FxHashMap;
use serde::Serialize;
use tracing::debug;

use crate::aggregation::AggregateState;
use crate::rules::{LinguisticVariable, RuleBase};

const SALMON: Color = Color::rgb(0xFA, 0x80, 0x72);
const PALE_GOLD: Color = Color::rgb(0xEE, 0xE8, 0xAA);
const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);

/// Anchors of the diverging blue → grey → red ramp.
const COOLWARM: [(f64, f64, f64); 3] = [
    (0.2298, 0.2987, 0.7537),
    (0.865, 0.865, 0.865),
    (0.7057, 0.0156, 0.1502),
];

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Sample the coolwarm ramp at `t` in `[0, 1]`.
    fn coolwarm(t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let (lo, hi, local) = if t <= 0.5 {
            (COOLWARM[0], COOLWARM[1], t * 2.0)
        } else {
            (COOLWARM[1], COOLWARM[2], (t - 0.5) * 2.0)
        };
        let lerp = |a: f64, b: f64| ((a + (b - a) * local) * 255.0).round() as u8;
        Self::rgb(lerp(lo.0, hi.0), lerp(lo.1, hi.1), lerp(lo.2, hi.2))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// One wedge: a used linguistic value and how often it was used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub value: i32,
    pub label: String,
    pub count: u64,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

impl PieChart {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Share of slice `ix` in the whole pie.
    pub fn fraction(&self, ix: usize) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        self.slices.get(ix).map(|s| s.count as f64 / total as f64)
    }
}

/// A titled row of pie charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub charts: Vec<PieChart>,
}

/// Something that can draw a figure (a plotting backend, a file writer, a
/// test recorder).
pub trait PlotSurface {
    fn render(&mut self, figure: &Figure) -> Result<(), VisualizationError>;
}

/// Hand `figure` to `surface`.
pub fn render_figure<S: PlotSurface + ?Sized>(
    surface: &mut S,
    figure: &Figure,
) -> Result<(), VisualizationError> {
    debug!(title = %figure.title, charts = figure.charts.len(), "rendering figure");
    surface.render(figure)
}

/// Colors for one slot, keyed by its linguistic value names.
///
/// Two values get salmon and green, three get salmon, pale gold and green,
/// anything else is sampled evenly along the coolwarm ramp.
pub fn gen_colormap(variable: &LinguisticVariable) -> FxHashMap<String, Color> {
    let n = variable.n_values();
    let colors: Vec<Color> = match n {
        0 => Vec::new(),
        1 => vec![Color::coolwarm(0.0)],
        2 => vec![SALMON, GREEN],
        3 => vec![SALMON, PALE_GOLD, GREEN],
        _ => (0..n)
            .map(|i| Color::coolwarm(i as f64 / (n - 1) as f64))
            .collect(),
    };

    variable.values.iter().cloned().zip(colors).collect()
}

/// Usage of one slot in one class.
pub fn pie_chart_basic(
    state: &AggregateState,
    class: usize,
    slot: usize,
) -> Result<PieChart, VisualizationError> {
    let rule_base = reference(state, class)?;
    build_chart(state, class, slot, variable_title(rule_base, slot))
}

/// Usage of one slot, one chart per class.
pub fn pie_chart_var(
    state: &AggregateState,
    slot: usize,
    class_names: &[String],
) -> Result<Figure, VisualizationError> {
    let rule_base = reference(state, 0)?;

    let charts = (0..state.n_classes())
        .map(|class| build_chart(state, class, slot, class_title(class_names, class)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Figure {
        title: format!("{} usage in the rulebases", variable_title(rule_base, slot)),
        charts,
    })
}

/// Usage of every slot of one class, one chart per slot.
pub fn pie_chart_class(
    state: &AggregateState,
    class: usize,
    class_names: &[String],
) -> Result<Figure, VisualizationError> {
    let rule_base = reference(state, class)?;
    let n_slots = state.class(class).map_or(0, |stats| stats.usage.n_slots());

    let charts = (0..n_slots)
        .map(|slot| build_chart(state, class, slot, variable_title(rule_base, slot)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Figure {
        title: format!(
            "{} variable usage in the rulebases",
            class_title(class_names, class)
        ),
        charts,
    })
}

fn reference(state: &AggregateState, class: usize) -> Result<&RuleBase, VisualizationError> {
    if state.n_trials() == 0 {
        return Err(VisualizationError::EmptyState);
    }
    state
        .reference_rule_base(class)
        .ok_or(VisualizationError::UnknownClass {
            class,
            available: state.n_classes(),
        })
}

fn build_chart(
    state: &AggregateState,
    class: usize,
    slot: usize,
    title: String,
) -> Result<PieChart, VisualizationError> {
    let stats = state.class(class).ok_or(VisualizationError::UnknownClass {
        class,
        available: state.n_classes(),
    })?;
    if slot >= stats.usage.n_slots() {
        return Err(VisualizationError::UnknownSlot {
            slot,
            available: stats.usage.n_slots(),
        });
    }

    let variable = state
        .reference_rule_base(class)
        .and_then(|rb| rb.antecedents.get(slot));
    let colors = variable.map(gen_colormap).unwrap_or_default();
    let slices = stats
        .usage
        .used_values(slot)
        .into_iter()
        .map(|(value, count)| {
            let label = variable.map_or_else(|| format!("#{value}"), |v| v.display_value(value));
            Slice {
                value,
                color: colors.get(&label).copied(),
                label,
                count,
            }
        })
        .collect();

    Ok(PieChart { title, slices })
}

fn variable_title(rule_base: &RuleBase, slot: usize) -> String {
    match rule_base.antecedents.get(slot) {
        Some(v) => format!("Variable {}", v.name),
        None => format!("Variable x{slot}"),
    }
}

fn class_title(class_names: &[String], class: usize) -> String {
    match class_names.get(class) {
        Some(name) => format!("Class {name}"),
        None => format!("Class {class}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_and_three_value_palettes() {
        let two = gen_colormap(&LinguisticVariable::new("x", ["low", "high"]));
        assert_eq!(two["low"].hex(), "#FA8072");
        assert_eq!(two["high"].hex(), "#008000");
        assert_eq!(two.len(), 2);

        let three = gen_colormap(&LinguisticVariable::new("y", ["low", "medium", "high"]));
        assert_eq!(three["low"].hex(), "#FA8072");
        assert_eq!(three["medium"].hex(), "#EEE8AA");
        assert_eq!(three["high"].hex(), "#008000");
    }

    #[test]
    fn wider_variables_sample_coolwarm_ends() {
        let names = ["vl", "l", "m", "h", "vh"];
        let map = gen_colormap(&LinguisticVariable::new("x", names));
        assert_eq!(map.len(), 5);
        assert_eq!(map["vl"], Color::rgb(59, 76, 192));
        assert_eq!(map["m"], Color::rgb(221, 221, 221));
        assert_eq!(map["vh"], Color::rgb(180, 4, 38));
    }

    #[test]
    fn single_and_empty_variables() {
        let one = gen_colormap(&LinguisticVariable::new("x", ["only"]));
        assert_eq!(one["only"], Color::rgb(59, 76, 192));
        let none: [&str; 0] = [];
        assert!(gen_colormap(&LinguisticVariable::new("x", none)).is_empty());
    }

    #[test]
    fn fraction_of_empty_chart() {
        let chart = PieChart {
            title: String::new(),
            slices: vec![],
        };
        assert_eq!(chart.fraction(0), None);
    }
}
