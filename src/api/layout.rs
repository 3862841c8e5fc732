use crate::core::{Margin, PlotSize, TimeSerie, Viewport};

use super::ChartOptions;

pub const DEFAULT_MARGIN: Margin = Margin::new(30.0, 20.0, 20.0, 30.0);

const AXIS_LABEL_MARGIN_PX: f64 = 20.0;
const LEGEND_ROW_MARGIN_PX: f64 = 25.0;

/// Extra room for rotated ticks, axis labels and the legend row.
#[must_use]
pub fn extra_margin(options: &ChartOptions, series: &[TimeSerie]) -> Margin {
    let mut extra = options.tick_format.x_tick_orientation.extra_margin();
    let has_label = |label: &Option<String>| label.as_deref().is_some_and(|text| !text.is_empty());
    if has_label(&options.label_format.x_axis) {
        extra.bottom += AXIS_LABEL_MARGIN_PX;
    }
    if has_label(&options.label_format.y_axis) {
        extra.left += AXIS_LABEL_MARGIN_PX;
    }
    if !series.is_empty() {
        extra.bottom += LEGEND_ROW_MARGIN_PX;
    }
    extra
}

/// The `margin` option when set, otherwise the default plus extras.
#[must_use]
pub fn resolve_margin(options: &ChartOptions, series: &[TimeSerie]) -> Margin {
    options
        .margin
        .unwrap_or_else(|| DEFAULT_MARGIN.add(extra_margin(options, series)))
}

/// Plot-area geometry resolved for one container size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub container: Viewport,
    pub margin: Margin,
    pub plot: PlotSize,
}

impl ChartLayout {
    #[must_use]
    pub fn resolve(container: Viewport, options: &ChartOptions, series: &[TimeSerie]) -> Self {
        let margin = resolve_margin(options, series);
        Self {
            container,
            margin,
            plot: PlotSize::inside_container(container, margin),
        }
    }

    /// Baseline of the legend row, in plot coordinates.
    #[must_use]
    pub fn legend_row_y(&self) -> f64 {
        self.plot.height + self.margin.bottom - 5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LabelFormatOptions, TickOrientation};

    #[test]
    fn default_margin_grows_with_legend_and_labels() {
        let series = [TimeSerie::from_pairs("a", &[(1.0, 0.0)])];
        let options = ChartOptions::default().with_label_format(LabelFormatOptions {
            x_axis: Some("time".to_owned()),
            y_axis: Some(String::new()),
        });
        let margin = resolve_margin(&options, &series);
        assert_eq!(margin, Margin::new(30.0, 20.0, 65.0, 30.0));
    }

    #[test]
    fn diagonal_ticks_reserve_side_room() {
        let mut options = ChartOptions::default();
        options.tick_format.x_tick_orientation = TickOrientation::Diagonal;
        assert_eq!(
            resolve_margin(&options, &[]),
            Margin::new(30.0, 30.0, 70.0, 45.0)
        );
    }

    #[test]
    fn explicit_margin_replaces_computation() {
        let options = ChartOptions::default().with_margin(Margin::new(1.0, 2.0, 3.0, 4.0));
        let layout = ChartLayout::resolve(Viewport::new(100, 50), &options, &[]);
        assert_eq!(layout.plot, PlotSize::new(94.0, 46.0));
    }
}
