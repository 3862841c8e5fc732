use std::cell::OnceCell;

use crate::core::{
    Axis, DEFAULT_AXIS_RANGE, LinearScale, PlotSize, TimeSerie, extent, is_series_unavailable,
    sorted_pair,
};

use super::{ChartOptions, ViewState};

/// Memoized x/y/y1 scales for one render pass.
///
/// Any change to the view ranges, plot size, series or options must be
/// followed by `invalidate()` before the next scale read.
#[derive(Debug, Default)]
pub struct ScaleCache {
    x: OnceCell<LinearScale>,
    y: OnceCell<LinearScale>,
    y1: OnceCell<LinearScale>,
}

impl ScaleCache {
    pub fn invalidate(&mut self) {
        self.x = OnceCell::new();
        self.y = OnceCell::new();
        self.y1 = OnceCell::new();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.get().is_none() && self.y.get().is_none() && self.y1.get().is_none()
    }

    fn cell(&self, axis: Axis) -> &OnceCell<LinearScale> {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Y1 => &self.y1,
        }
    }
}

/// Derives scales from the view state, data extents and axis options.
#[derive(Debug, Clone, Copy)]
pub struct ScaleProvider<'a> {
    view: &'a ViewState,
    series: &'a [TimeSerie],
    options: &'a ChartOptions,
    plot: PlotSize,
    cache: &'a ScaleCache,
}

impl<'a> ScaleProvider<'a> {
    #[must_use]
    pub fn new(
        view: &'a ViewState,
        series: &'a [TimeSerie],
        options: &'a ChartOptions,
        plot: PlotSize,
        cache: &'a ScaleCache,
    ) -> Self {
        Self {
            view,
            series,
            options,
            plot,
            cache,
        }
    }

    #[must_use]
    pub fn plot(&self) -> PlotSize {
        self.plot
    }

    /// `[min, max]` of the data feeding `axis`.
    ///
    /// Falls back to `[0, 1]` when there is nothing to plot, and prefers the
    /// axis `range` option over the data.
    #[must_use]
    pub fn extent(&self, axis: Axis) -> (f64, f64) {
        if is_series_unavailable(self.series) {
            return DEFAULT_AXIS_RANGE;
        }
        if let Some(range) = self.options.axis.get(axis).range {
            return sorted_pair(range);
        }
        let visible = self
            .series
            .iter()
            .filter(|serie| serie.visible && serie.feeds(axis));
        let picked = match axis {
            Axis::X => extent(visible, |point| point.timestamp),
            Axis::Y | Axis::Y1 => extent(visible, |point| point.value),
        };
        picked.unwrap_or(DEFAULT_AXIS_RANGE)
    }

    /// Ascending domain of `axis`, reversed when the axis is inverted.
    #[must_use]
    pub fn domain(&self, axis: Axis) -> (f64, f64) {
        let axis_options = self.options.axis.get(axis);
        let raw = match axis {
            Axis::X => self.view.range(axis),
            Axis::Y | Axis::Y1 => axis_options.range.or_else(|| self.view.range(axis)),
        }
        .unwrap_or_else(|| self.extent(axis));
        let (lo, hi) = sorted_pair(raw);
        if axis_options.invert {
            (hi, lo)
        } else {
            (lo, hi)
        }
    }

    #[must_use]
    pub fn scale(&self, axis: Axis) -> LinearScale {
        *self.cache.cell(axis).get_or_init(|| {
            let range = match axis {
                Axis::X => (0.0, self.plot.width),
                Axis::Y | Axis::Y1 => (self.plot.height, 0.0),
            };
            LinearScale::new(self.domain(axis), range)
        })
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.scale(Axis::X)
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.scale(Axis::Y)
    }

    #[must_use]
    pub fn y1_scale(&self) -> LinearScale {
        self.scale(Axis::Y1)
    }

    /// `[0, |max - min|] -> [0, width]` over the x extent.
    #[must_use]
    pub fn abs_x_scale(&self) -> LinearScale {
        let (min, max) = self.extent(Axis::X);
        LinearScale::new((0.0, (max - min).abs()), (0.0, self.plot.width))
    }

    /// `[0, |max - min|] -> [0, height]` over the y extent.
    #[must_use]
    pub fn abs_y_scale(&self) -> LinearScale {
        let (min, max) = self.extent(Axis::Y);
        LinearScale::new((0.0, (max - min).abs()), (0.0, self.plot.height))
    }
}
