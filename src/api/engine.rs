use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::core::{
    Axis, Margin, PlotSize, TimeSerie, Viewport, is_series_unavailable, time_interval,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{CrosshairState, InteractionMode, InteractionState, ZoomTransform};
use crate::render::{Color, Renderer};

use super::palette::palette_color;
use super::render_coordinator::RenderCoordinator;
use super::{
    AttachedListeners, AxisFormatters, ChartCallbacks, ChartLayout, ChartOptions, RenderStyle,
    ResizeDebounce, ScaleCache, ScaleProvider, ViewState,
};

/// Interactive time-series chart bound to one renderer.
///
/// `ChartPod` owns the series, the merged options, the view state and the
/// gesture state machine. Host input is fed through the gesture methods and
/// every redraw goes out through the renderer as a full or partial frame.
pub struct ChartPod<R: Renderer> {
    pub(super) renderer: R,
    pub(super) container: Viewport,
    pub(super) series: Vec<TimeSerie>,
    pub(super) options: ChartOptions,
    pub(super) style: RenderStyle,
    pub(super) formatters: AxisFormatters,
    pub(super) callbacks: ChartCallbacks,
    pub(super) view: ViewState,
    pub(super) scale_cache: ScaleCache,
    pub(super) interaction: InteractionState,
    pub(super) listeners: AttachedListeners,
    pub(super) resize: ResizeDebounce,
    /// View transform at the last full render; metrics drawn then are
    /// shifted relative to it by partial renders.
    pub(super) rendered_transform: ZoomTransform,
    pub(super) has_rendered: bool,
}

impl<R: Renderer> ChartPod<R> {
    pub fn new(
        renderer: R,
        container: Viewport,
        series: &[TimeSerie],
        options: &ChartOptions,
    ) -> ChartResult<Self> {
        validate_container(container)?;
        options.validate()?;
        validate_series(series)?;

        Ok(Self {
            renderer,
            container,
            series: series.to_vec(),
            options: options.clone(),
            style: RenderStyle::default(),
            formatters: AxisFormatters::default(),
            callbacks: ChartCallbacks::default(),
            view: ViewState::from_options(options),
            scale_cache: ScaleCache::default(),
            interaction: InteractionState::default(),
            listeners: AttachedListeners::none(),
            resize: ResizeDebounce::default(),
            rendered_transform: ZoomTransform::IDENTITY,
            has_rendered: false,
        })
    }

    #[must_use]
    pub fn with_callbacks(mut self, callbacks: ChartCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    #[must_use]
    pub fn with_formatters(mut self, formatters: AxisFormatters) -> Self {
        self.formatters = formatters;
        self
    }

    pub fn set_callbacks(&mut self, callbacks: ChartCallbacks) {
        self.callbacks = callbacks;
    }

    pub fn set_formatters(&mut self, formatters: AxisFormatters) {
        self.formatters = formatters;
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.style = style.validate()?;
        Ok(())
    }

    /// Replaces series and options and resets the view to the pinned ranges.
    pub fn configure(&mut self, series: &[TimeSerie], options: &ChartOptions) -> ChartResult<()> {
        options.validate()?;
        validate_series(series)?;
        self.series = series.to_vec();
        self.options = options.clone();
        self.clear_scale_cache(true);
        debug!(series_len = self.series.len(), "configured chart pod");
        Ok(())
    }

    /// Partial update of series and/or options.
    ///
    /// New options rebuild the view from their pinned ranges; new series keep
    /// the current view. Renders afterwards when `should_rerender` is set.
    pub fn update_data(
        &mut self,
        series: Option<&[TimeSerie]>,
        options: Option<&ChartOptions>,
        should_rerender: bool,
    ) -> ChartResult<()> {
        if let Some(options) = options {
            options.validate()?;
        }
        if let Some(series) = series {
            validate_series(series)?;
            self.series = series.to_vec();
        }
        let reset_state = match options {
            Some(options) => {
                self.options = options.clone();
                true
            }
            None => false,
        };
        self.clear_scale_cache(reset_state);
        debug!(
            series_len = self.series.len(),
            reset_state, should_rerender, "updated chart data"
        );
        if should_rerender {
            self.render()?;
        }
        Ok(())
    }

    /// Deep-merges a JSON patch into the current options, then behaves like
    /// `update_data(None, Some(merged), should_rerender)`.
    pub fn update_options_json(&mut self, patch: &Value, should_rerender: bool) -> ChartResult<()> {
        let merged = self.options.merged_with(patch)?;
        self.update_data(None, Some(&merged), should_rerender)
    }

    /// Drops memoized scales; with `reset_state` the view is rebuilt from
    /// the options and any gesture in progress is abandoned.
    pub fn clear_scale_cache(&mut self, reset_state: bool) {
        self.scale_cache.invalidate();
        if reset_state {
            self.view = ViewState::from_options(&self.options);
            self.interaction.reset();
        }
    }

    /// Forgets every gesture-selected range and redraws.
    pub fn reset_view(&mut self) -> ChartResult<()> {
        self.clear_scale_cache(true);
        self.render()
    }

    pub fn render(&mut self) -> ChartResult<()> {
        RenderCoordinator::render(self)
    }

    /// Removes every listener and cancels a pending resize. Gestures are
    /// ignored until the next `render`.
    pub fn detach(&mut self) {
        self.listeners.clear();
        self.resize.cancel();
        self.interaction.reset();
        debug!("detached chart pod listeners");
    }

    #[must_use]
    pub fn scales(&self) -> ScaleProvider<'_> {
        ScaleProvider::new(
            &self.view,
            &self.series,
            &self.options,
            self.plot_size(),
            &self.scale_cache,
        )
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        ChartLayout::resolve(self.container, &self.options, &self.series)
    }

    #[must_use]
    pub fn margin(&self) -> Margin {
        self.layout().margin
    }

    #[must_use]
    pub fn plot_size(&self) -> PlotSize {
        self.layout().plot
    }

    #[must_use]
    pub fn container(&self) -> Viewport {
        self.container
    }

    #[must_use]
    pub fn series(&self) -> &[TimeSerie] {
        &self.series
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn crosshair(&self) -> CrosshairState {
        self.interaction.crosshair()
    }

    #[must_use]
    pub fn listeners(&self) -> AttachedListeners {
        self.listeners
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Sampling interval of the data in milliseconds.
    #[must_use]
    pub fn time_interval(&self) -> f64 {
        time_interval(&self.series, self.options.time_interval.count)
    }

    #[must_use]
    pub fn is_series_unavailable(&self) -> bool {
        is_series_unavailable(&self.series)
    }

    /// The series' own colour, or the palette colour for its index.
    pub fn series_color(&self, index: usize) -> ChartResult<Color> {
        let serie = self
            .series
            .get(index)
            .ok_or(ChartError::SeriesIndexOutOfRange {
                index,
                len: self.series.len(),
            })?;
        match serie.color.as_deref() {
            Some(color) => Color::from_css(color),
            None => Color::from_css(palette_color(index)),
        }
    }

    /// Whether the y1 axis is drawn and fed by right-oriented series.
    #[must_use]
    pub(super) fn y1_active(&self) -> bool {
        self.options.axis.get(Axis::Y1).is_active
    }
}

pub(super) fn validate_container(container: Viewport) -> ChartResult<()> {
    if !container.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: container.width,
            height: container.height,
        });
    }
    Ok(())
}

/// Targets must be unique and colours parseable.
fn validate_series(series: &[TimeSerie]) -> ChartResult<()> {
    let mut targets: IndexMap<&str, usize> = IndexMap::with_capacity(series.len());
    for (index, serie) in series.iter().enumerate() {
        if let Some(previous) = targets.insert(serie.target.as_str(), index) {
            return Err(ChartError::InvalidData(format!(
                "duplicate series target `{}` at indexes {previous} and {index}",
                serie.target
            )));
        }
        if let Some(color) = serie.color.as_deref() {
            Color::from_css(color)?;
        }
    }
    Ok(())
}
