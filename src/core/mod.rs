pub mod scale;
pub mod series;
pub mod time_ticks;
pub mod types;

pub use scale::{LinearScale, Ticks};
pub use series::{
    DEFAULT_AXIS_RANGE, Datapoint, MILLISECONDS_IN_MINUTE, TimeSerie, YAxisOrientation, extent,
    is_series_unavailable, sorted_pair, time_interval,
};
pub use time_ticks::{TimeFormat, time_ticks};
pub use types::{Axis, Margin, PlotSize, Viewport};
