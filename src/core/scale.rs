use smallvec::SmallVec;

/// Tick values produced by a scale. Charts rarely need more than a dozen.
pub type Ticks = SmallVec<[f64; 16]>;

/// Continuous linear mapping from a value domain to a pixel range.
///
/// A degenerate domain (start == end) maps every value to the middle of the
/// range, and a degenerate range inverts to the domain start, so scales built
/// from single-point data never yield NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Round tick values (multiples of 1, 2 or 5 times a power of ten)
    /// inside the domain, ordered like the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Ticks {
        nice_ticks(self.domain_start, self.domain_end, count)
    }
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    power * factor
}

const MAX_TICK_COUNT: usize = 512;

pub(crate) fn nice_ticks(start: f64, stop: f64, count: usize) -> Ticks {
    let mut ticks = Ticks::new();
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return ticks;
    }
    let count = count.min(MAX_TICK_COUNT);
    if start == stop {
        ticks.push(start);
        return ticks;
    }

    let reversed = stop < start;
    let (lo, hi) = if reversed { (stop, start) } else { (start, stop) };
    let step = tick_step(lo, hi, count);
    if !step.is_finite() || step <= 0.0 {
        return ticks;
    }

    // Dividing by the inverse step keeps decimal ticks free of float noise.
    let inverse = if step < 1.0 { Some((1.0 / step).round()) } else { None };
    let first = match inverse {
        Some(inv) => (lo * inv).ceil(),
        None => (lo / step).ceil(),
    } as i64;
    let last = match inverse {
        Some(inv) => (hi * inv).floor(),
        None => (hi / step).floor(),
    } as i64;

    for index in (first..=last).take(MAX_TICK_COUNT * 4) {
        let value = match inverse {
            Some(inv) => index as f64 / inv,
            None => index as f64 * step,
        };
        ticks.push(value);
    }
    if reversed {
        ticks.reverse();
    }
    ticks
}
