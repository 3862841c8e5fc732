use std::time::{Duration, Instant};

use crate::core::Viewport;

pub const RESIZE_DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);

/// Trailing-edge debounce for container resizes.
///
/// Every `schedule` restarts the window; `poll` yields the latest size once the
/// window has elapsed without another resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeDebounce {
    pending: Option<(Viewport, Instant)>,
}

impl ResizeDebounce {
    pub fn schedule(&mut self, size: Viewport, now: Instant) {
        self.pending = Some((size, now));
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn poll(&mut self, now: Instant) -> Option<Viewport> {
        let (size, scheduled_at) = self.pending?;
        if now.saturating_duration_since(scheduled_at) < RESIZE_DEBOUNCE_WINDOW {
            return None;
        }
        self.pending = None;
        Some(size)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_quiet_window() {
        let start = Instant::now();
        let mut debounce = ResizeDebounce::default();
        debounce.schedule(Viewport::new(300, 200), start);
        debounce.schedule(Viewport::new(320, 200), start + Duration::from_millis(60));

        assert_eq!(debounce.poll(start + Duration::from_millis(120)), None);
        assert_eq!(
            debounce.poll(start + Duration::from_millis(160)),
            Some(Viewport::new(320, 200))
        );
        assert_eq!(debounce.poll(start + Duration::from_millis(400)), None);
    }

    #[test]
    fn cancel_drops_pending_resize() {
        let start = Instant::now();
        let mut debounce = ResizeDebounce::default();
        debounce.schedule(Viewport::new(300, 200), start);
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert_eq!(debounce.poll(start + Duration::from_secs(1)), None);
    }
}
