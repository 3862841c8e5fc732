use serde::{Deserialize, Serialize};

/// Host input sources the chart reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerKind {
    Pointer,
    Brush,
    Pan,
    Wheel,
    Resize,
}

impl ListenerKind {
    const fn bit(self) -> u8 {
        match self {
            Self::Pointer => 1 << 0,
            Self::Brush => 1 << 1,
            Self::Pan => 1 << 2,
            Self::Wheel => 1 << 3,
            Self::Resize => 1 << 4,
        }
    }
}

/// Bitmask of attached listeners. Handlers of detached kinds are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttachedListeners {
    bits: u8,
}

impl AttachedListeners {
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn contains(self, kind: ListenerKind) -> bool {
        self.bits & kind.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn insert(&mut self, kind: ListenerKind) {
        self.bits |= kind.bit();
    }

    pub fn remove(&mut self, kind: ListenerKind) {
        self.bits &= !kind.bit();
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }
}
