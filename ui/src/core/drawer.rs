//! Lifecycle of the temporary (mobile) navigation drawer.
//!
//! ```text
//!   Closed --Open/Toggle--> Open --Close/Toggle--> Closing --TransitionEnd--> Closed
//! ```
//!
//! `Closing` covers the collapse animation: the drawer already reports
//! `is_open() == false` so the slide-out starts immediately, and open requests
//! are ignored until the transition-end signal arrives so the panel is never
//! re-opened mid-collapse. Every other event/state pair leaves the state
//! unchanged. The permanent (desktop) drawer does not consult this machine.

/// Upper bound for the collapse slide (`--transition-drawer` is 225ms). If the
/// slide never reports its end, e.g. it was cancelled by a breakpoint change,
/// the shell issues `TransitionEnd` itself after this long.
pub const COLLAPSE_TIMEOUT_MS: u64 = 350;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    /// Explicit open request.
    Open,
    /// App bar menu button.
    Toggle,
    /// Backdrop click or navigation from inside the drawer.
    Close,
    /// The slide transition finished.
    TransitionEnd,
}

impl DrawerState {
    pub fn apply(self, event: DrawerEvent) -> Self {
        match (self, event) {
            (Self::Closed, DrawerEvent::Open | DrawerEvent::Toggle) => Self::Open,
            (Self::Open, DrawerEvent::Close | DrawerEvent::Toggle) => Self::Closing,
            (Self::Closing, DrawerEvent::TransitionEnd) => Self::Closed,
            (state, _) => state,
        }
    }

    /// Next state, or `None` when `event` leaves the machine where it is.
    pub fn transition(self, event: DrawerEvent) -> Option<Self> {
        let next = self.apply(event);
        (next != self).then_some(next)
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn is_closing(self) -> bool {
        matches!(self, Self::Closing)
    }
}

/// The two drawer presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerSurface {
    /// Slide-in drawer below the breakpoint.
    Temporary,
    /// Always-visible drawer above it.
    Permanent,
}

impl DrawerSurface {
    /// Event issued when an entry inside this surface is clicked.
    pub fn navigate_event(self) -> Option<DrawerEvent> {
        match self {
            Self::Temporary => Some(DrawerEvent::Close),
            Self::Permanent => None,
        }
    }
}
