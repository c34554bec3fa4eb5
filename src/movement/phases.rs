//! Movement domain: tick-driven timed routines.
//!
//! Each routine is a phase advanced once per physics tick. A routine found in
//! its idle phase on resume does nothing, so clearing the phase is the
//! cancellation mechanism.

/// Dash drag ramp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    #[default]
    Idle,
    Active {
        elapsed: f32,
    },
}

impl DashPhase {
    pub fn is_active(&self) -> bool {
        matches!(self, DashPhase::Active { .. })
    }
}

/// Mid-air suspension with gravity off.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HaltPhase {
    #[default]
    Idle,
    Suspended {
        remaining: f32,
    },
}

impl HaltPhase {
    pub fn is_active(&self) -> bool {
        matches!(self, HaltPhase::Suspended { .. })
    }
}
