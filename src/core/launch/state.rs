//=========================================================================
// Launch State Machine
//=========================================================================
//
// States and the pure transition table of the launch coordinator.
//
//   (Idle,      BeginAccepted)    → Following
//   (Idle,      BeginRejected)    → Idle
//   (Following, EndAirborne)      → Disabled
//   (Following, EndGrounded)      → Idle
//   (*,         ExternalLaunched) → Disabled
//   (Disabled,  ExternalLanded)   → Idle
//   (Following | Disabled, ActorReturned) → Idle
//
// Pairs not listed are ignored. Enter / exit hooks live in the
// coordinator and run only when the state actually changes.
//
//=========================================================================

//=== LaunchState =========================================================

/// Coordinator state gating drag requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LaunchState {
    /// Waiting for a begin request.
    #[default]
    Idle,

    /// A drag is in progress; continue / end requests are forwarded.
    Following,

    /// The actor is in flight; every request is ignored until it lands.
    Disabled,
}

//=== LaunchTrigger =======================================================

/// Inputs that drive state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchTrigger {
    /// The gate passed and the drag engine started a session.
    BeginAccepted,

    /// The gate or the drag engine refused the begin request.
    BeginRejected,

    /// The drag ended and the actor is airborne.
    EndAirborne,

    /// The drag ended and the actor is not airborne.
    EndGrounded,

    /// The simulation reports the current actor was launched.
    ExternalLaunched,

    /// The simulation reports the current actor landed.
    ExternalLanded,

    /// The current pooled actor went back to the pool.
    ActorReturned,
}

impl LaunchState {
    /// Next state for `trigger`, or `None` if the trigger is ignored here.
    pub fn next(self, trigger: LaunchTrigger) -> Option<LaunchState> {
        use LaunchState::*;
        use LaunchTrigger::*;

        match (self, trigger) {
            (_, ExternalLaunched) => Some(Disabled),
            (Idle, BeginAccepted) => Some(Following),
            (Idle, BeginRejected) => Some(Idle),
            (Following, EndAirborne) => Some(Disabled),
            (Following, EndGrounded) => Some(Idle),
            (Disabled, ExternalLanded) => Some(Idle),
            (Following | Disabled, ActorReturned) => Some(Idle),
            _ => None,
        }
    }

    /// Whether begin requests are considered in this state.
    pub fn accepts_begin(self) -> bool {
        self == LaunchState::Idle
    }
}

//=========================================================================
// Tests
//=========================================================================
