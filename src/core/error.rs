//=========================================================================
// Error Types
//=========================================================================
//
// Errors surfaced by configuration and by external collaborators.
//
// Only configuration errors reach callers. Collaborator errors are
// reported by ground probes and actor interactors and are degraded by
// the drag engine to the safest default (not grounded, not airborne).
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== ConfigError =========================================================

/// Invalid configuration values or an unreadable settings document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Stiffness must be finite and non-negative.
    #[error("stiffness must be finite and >= 0, got {0}")]
    InvalidStiffness(f32),

    /// Maximum pull distance must be finite and positive.
    #[error("max pull distance must be finite and > 0, got {0}")]
    InvalidMaxPullDistance(f32),

    /// Minimum pull distance must be finite and non-negative.
    #[error("min pull distance must be finite and >= 0, got {0}")]
    InvalidMinPullDistance(f32),

    /// Force multiplier must be finite.
    #[error("force multiplier must be finite, got {0}")]
    InvalidForceMultiplier(f32),

    /// Respawn depth must be finite.
    #[error("respawn depth must be finite, got {0}")]
    InvalidRespawnDepth(f32),

    /// The settings document could not be parsed.
    #[error("failed to parse drag settings: {0}")]
    Parse(#[from] toml::de::Error),
}

//=== CollaboratorError ===================================================

/// Failure reported by a ground probe or actor interactor.
///
/// The core never propagates these. Queries that fail are treated as
/// "not over ground" / "not airborne" so a release always completes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The ground query could not be evaluated.
    #[error("ground probe failed: {0}")]
    Probe(String),

    /// The actor could not answer or perform the request.
    #[error("actor interactor failed: {0}")]
    Actor(String),
}

//=========================================================================
// Tests
//=========================================================================
