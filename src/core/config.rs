//=========================================================================
// Drag Configuration
//=========================================================================
//
// Immutable tuning values for tension, slingshot release and the drag
// engine itself.
//
// Construction:
//   TensionConfig::new() / SlingshotConfig::new()  → validated values
//   DragSettings::new().with_*()                   → fluent assembly
//   DragSettings::from_toml_str()                  → load + validate
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::error::ConfigError;

//=== TensionConfig =======================================================

/// Nonlinear resistance applied to the raw pull.
///
/// Values are validated on construction and cannot be changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TensionConfig {
    enabled: bool,
    stiffness: f32,
    max_pull_distance: f32,
}

impl TensionConfig {
    /// Creates an enabled tension config.
    ///
    /// `stiffness` must be `>= 0` (0 means linear, clamped only) and
    /// `max_pull_distance` must be `> 0`.
    pub fn new(stiffness: f32, max_pull_distance: f32) -> Result<Self, ConfigError> {
        let config = Self {
            enabled: true,
            stiffness,
            max_pull_distance,
        };
        config.validate()?;
        Ok(config)
    }

    /// Tension turned off: the effective target always equals the raw target.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    pub fn max_pull_distance(&self) -> f32 {
        self.max_pull_distance
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.stiffness.is_finite() || self.stiffness < 0.0 {
            return Err(ConfigError::InvalidStiffness(self.stiffness));
        }
        if !self.max_pull_distance.is_finite() || self.max_pull_distance <= 0.0 {
            return Err(ConfigError::InvalidMaxPullDistance(self.max_pull_distance));
        }
        Ok(())
    }
}

impl Default for TensionConfig {
    /// Enabled, stiffness 0.5, max pull 3.0 world units.
    fn default() -> Self {
        Self {
            enabled: true,
            stiffness: 0.5,
            max_pull_distance: 3.0,
        }
    }
}

//=== SlingshotConfig =====================================================

/// Converts the pull at release into a launch velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlingshotConfig {
    enabled: bool,
    force_multiplier: f32,
    min_pull_distance: f32,
}

impl SlingshotConfig {
    /// Creates an enabled slingshot config.
    ///
    /// Pulls shorter than `min_pull_distance` release without a launch.
    pub fn new(force_multiplier: f32, min_pull_distance: f32) -> Result<Self, ConfigError> {
        let config = Self {
            enabled: true,
            force_multiplier,
            min_pull_distance,
        };
        config.validate()?;
        Ok(config)
    }

    /// Slingshot turned off: releases never compute a launch vector.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn force_multiplier(&self) -> f32 {
        self.force_multiplier
    }

    pub fn min_pull_distance(&self) -> f32 {
        self.min_pull_distance
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.force_multiplier.is_finite() {
            return Err(ConfigError::InvalidForceMultiplier(self.force_multiplier));
        }
        if !self.min_pull_distance.is_finite() || self.min_pull_distance < 0.0 {
            return Err(ConfigError::InvalidMinPullDistance(self.min_pull_distance));
        }
        Ok(())
    }
}

impl Default for SlingshotConfig {
    /// Enabled, multiplier 10, minimum pull 0.1 world units.
    fn default() -> Self {
        Self {
            enabled: true,
            force_multiplier: 10.0,
            min_pull_distance: 0.1,
        }
    }
}

//=== DragSettings ========================================================

/// Complete drag engine configuration.
///
/// # Default Values
///
/// - **tension**: [`TensionConfig::default`]
/// - **slingshot**: [`SlingshotConfig::default`]
/// - **prevent_start_over_ground**: true
/// - **respawn_depth**: 10.0
///
/// # Examples
///
/// ```
/// use drag_launch::core::config::{DragSettings, SlingshotConfig, TensionConfig};
///
/// let settings = DragSettings::new()
///     .with_tension(TensionConfig::disabled())
///     .with_slingshot(SlingshotConfig::new(12.0, 0.05).unwrap())
///     .with_prevent_start_over_ground(false);
///
/// assert!(!settings.tension().enabled());
/// ```
///
/// Loading from TOML:
/// ```
/// use drag_launch::core::config::DragSettings;
///
/// let settings = DragSettings::from_toml_str(r#"
///     prevent_start_over_ground = false
///
///     [tension]
///     stiffness = 1.5
///     max_pull_distance = 2.0
/// "#).unwrap();
///
/// assert_eq!(settings.tension().stiffness(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    prevent_start_over_ground: bool,
    respawn_depth: f32,
    tension: TensionConfig,
    slingshot: SlingshotConfig,
}

impl DragSettings {
    /// Creates settings with default values.
    pub fn new() -> Self {
        Self {
            prevent_start_over_ground: true,
            respawn_depth: 10.0,
            tension: TensionConfig::default(),
            slingshot: SlingshotConfig::default(),
        }
    }

    /// Parses and validates settings from a TOML document.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        info!("Loaded drag settings: {:?}", settings);
        Ok(settings)
    }

    //--- Builder API ------------------------------------------------------

    pub fn with_tension(mut self, tension: TensionConfig) -> Self {
        self.tension = tension;
        self
    }

    pub fn with_slingshot(mut self, slingshot: SlingshotConfig) -> Self {
        self.slingshot = slingshot;
        self
    }

    /// Blocks drags that begin over ground.
    pub fn with_prevent_start_over_ground(mut self, prevent: bool) -> Self {
        self.prevent_start_over_ground = prevent;
        self
    }

    /// Sets the camera depth used when respawning an actor.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is not finite.
    pub fn with_respawn_depth(mut self, depth: f32) -> Self {
        assert!(depth.is_finite(), "Respawn depth must be finite, got {}", depth);
        self.respawn_depth = depth;
        self
    }

    //--- Accessors --------------------------------------------------------

    pub fn tension(&self) -> &TensionConfig {
        &self.tension
    }

    pub fn slingshot(&self) -> &SlingshotConfig {
        &self.slingshot
    }

    pub fn prevent_start_over_ground(&self) -> bool {
        self.prevent_start_over_ground
    }

    pub fn respawn_depth(&self) -> f32 {
        self.respawn_depth
    }

    /// Checks every nested value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tension.validate()?;
        self.slingshot.validate()?;
        if !self.respawn_depth.is_finite() {
            return Err(ConfigError::InvalidRespawnDepth(self.respawn_depth));
        }
        Ok(())
    }
}

impl Default for DragSettings {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================
