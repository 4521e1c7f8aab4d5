//=========================================================================
// Tension Model
//=========================================================================
//
// Maps a raw pull to an effective (tensioned) target.
//
//   dir       = raw - anchor
//   clamped   = clamp(|dir|, MIN_PULL, max_pull_distance)
//   effective = clamped / (1 + stiffness * clamped)     (stiffness > 0)
//   target    = anchor + normalize(dir) * effective
//
// Pure and deterministic. The effective distance grows monotonically
// and never exceeds the clamped distance.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use super::config::TensionConfig;

//=== Constants ===========================================================

/// Lower bound applied to the pull distance before the tension curve.
pub const MIN_PULL: f32 = 1e-4;

/// Pulls shorter than this are treated as no pull at all.
const ZERO_PULL_EPSILON: f32 = 1e-6;

//=== Public API ==========================================================

/// Applies tension to `raw` relative to `anchor`.
///
/// Returns `raw` unchanged when tension is disabled, no anchor exists,
/// or `raw` sits on the anchor.
pub fn apply(anchor: Option<Vec3>, raw: Vec3, config: &TensionConfig) -> Vec3 {
    let Some(anchor) = anchor else {
        return raw;
    };
    if !config.enabled() {
        return raw;
    }

    let dir = raw - anchor;
    let distance = dir.length();
    if distance <= ZERO_PULL_EPSILON {
        return raw;
    }

    anchor + (dir / distance) * effective_distance(distance, config)
}

/// Tensioned length for a raw pull of `distance` world units.
///
/// The input is raised to at least `MIN_PULL` and then capped at
/// `max_pull_distance`, so pulls beyond the maximum all map to the same
/// value. A maximum below `MIN_PULL` wins over the floor.
pub fn effective_distance(distance: f32, config: &TensionConfig) -> f32 {
    let clamped = distance.max(MIN_PULL).min(config.max_pull_distance());
    let stiffness = config.stiffness();

    if stiffness > 0.0 {
        clamped / (1.0 + stiffness * clamped)
    } else {
        clamped
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn tension(stiffness: f32, max: f32) -> TensionConfig {
        TensionConfig::new(stiffness, max).unwrap()
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{} != {}", a, b);
    }

    //--- Pass-through Cases -----------------------------------------------

    #[test]
    fn disabled_returns_raw() {
        let raw = Vec3::new(5.0, 2.0, 0.0);
        let out = apply(Some(Vec3::ZERO), raw, &TensionConfig::disabled());
        assert_eq!(out, raw);
    }

    #[test]
    fn missing_anchor_returns_raw() {
        let raw = Vec3::new(5.0, 2.0, 0.0);
        assert_eq!(apply(None, raw, &tension(1.0, 3.0)), raw);
    }

    #[test]
    fn zero_pull_returns_raw() {
        let anchor = Vec3::new(1.0, 1.0, 0.0);
        assert_eq!(apply(Some(anchor), anchor, &tension(1.0, 3.0)), anchor);
    }

    //--- Curve Shape ------------------------------------------------------

    #[test]
    fn zero_stiffness_is_clamp_only() {
        let config = tension(0.0, 2.0);
        let out = apply(Some(Vec3::ZERO), Vec3::new(1.5, 0.0, 0.0), &config);
        assert_close(out.x, 1.5);

        let out = apply(Some(Vec3::ZERO), Vec3::new(0.0, 8.0, 0.0), &config);
        assert_close(out.y, 2.0);
    }

    #[test]
    fn stiffness_follows_diminishing_curve() {
        let config = tension(1.0, 10.0);
        let out = apply(Some(Vec3::ZERO), Vec3::new(0.0, 2.0, 0.0), &config);
        // 2 / (1 + 1 * 2)
        assert_close(out.y, 2.0 / 3.0);
        assert_close(out.x, 0.0);
    }

    #[test]
    fn direction_is_preserved_relative_to_anchor() {
        let anchor = Vec3::new(1.0, 1.0, 0.0);
        let raw = Vec3::new(4.0, 5.0, 0.0); // dir (3, 4), length 5
        let out = apply(Some(anchor), raw, &tension(0.5, 10.0));

        let pulled = out - anchor;
        let expected_len = 5.0 / (1.0 + 0.5 * 5.0);
        assert_close(pulled.length(), expected_len);
        assert_close(pulled.x / pulled.length(), 0.6);
        assert_close(pulled.y / pulled.length(), 0.8);
    }

    #[test]
    fn effective_distance_is_monotonic_and_bounded() {
        let config = tension(0.8, 5.0);
        let mut previous = 0.0;

        for step in 0..=200 {
            let distance = step as f32 * 0.05;
            let clamped = distance.clamp(MIN_PULL, config.max_pull_distance());
            let effective = effective_distance(distance, &config);

            assert!(effective >= previous, "curve decreased at {}", distance);
            assert!(effective <= clamped + 1e-6, "{} exceeds {}", effective, clamped);
            previous = effective;
        }
    }

    #[test]
    fn pulls_beyond_max_use_clamped_distance() {
        let config = tension(2.0, 1.0);
        let at_max = effective_distance(1.0, &config);

        assert_close(effective_distance(3.0, &config), at_max);
        assert_close(effective_distance(100.0, &config), at_max);
        assert_close(at_max, 1.0 / 3.0);
    }

    #[test]
    fn maximum_below_floor_caps_the_pull() {
        let config = tension(0.0, 5e-5);
        let out = apply(Some(Vec3::ZERO), Vec3::X, &config);
        assert_close(out.x, 5e-5);
        assert_close(effective_distance(1e-6, &config), 5e-5);
    }
}
