//! Single-harmonic tide model.
//!
//! One cosine (the M2 constituent) pinned to a known high-water
//! instant. Time `t` is hours since the Unix epoch throughout.

use std::f64::consts::TAU;

use serde::Serialize;

use abra_core::config::TideConstants;
use abra_core::enums::TideTrend;

use crate::currents::{CurrentVector, SamplePoint, ABRA_SAMPLE_POINTS};

/// Instantaneous tide description, recomputed fresh per query.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TideState {
    /// Water height above chart datum in meters.
    pub height_m: f64,
    /// Phase within the constituent cycle, [0, 2π). Zero at high water.
    pub phase_radians: f64,
    /// Rising or falling, by the sign of the height derivative.
    pub trend: TideTrend,
    /// Position within the tidal range: 0 at low water, 1 at high.
    pub percent_of_range: f64,
}

/// The harmonic tide model. Holds only injected, immutable
/// configuration; every method is a pure function of `t`.
#[derive(Debug, Clone)]
pub struct TideModel {
    constants: TideConstants,
    sample_points: Vec<SamplePoint>,
}

impl TideModel {
    /// Model over the default Abra sample points.
    pub fn new(constants: TideConstants) -> Self {
        Self::with_sample_points(constants, ABRA_SAMPLE_POINTS.to_vec())
    }

    /// Model with a custom current sample grid.
    pub fn with_sample_points(constants: TideConstants, sample_points: Vec<SamplePoint>) -> Self {
        Self {
            constants,
            sample_points,
        }
    }

    /// The default theater model.
    pub fn abra() -> Self {
        Self::new(TideConstants::abra())
    }

    pub fn constants(&self) -> &TideConstants {
        &self.constants
    }

    pub fn sample_points(&self) -> &[SamplePoint] {
        &self.sample_points
    }

    /// Phase in radians, [0, 2π). Zero (and thus peak height) at the
    /// reference high water and every period after it; `rem_euclid`
    /// keeps instants before the reference on the same cycle.
    pub fn phase_radians(&self, t_hours: f64) -> f64 {
        let c = &self.constants;
        (t_hours - c.reference_high_water_hours).rem_euclid(c.period_hours) / c.period_hours * TAU
    }

    /// Water height above chart datum in meters.
    pub fn height(&self, t_hours: f64) -> f64 {
        let c = &self.constants;
        c.mean_level_m + c.amplitude_m * self.phase_radians(t_hours).cos()
    }

    /// Rising or falling. The sign of the height derivative
    /// (`-sin(phase)`) is the authoritative rule, not a height
    /// comparison.
    pub fn trend(&self, t_hours: f64) -> TideTrend {
        if -self.phase_radians(t_hours).sin() > 0.0 {
            TideTrend::Rising
        } else {
            TideTrend::Falling
        }
    }

    /// Position within the tidal range: `(cos(phase) + 1) / 2`, which
    /// is 0 at low water and 1 at high water by the same cosine
    /// convention as [`Self::height`].
    pub fn percentage(&self, t_hours: f64) -> f64 {
        (self.phase_radians(t_hours).cos() + 1.0) / 2.0
    }

    /// Full instantaneous state.
    pub fn state(&self, t_hours: f64) -> TideState {
        TideState {
            height_m: self.height(t_hours),
            phase_radians: self.phase_radians(t_hours),
            trend: self.trend(t_hours),
            percent_of_range: self.percentage(t_hours),
        }
    }

    /// Normalized current intensity, [0, 1]: `|sin(phase)|` — zero at
    /// high and low water, maximum at mid-tide.
    pub fn current_intensity(&self, t_hours: f64) -> f64 {
        self.phase_radians(t_hours).sin().abs()
    }

    /// Slack water: the current is too weak to matter for drift.
    pub fn is_slack(&self, t_hours: f64) -> bool {
        self.current_intensity(t_hours) < abra_core::constants::SLACK_INTENSITY_THRESHOLD
    }

    /// Surface-current vectors over the sample grid. One shared
    /// heading and intensity for the whole estuary — see
    /// [`crate::currents`] for the documented limitation.
    pub fn currents(&self, t_hours: f64) -> Vec<CurrentVector> {
        crate::currents::field(self, t_hours)
    }
}
