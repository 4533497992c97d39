use crate::{
    foundation::core::Fps,
    foundation::error::{ModelPickError, ModelPickResult},
};

const MIN_POSITIVE: f64 = 1e-6;

/// Physical parameters of a unit spring released from rest at 0 towards 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Mass (`> 0`).
    pub mass: f64,
    /// Damping coefficient (`>= 0`).
    pub damping: f64,
    /// Stiffness (`> 0`).
    pub stiffness: f64,
    /// Cap the curve at 1 instead of letting it overshoot.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 10.0,
            stiffness: 100.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Unit-mass spring with the given damping and stiffness.
    pub fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            ..Self::default()
        }
    }

    /// Return a copy with overshoot clamping toggled.
    pub fn clamped(mut self, overshoot_clamping: bool) -> Self {
        self.overshoot_clamping = overshoot_clamping;
        self
    }

    /// Validate the physical parameters.
    pub fn validate(&self) -> ModelPickResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ModelPickError::animation("spring mass must be > 0"));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(ModelPickError::animation("spring stiffness must be > 0"));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ModelPickError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Damping ratio `zeta`; `< 1` overshoots, `1` is critical, `> 1` creeps.
    pub fn damping_ratio(&self) -> f64 {
        let (mass, damping, stiffness) = self.sanitized();
        damping / (2.0 * (stiffness * mass).sqrt())
    }

    fn sanitized(&self) -> (f64, f64, f64) {
        (
            self.mass.max(MIN_POSITIVE),
            self.damping.max(0.0),
            self.stiffness.max(MIN_POSITIVE),
        )
    }
}

/// Spring progress at `frame` frames after release.
///
/// Returns 0 for `frame <= 0` and approaches 1 with no hard stop frame. Time is measured in
/// seconds via `fps`, so the curve has the same shape at any frame rate. Out-of-range configs are
/// sanitized rather than rejected; call [`SpringConfig::validate`] to surface them.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    // `!(x > 0)` also catches NaN.
    if !(frame > 0.0) {
        return 0.0;
    }

    let (mass, damping, stiffness) = config.sanitized();
    let t = fps.frames_to_secs(frame);
    let omega0 = (stiffness / mass).sqrt();
    let zeta = damping / (2.0 * (stiffness * mass).sqrt());

    let value = 1.0 + displacement(t, omega0, zeta);
    if config.overshoot_clamping {
        value.min(1.0)
    } else {
        value
    }
}

/// Offset from the rest position for a spring starting at -1 with zero velocity.
fn displacement(t: f64, omega0: f64, zeta: f64) -> f64 {
    if (zeta - 1.0).abs() < 1e-9 {
        return -(1.0 + omega0 * t) * (-omega0 * t).exp();
    }

    if zeta < 1.0 {
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega0 * t).exp();
        let phase = omega_d * t;
        return envelope * (-phase.cos() - (zeta * omega0 / omega_d) * phase.sin());
    }

    let s = (zeta * zeta - 1.0).sqrt();
    let r1 = -omega0 * (zeta - s);
    let r2 = -omega0 * (zeta + s);
    let c1 = r2 / (r1 - r2);
    let c2 = -r1 / (r1 - r2);
    c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
}

/// First frame from which the spring stays within `tolerance` of 1 through `limit`.
///
/// Returns `None` when the spring has not settled by `limit`.
pub fn settle_frame(fps: Fps, config: SpringConfig, tolerance: f64, limit: u64) -> Option<u64> {
    let within = |f: u64| (spring(f as f64, fps, config) - 1.0).abs() <= tolerance;
    if !within(limit) {
        return None;
    }
    let mut f = limit;
    while f > 0 && within(f - 1) {
        f -= 1;
    }
    Some(f)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
