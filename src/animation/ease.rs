/// Base curve shape used by [`Ease`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// `t^2`.
    Quad,
    /// `t^3`.
    Cubic,
    /// Quarter sine wave.
    Sine,
}

impl Curve {
    fn ease_in(self, t: f64) -> f64 {
        match self {
            Self::Quad => t * t,
            Self::Cubic => t * t * t,
            Self::Sine => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
        }
    }
}

/// Easing applied to the normalized position inside one interpolation segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// Slow start.
    In(Curve),
    /// Slow end (mirror of `In`).
    Out(Curve),
    /// Slow start and end; `In` for the first half, `Out` for the second.
    InOut(Curve),
}

impl Ease {
    /// Map `t` in `[0, 1]` to eased progress. Inputs outside the unit interval are clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::In(c) => c.ease_in(t),
            Self::Out(c) => 1.0 - c.ease_in(1.0 - t),
            Self::InOut(c) => {
                if t < 0.5 {
                    c.ease_in(t * 2.0) / 2.0
                } else {
                    1.0 - c.ease_in((1.0 - t) * 2.0) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
