use crate::{
    animation::ease::Ease,
    foundation::error::{ModelPickError, ModelPickResult},
};

/// What to do with inputs outside the breakpoint domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the nearest endpoint output.
    #[default]
    Clamp,
    /// Continue the slope of the outermost segment.
    Extend,
}

/// Per-call interpolation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Policy below the first input breakpoint.
    #[serde(default)]
    pub left: Extrapolate,
    /// Policy above the last input breakpoint.
    #[serde(default)]
    pub right: Extrapolate,
    /// Easing applied inside each in-range segment.
    #[serde(default)]
    pub ease: Ease,
}

impl InterpolateOpts {
    /// Clamp on both sides, linear segments.
    pub const CLAMP: Self = Self {
        left: Extrapolate::Clamp,
        right: Extrapolate::Clamp,
        ease: Ease::Linear,
    };

    /// Extend on both sides, linear segments.
    pub const EXTEND: Self = Self {
        left: Extrapolate::Extend,
        right: Extrapolate::Extend,
        ease: Ease::Linear,
    };

    /// Replace the segment easing.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Map `input` through a piecewise-linear table.
///
/// `range_in` must be non-decreasing; the array types force both tables to the same length.
/// An input exactly on a breakpoint returns that breakpoint's output. Coincident breakpoints act
/// as an instantaneous step (the later output wins at the shared frame). A single breakpoint is a
/// constant and an empty table is the identity.
///
/// ```
/// use modelpick::{InterpolateOpts, interpolate};
///
/// let opts = InterpolateOpts::CLAMP;
/// assert_eq!(interpolate(-5.0, [0.0, 10.0], [0.0, 100.0], opts), 0.0);
/// assert_eq!(interpolate(5.0, [0.0, 10.0], [0.0, 100.0], opts), 50.0);
/// assert_eq!(interpolate(20.0, [0.0, 10.0], [0.0, 100.0], opts), 100.0);
/// ```
pub fn interpolate<const N: usize>(
    input: f64,
    range_in: [f64; N],
    range_out: [f64; N],
    opts: InterpolateOpts,
) -> f64 {
    sample_table(input, &range_in, &range_out, opts)
}

/// [`interpolate`] with [`InterpolateOpts::CLAMP`], the policy every scene uses.
pub fn interpolate_clamped<const N: usize>(
    input: f64,
    range_in: [f64; N],
    range_out: [f64; N],
) -> f64 {
    sample_table(input, &range_in, &range_out, InterpolateOpts::CLAMP)
}

fn sample_table(input: f64, xs: &[f64], ys: &[f64], opts: InterpolateOpts) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len().min(ys.len());
    if input.is_nan() {
        return input;
    }
    match n {
        0 => return input,
        1 => return ys[0],
        _ => {}
    }

    let last = n - 1;
    if input < xs[0] {
        return match opts.left {
            Extrapolate::Clamp => ys[0],
            Extrapolate::Extend => along(xs[0], xs[1], ys[0], ys[1], input, ys[0]),
        };
    }
    if input > xs[last] {
        return match opts.right {
            Extrapolate::Clamp => ys[last],
            Extrapolate::Extend => {
                along(xs[last - 1], xs[last], ys[last - 1], ys[last], input, ys[last])
            }
        };
    }

    // input >= xs[0] here, so idx >= 1.
    let idx = xs[..n].partition_point(|x| *x <= input);
    if idx >= n {
        return ys[last];
    }

    let a = idx - 1;
    if input == xs[a] {
        return ys[a];
    }
    let width = xs[idx] - xs[a];
    if width <= 0.0 {
        return ys[idx];
    }

    let t = opts.ease.apply((input - xs[a]) / width);
    ys[a] + (ys[idx] - ys[a]) * t
}

/// Linear continuation of the segment `(x0,y0)-(x1,y1)`; zero-width segments hold `flat`.
fn along(x0: f64, x1: f64, y0: f64, y1: f64, input: f64, flat: f64) -> f64 {
    let width = x1 - x0;
    if width <= 0.0 {
        return flat;
    }
    y0 + (y1 - y0) * (input - x0) / width
}

/// Owned, validated breakpoint table for runtime-provided keyframes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Breakpoints {
    input: Vec<f64>,
    output: Vec<f64>,
    #[serde(default)]
    opts: InterpolateOpts,
}

impl Breakpoints {
    /// Build and validate a table with clamp extrapolation.
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> ModelPickResult<Self> {
        let bp = Self {
            input,
            output,
            opts: InterpolateOpts::CLAMP,
        };
        bp.validate()?;
        Ok(bp)
    }

    /// Replace the interpolation options.
    pub fn with_opts(mut self, opts: InterpolateOpts) -> Self {
        self.opts = opts;
        self
    }

    /// Check length parity, finiteness and ordering.
    ///
    /// Deserialized tables are not validated implicitly.
    pub fn validate(&self) -> ModelPickResult<()> {
        if self.input.len() != self.output.len() {
            return Err(ModelPickError::animation(format!(
                "breakpoint tables differ in length ({} inputs, {} outputs)",
                self.input.len(),
                self.output.len()
            )));
        }
        if self.input.is_empty() {
            return Err(ModelPickError::animation(
                "breakpoint table must have at least one entry",
            ));
        }
        if self
            .input
            .iter()
            .chain(self.output.iter())
            .any(|v| !v.is_finite())
        {
            return Err(ModelPickError::animation("breakpoints must be finite"));
        }
        if !self.input.windows(2).all(|w| w[0] <= w[1]) {
            return Err(ModelPickError::animation(
                "input breakpoints must be non-decreasing",
            ));
        }
        Ok(())
    }

    /// Input breakpoints.
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Output breakpoints.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Interpolation options in effect.
    pub fn opts(&self) -> InterpolateOpts {
        self.opts
    }

    /// Sample the table at `input`.
    pub fn sample(&self, input: f64) -> f64 {
        sample_table(input, &self.input, &self.output, self.opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
