use crate::{
    animation::ease::Ease,
    foundation::error::{PromoError, PromoResult},
};

/// Behavior for inputs outside a breakpoint table, chosen per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the edge output.
    Clamp,
    /// Continue the edge segment's slope.
    #[default]
    Extend,
    /// Return the input unchanged.
    Identity,
    /// Repeat the edge segment cyclically.
    Wrap,
}

/// Per-call interpolation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Mode for inputs below the first breakpoint.
    #[serde(default)]
    pub left: Extrapolate,
    /// Mode for inputs above the last breakpoint.
    #[serde(default)]
    pub right: Extrapolate,
    /// Easing applied inside each segment.
    #[serde(default)]
    pub ease: Ease,
}

impl InterpolateOpts {
    /// Extend on both sides, linear.
    pub const fn extend() -> Self {
        Self {
            left: Extrapolate::Extend,
            right: Extrapolate::Extend,
            ease: Ease::Linear,
        }
    }

    /// Clamp on both sides, linear.
    pub const fn clamp() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            ease: Ease::Linear,
        }
    }

    /// Extend on the left, clamp on the right.
    pub const fn clamp_right() -> Self {
        Self {
            left: Extrapolate::Extend,
            right: Extrapolate::Clamp,
            ease: Ease::Linear,
        }
    }

    pub const fn with_left(mut self, mode: Extrapolate) -> Self {
        self.left = mode;
        self
    }

    pub const fn with_right(mut self, mode: Extrapolate) -> Self {
        self.right = mode;
        self
    }

    pub const fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Check that a breakpoint table is usable: equal lengths, at least two points, finite values
/// and strictly increasing inputs.
pub fn validate_breakpoints(input_range: &[f64], output_range: &[f64]) -> PromoResult<()> {
    if input_range.len() != output_range.len() {
        return Err(PromoError::animation(format!(
            "invalid breakpoints: {} inputs but {} outputs",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.len() < 2 {
        return Err(PromoError::animation(
            "invalid breakpoints: at least two points are required",
        ));
    }
    if let Some(bad) = input_range
        .iter()
        .chain(output_range)
        .find(|v| !v.is_finite())
    {
        return Err(PromoError::animation(format!(
            "invalid breakpoints: non-finite value {bad}"
        )));
    }
    if let Some(w) = input_range.windows(2).find(|w| w[1] <= w[0]) {
        return Err(PromoError::animation(format!(
            "invalid breakpoints: inputs must be strictly increasing, got {} then {}",
            w[0], w[1]
        )));
    }
    Ok(())
}

/// Map `input` through the piecewise-linear table `input_range -> output_range`.
///
/// Tables are authored as literals next to the call site. An invalid table panics in debug
/// builds; release builds clamp to the longest valid leading segment run instead of producing
/// garbage. Use [`Breakpoints`] to validate a table once up front.
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> f64 {
    let checked = validate_breakpoints(input_range, output_range);
    debug_assert!(checked.is_ok(), "{checked:?}");
    if checked.is_err() {
        return interpolate_degraded(input, input_range, output_range, opts);
    }
    interpolate_unchecked(input, input_range, output_range, opts)
}

fn interpolate_unchecked(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> f64 {
    let n = input_range.len();
    let idx = input_range.partition_point(|&x| x < input);
    if idx < n && input_range[idx] == input {
        return output_range[idx];
    }

    let seg = if idx == 0 {
        0
    } else if idx >= n {
        n - 2
    } else {
        idx - 1
    };
    interpolate_segment(
        input,
        (input_range[seg], input_range[seg + 1]),
        (output_range[seg], output_range[seg + 1]),
        opts,
    )
}

fn interpolate_degraded(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> f64 {
    let n = input_range.len().min(output_range.len());
    match n {
        0 => return input,
        1 => return output_range[0],
        _ => {}
    }

    let mut valid = 1;
    while valid < n
        && input_range[valid].is_finite()
        && input_range[valid] > input_range[valid - 1]
    {
        valid += 1;
    }
    if valid < 2 {
        return output_range[0];
    }

    let opts = InterpolateOpts {
        left: Extrapolate::Clamp,
        right: Extrapolate::Clamp,
        ..opts
    };
    interpolate_unchecked(input, &input_range[..valid], &output_range[..valid], opts)
}

fn interpolate_segment(
    input: f64,
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
    opts: InterpolateOpts,
) -> f64 {
    let mut x = input;
    if x < x0 {
        match opts.left {
            Extrapolate::Clamp => return y0,
            Extrapolate::Identity => return x,
            Extrapolate::Wrap => x = wrap(x, x0, x1),
            Extrapolate::Extend => {}
        }
    }
    if x > x1 {
        match opts.right {
            Extrapolate::Clamp => return y1,
            Extrapolate::Identity => return x,
            Extrapolate::Wrap => x = wrap(x, x0, x1),
            Extrapolate::Extend => {}
        }
    }

    if y0 == y1 {
        return y0;
    }

    let t = (x - x0) / (x1 - x0);
    // Extension past a segment is linear; easing only shapes the inside.
    let t = if (0.0..=1.0).contains(&t) {
        opts.ease.apply(t)
    } else {
        t
    };
    lerp(y0, y1, t)
}

fn wrap(x: f64, x0: f64, x1: f64) -> f64 {
    x0 + (x - x0).rem_euclid(x1 - x0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t == 1.0 { b } else { a + (b - a) * t }
}

/// Raw serialized form of [`Breakpoints`].
#[derive(Clone, Debug, serde::Deserialize)]
struct BreakpointTable {
    input: Vec<f64>,
    output: Vec<f64>,
    #[serde(default)]
    opts: InterpolateOpts,
}

/// A validated breakpoint table with its interpolation options.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "BreakpointTable")]
pub struct Breakpoints {
    input: Vec<f64>,
    output: Vec<f64>,
    opts: InterpolateOpts,
}

impl Breakpoints {
    /// Validate and build a table; extends on both sides by default.
    pub fn new(input: impl Into<Vec<f64>>, output: impl Into<Vec<f64>>) -> PromoResult<Self> {
        let input = input.into();
        let output = output.into();
        validate_breakpoints(&input, &output)?;
        Ok(Self {
            input,
            output,
            opts: InterpolateOpts::extend(),
        })
    }

    /// Build a table from constants already known to be valid. Checked in debug builds only.
    pub(crate) fn new_unchecked(input: Vec<f64>, output: Vec<f64>) -> Self {
        debug_assert!(
            validate_breakpoints(&input, &output).is_ok(),
            "invalid breakpoint constants"
        );
        Self {
            input,
            output,
            opts: InterpolateOpts::extend(),
        }
    }

    /// Replace the interpolation options.
    pub fn with_opts(mut self, opts: InterpolateOpts) -> Self {
        self.opts = opts;
        self
    }

    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn output(&self) -> &[f64] {
        &self.output
    }

    pub fn opts(&self) -> InterpolateOpts {
        self.opts
    }

    /// Last input breakpoint.
    pub fn end(&self) -> f64 {
        self.input[self.input.len() - 1]
    }

    /// Sample the table; never fails since the table was validated at construction.
    pub fn sample(&self, input: f64) -> f64 {
        interpolate_unchecked(input, &self.input, &self.output, self.opts)
    }
}

impl TryFrom<BreakpointTable> for Breakpoints {
    type Error = PromoError;

    fn try_from(raw: BreakpointTable) -> PromoResult<Self> {
        Ok(Self::new(raw.input, raw.output)?.with_opts(raw.opts))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
