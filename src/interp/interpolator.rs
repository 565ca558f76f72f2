use crate::foundation::{
    core::{Shape, Value},
    error::{RoughwalkError, RoughwalkResult},
    math::{lerp, linspace},
};

/// Curve family fitted through the control points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpMode {
    /// Piecewise-linear segments between adjacent points.
    Linear,
    /// Not-a-knot cubic spline.
    Cubic,
}

impl InterpMode {
    /// Fewest control points the mode can fit.
    pub fn min_points(self) -> usize {
        match self {
            Self::Linear => 2,
            Self::Cubic => 4,
        }
    }
}

/// A curve through an ordered set of control points.
///
/// Each component of a vector-valued point set is fitted independently over the same knots.
/// Queries outside the fitted domain are clamped to the nearest end knot.
#[derive(Clone, Debug)]
pub struct Interpolator {
    mode: InterpMode,
    shape: Shape,
    xs: Vec<f64>,
    // ys[component][knot]
    ys: Vec<Vec<f64>>,
    // Second derivatives at the knots, same layout as `ys`. Empty in linear mode.
    m: Vec<Vec<f64>>,
}

impl Interpolator {
    /// Fit `mode` through `points`, given as `(x, value)` pairs with strictly increasing `x`.
    pub fn new(points: &[(f64, Value)], mode: InterpMode) -> RoughwalkResult<Self> {
        check_len(points.len(), mode)?;

        let shape = points[0].1.shape();
        let arity = shape.arity();
        let mut xs = Vec::with_capacity(points.len());
        let mut ys = vec![Vec::with_capacity(points.len()); arity];
        for (i, (x, v)) in points.iter().enumerate() {
            if v.shape() != shape {
                return Err(RoughwalkError::validation(format!(
                    "control point {i} has {} components, expected {arity}",
                    v.arity()
                )));
            }
            xs.push(*x);
            for (c, comp) in v.components().iter().enumerate() {
                ys[c].push(*comp);
            }
        }

        Self::from_parts(xs, shape, ys, mode)
    }

    /// Fit `mode` through `values` placed evenly on `[0, 1]`.
    pub fn parametric(values: &[Value], mode: InterpMode) -> RoughwalkResult<Self> {
        let xs = linspace(0.0, 1.0, values.len());
        let points: Vec<(f64, Value)> = xs.into_iter().zip(values.iter().cloned()).collect();
        Self::new(&points, mode)
    }

    /// Scalar fast path used by the noise octaves.
    pub(crate) fn scalar(xs: Vec<f64>, ys: Vec<f64>, mode: InterpMode) -> RoughwalkResult<Self> {
        if xs.len() != ys.len() {
            return Err(RoughwalkError::mismatched_lengths(format!(
                "{} knots but {} values",
                xs.len(),
                ys.len()
            )));
        }
        check_len(xs.len(), mode)?;
        Self::from_parts(xs, Shape::Scalar, vec![ys], mode)
    }

    fn from_parts(
        xs: Vec<f64>,
        shape: Shape,
        ys: Vec<Vec<f64>>,
        mode: InterpMode,
    ) -> RoughwalkResult<Self> {
        if let Some(i) = xs.iter().position(|x| !x.is_finite()) {
            return Err(RoughwalkError::validation(format!(
                "control point {i} has a non-finite x"
            )));
        }
        if let Some(i) = xs.windows(2).position(|w| w[0] >= w[1]) {
            return Err(RoughwalkError::validation(format!(
                "control point x values must be strictly increasing (at index {})",
                i + 1
            )));
        }
        if ys.iter().flatten().any(|y| !y.is_finite()) {
            return Err(RoughwalkError::validation(
                "control point values must be finite",
            ));
        }

        let m = match mode {
            InterpMode::Linear => Vec::new(),
            InterpMode::Cubic => {
                let system = NotAKnot::new(&xs);
                ys.iter()
                    .map(|col| system.second_derivatives(&xs, col))
                    .collect::<RoughwalkResult<Vec<_>>>()?
            }
        };

        Ok(Self {
            mode,
            shape,
            xs,
            ys,
            m,
        })
    }

    /// Interpolation mode this curve was fitted with.
    pub fn mode(&self) -> InterpMode {
        self.mode
    }

    /// `(min x, max x)` of the control points.
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluate the curve at `x`, clamped into [`Self::domain`].
    pub fn eval(&self, x: f64) -> Value {
        let (i, x) = self.locate(x);
        let comps = (0..self.ys.len())
            .map(|c| self.eval_component(c, i, x))
            .collect();
        self.shape.assemble(comps)
    }

    /// Evaluate the first component only.
    pub(crate) fn eval_scalar(&self, x: f64) -> f64 {
        let (i, x) = self.locate(x);
        self.eval_component(0, i, x)
    }

    // Returns the segment index and the clamped query.
    fn locate(&self, x: f64) -> (usize, f64) {
        let (lo, hi) = self.domain();
        let x = if x.is_nan() { lo } else { x.clamp(lo, hi) };
        let idx = self.xs.partition_point(|k| *k <= x);
        (idx.clamp(1, self.xs.len() - 1) - 1, x)
    }

    fn eval_component(&self, c: usize, i: usize, x: f64) -> f64 {
        let ys = &self.ys[c];
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        if x == x0 {
            return ys[i];
        }
        if x == x1 {
            return ys[i + 1];
        }

        let h = x1 - x0;
        match self.mode {
            InterpMode::Linear => lerp(ys[i], ys[i + 1], (x - x0) / h),
            InterpMode::Cubic => {
                let m = &self.m[c];
                let a = x1 - x;
                let b = x - x0;
                m[i] * a * a * a / (6.0 * h)
                    + m[i + 1] * b * b * b / (6.0 * h)
                    + (ys[i] / h - m[i] * h / 6.0) * a
                    + (ys[i + 1] / h - m[i + 1] * h / 6.0) * b
            }
        }
    }
}

fn check_len(got: usize, mode: InterpMode) -> RoughwalkResult<()> {
    let need = mode.min_points();
    if got < need {
        return Err(RoughwalkError::InsufficientPoints { got, need });
    }
    Ok(())
}

/// Tridiagonal system for the interior second derivatives `M[1..n-1]` of a not-a-knot spline.
///
/// The end conditions `M[0]` and `M[n-1]` are folded into the first and last rows. The matrix
/// depends only on the knots, so it is shared across components.
struct NotAKnot {
    sub: Vec<f64>,
    diag: Vec<f64>,
    sup: Vec<f64>,
}

impl NotAKnot {
    fn new(xs: &[f64]) -> Self {
        let n = xs.len();
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let k = n - 2;

        let mut sub = vec![0.0; k];
        let mut diag = vec![0.0; k];
        let mut sup = vec![0.0; k];
        for r in 0..k {
            let j = r + 1;
            sub[r] = h[j - 1];
            diag[r] = 2.0 * (h[j - 1] + h[j]);
            sup[r] = h[j];
        }

        let (h0, h1) = (h[0], h[1]);
        diag[0] = (h0 + h1) * (h0 + 2.0 * h1) / h1;
        sup[0] = (h1 * h1 - h0 * h0) / h1;

        let (a, b) = (h[n - 3], h[n - 2]);
        sub[k - 1] = (a * a - b * b) / a;
        diag[k - 1] = (a + b) * (2.0 * a + b) / a;

        Self { sub, diag, sup }
    }

    fn second_derivatives(&self, xs: &[f64], ys: &[f64]) -> RoughwalkResult<Vec<f64>> {
        let n = xs.len();
        let k = n - 2;
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let d: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();
        let rhs: Vec<f64> = (1..=k).map(|j| 6.0 * (d[j] - d[j - 1])).collect();

        // Thomas algorithm.
        let mut c_prime = vec![0.0; k];
        let mut d_prime = vec![0.0; k];
        let mut prev_c = 0.0;
        let mut prev_d = 0.0;
        for r in 0..k {
            let sub = if r == 0 { 0.0 } else { self.sub[r] };
            let denom = self.diag[r] - sub * prev_c;
            if !denom.is_finite() || denom == 0.0 {
                return Err(RoughwalkError::validation(
                    "cubic spline system is singular for these knots",
                ));
            }
            c_prime[r] = if r + 1 < k { self.sup[r] / denom } else { 0.0 };
            d_prime[r] = (rhs[r] - sub * prev_d) / denom;
            prev_c = c_prime[r];
            prev_d = d_prime[r];
        }

        let mut inner = vec![0.0; k];
        inner[k - 1] = d_prime[k - 1];
        for r in (0..k - 1).rev() {
            inner[r] = d_prime[r] - c_prime[r] * inner[r + 1];
        }

        let mut m = Vec::with_capacity(n);
        let (h0, h1) = (h[0], h[1]);
        m.push(((h0 + h1) * inner[0] - h0 * inner[1]) / h1);
        m.extend_from_slice(&inner);
        let (a, b) = (h[n - 3], h[n - 2]);
        m.push(((a + b) * inner[k - 1] - b * inner[k - 2]) / a);
        Ok(m)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/interpolator.rs"]
mod tests;
