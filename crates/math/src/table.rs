//! Uniformly sampled lookup tables
//!
//! A [`SampleTable`] holds `N` samples of a function at `origin + i * step`.
//! Tables are built in `const` context and stored as `static` items, so they
//! are complete before any caller can read them and immutable afterwards.
//!
//! # Example
//!
//! ```rust
//! use altair_math::table::SampleTable;
//!
//! const RAMP: SampleTable<5> = SampleTable::new(0.0, 0.25, [0.0, 1.0, 2.0, 3.0, 4.0]);
//!
//! assert_eq!(RAMP.nearest_index(0.3), 1);
//! assert_eq!(RAMP.node(2), 0.5);
//! assert_eq!(RAMP.lookup_linear(0.375), 1.5);
//! ```

/// Immutable table of `N` samples taken at a fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleTable<const N: usize> {
    origin: f64,
    step: f64,
    inv_step: f64,
    values: [f64; N],
}

impl<const N: usize> SampleTable<N> {
    /// Wrap pre-computed samples taken at `origin + i * step`.
    ///
    /// `step` must be positive; `values[i]` is the sample at node `i`.
    pub const fn new(origin: f64, step: f64, values: [f64; N]) -> Self {
        Self {
            origin,
            step,
            inv_step: 1.0 / step,
            values,
        }
    }

    /// Number of samples.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// True for the degenerate zero-length table.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Abscissa of the first sample.
    #[inline]
    pub const fn origin(&self) -> f64 {
        self.origin
    }

    /// Distance between adjacent samples.
    #[inline]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// All samples.
    #[inline]
    pub const fn values(&self) -> &[f64; N] {
        &self.values
    }

    /// Abscissa of sample `i`.
    #[inline]
    pub const fn node(&self, i: usize) -> f64 {
        self.origin + i as f64 * self.step
    }

    /// Sample `i`, clamped to the last sample.
    #[inline(always)]
    pub fn get(&self, i: usize) -> f64 {
        self.values[i.min(N - 1)]
    }

    /// Index of the node nearest to `x`, clamped to `[0, N - 1]`.
    ///
    /// NaN maps to index 0.
    #[inline(always)]
    pub fn nearest_index(&self, x: f64) -> usize {
        let position = (x - self.origin) * self.inv_step + 0.5;
        if position >= 0.0 {
            // `as` saturates, so huge positions land on the last node.
            (position as usize).min(N - 1)
        } else {
            0
        }
    }

    /// Piecewise linear interpolation between the two nodes around `x`,
    /// clamped to the table ends.
    #[inline]
    pub fn lookup_linear(&self, x: f64) -> f64 {
        let position = (x - self.origin) * self.inv_step;
        if position.is_nan() || position <= 0.0 {
            return self.values[0];
        }
        let i0 = position as usize;
        if i0 >= N - 1 {
            return self.values[N - 1];
        }
        let frac = position - i0 as f64;
        let y0 = self.values[i0];
        let y1 = self.values[i0 + 1];
        y0 + frac * (y1 - y0)
    }
}
