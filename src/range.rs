//! Validated parameter ranges
//!
//! The free functions in [`crate::utils`] accept any bounds and let degenerate
//! ones produce NaN. These types check their bounds once at construction, after
//! which every mapping is well defined.

use crate::consts::{MAX_AUDIBLE_HZ, MIN_AUDIBLE_HZ};
use crate::error::{Error, Result};
use crate::utils::{
    log_to_unsigned_norm, param_to_unsigned_norm, signed_n_to_unsigned_n,
    unsigned_n_to_signed_n, unsigned_norm_to_log, unsigned_norm_to_param,
};

pub trait ParamRange {
    fn min(&self) -> f64;
    fn max(&self) -> f64;

    /// [0, 1] to parameter value
    fn norm_to_param(&self, t: f64) -> f64;

    /// Parameter value to [0, 1]
    fn param_to_norm(&self, p: f64) -> f64;

    fn signed_norm_to_param(&self, t: f64) -> f64 {
        self.norm_to_param(signed_n_to_unsigned_n(t))
    }

    fn param_to_signed_norm(&self, p: f64) -> f64 {
        unsigned_n_to_signed_n(self.param_to_norm(p))
    }

    /// Clamps to the range, whichever way round the bounds are
    fn clamp(&self, p: f64) -> f64 {
        let (lo, hi) = if self.min() > self.max() {
            (self.max(), self.min())
        } else {
            (self.min(), self.max())
        };
        p.clamp(lo, hi)
    }
}

fn check_bounds(min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        log::debug!("rejecting non-finite range [{min}, {max}]");
        return Err(Error::NonFiniteBound { min, max });
    }
    if min == max {
        log::debug!("rejecting empty range [{min}, {max}]");
        return Err(Error::EmptyRange { min, max });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRange {
    min: f64,
    max: f64,
}

impl LinearRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        check_bounds(min, max)?;
        Ok(Self { min, max })
    }
}

impl ParamRange for LinearRange {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    fn norm_to_param(&self, t: f64) -> f64 {
        unsigned_norm_to_param(t, self.min, self.max)
    }

    #[inline]
    fn param_to_norm(&self, p: f64) -> f64 {
        param_to_unsigned_norm(p, self.min, self.max)
    }
}

/*
    Logarithmic range, for frequencies and other ratio-perceived parameters
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogRange {
    min: f64,
    max: f64,
}

impl LogRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        check_bounds(min, max)?;
        if min <= 0.0 || max <= 0.0 {
            log::debug!("rejecting non-positive log range [{min}, {max}]");
            return Err(Error::NonPositiveLogBound { min, max });
        }
        Ok(Self { min, max })
    }

    /// 20 Hz to 20 kHz
    pub fn audible() -> Self {
        Self {
            min: MIN_AUDIBLE_HZ,
            max: MAX_AUDIBLE_HZ,
        }
    }
}

impl ParamRange for LogRange {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    fn norm_to_param(&self, t: f64) -> f64 {
        unsigned_norm_to_log(t, self.min, self.max)
    }

    // non-positive values map to NaN or -inf
    #[inline]
    fn param_to_norm(&self, p: f64) -> f64 {
        log_to_unsigned_norm(p, self.min, self.max)
    }
}
