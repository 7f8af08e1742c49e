//! Adjustment method selection and settings.

use std::fmt;

use crate::error::AdjustError;

/// The five supported bias-adjustment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Shift (or scale) the scenario by the mean bias between reference
    /// and control.
    LinearScaling,
    /// Linear scaling followed by a standard-deviation correction.
    /// Additive only.
    VarianceScaling,
    /// Apply the modeled climate-change signal to the observed reference.
    DeltaMethod,
    /// Map scenario values through the control CDF and the inverse
    /// reference CDF.
    QuantileMapping,
    /// Quantile mapping that preserves the scenario's own relative change
    /// signal.
    QuantileDeltaMapping,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::LinearScaling => "linear_scaling",
            Method::VarianceScaling => "variance_scaling",
            Method::DeltaMethod => "delta_method",
            Method::QuantileMapping => "quantile_mapping",
            Method::QuantileDeltaMapping => "quantile_delta_mapping",
        };
        f.write_str(name)
    }
}

/// Whether the correction is applied as an offset or a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Offset correction, for interval-scaled variables such as temperature.
    Additive,
    /// Ratio correction, for non-negative variables such as precipitation.
    Multiplicative,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Additive => "add",
            Kind::Multiplicative => "mult",
        })
    }
}

/// Configuration for a bias-adjustment run.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use debias_adjust::{AdjustmentSettings, Kind, Method};
///
/// let settings = AdjustmentSettings::new(Method::QuantileMapping, Kind::Additive)
///     .with_n_quantiles(100);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct AdjustmentSettings {
    method: Method,
    kind: Kind,
    n_quantiles: usize,
    max_scaling_factor: f64,
    interval31_scaling: bool,
}

impl AdjustmentSettings {
    /// Creates settings for the given method and kind.
    ///
    /// Defaults: `n_quantiles = 250`, `max_scaling_factor = 10`,
    /// `interval31_scaling = true`.
    pub fn new(method: Method, kind: Kind) -> Self {
        Self {
            method,
            kind,
            n_quantiles: 250,
            max_scaling_factor: 10.0,
            interval31_scaling: true,
        }
    }

    // --- Builder methods ---

    /// Sets the number of quantile bins used by the quantile methods.
    pub fn with_n_quantiles(mut self, n: usize) -> Self {
        self.n_quantiles = n;
        self
    }

    /// Sets the cap applied to every computed scaling factor.
    pub fn with_max_scaling_factor(mut self, f: f64) -> Self {
        self.max_scaling_factor = f;
        self
    }

    /// Sets whether scaling methods pool statistics over 31-day
    /// day-of-year windows instead of the whole series. When enabled,
    /// every input series must span whole 365-day years regardless of
    /// the selected method.
    pub fn with_interval31_scaling(mut self, b: bool) -> Self {
        self.interval31_scaling = b;
        self
    }

    // --- Accessors ---

    /// Returns the selected adjustment method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the selected adjustment kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the number of quantile bins.
    pub fn n_quantiles(&self) -> usize {
        self.n_quantiles
    }

    /// Returns the scaling-factor cap.
    pub fn max_scaling_factor(&self) -> f64 {
        self.max_scaling_factor
    }

    /// Returns whether 31-day interval scaling is enabled.
    pub fn interval31_scaling(&self) -> bool {
        self.interval31_scaling
    }

    /// Validates this configuration.
    ///
    /// Checks that `n_quantiles` is at least 2, that `max_scaling_factor`
    /// is finite and non-zero, and that the method/kind combination is
    /// supported (variance scaling has no multiplicative form).
    pub fn validate(&self) -> Result<(), AdjustError> {
        if self.n_quantiles < 2 {
            return Err(AdjustError::InvalidConfig {
                reason: format!("n_quantiles must be >= 2, got {}", self.n_quantiles),
            });
        }

        if !self.max_scaling_factor.is_finite() || self.max_scaling_factor == 0.0 {
            return Err(AdjustError::InvalidConfig {
                reason: format!(
                    "max_scaling_factor must be finite and non-zero, got {}",
                    self.max_scaling_factor
                ),
            });
        }

        if self.method == Method::VarianceScaling && self.kind == Kind::Multiplicative {
            return Err(AdjustError::InvalidConfig {
                reason: "multiplicative variance scaling is not available".to_string(),
            });
        }

        Ok(())
    }
}
