//! Conversion between equivalent monthly and annual compounding rates
//!
//! All rates here are percentages (2.0 means 2%).

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Compounding periods in a year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Basis on which a user-supplied rate is quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateBasis {
    /// Rate per month
    #[default]
    Monthly,
    /// Effective rate per year
    Annual,
}

impl std::str::FromStr for RateBasis {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" | "m" => Ok(RateBasis::Monthly),
            "annual" | "a" | "yearly" => Ok(RateBasis::Annual),
            other => Err(ProjectionError::InvalidInput(format!(
                "unknown rate basis: {}",
                other
            ))),
        }
    }
}

/// Compound a monthly percentage rate twelve times.
///
/// Rates below -100% are economically meaningless but pass through unchecked.
pub fn monthly_to_annual(monthly_pct: f64) -> f64 {
    let monthly_factor = 1.0 + monthly_pct / 100.0;
    let annual_factor = monthly_factor.powi(MONTHS_PER_YEAR);
    (annual_factor - 1.0) * 100.0
}

/// Monthly percentage rate equivalent to an annual one.
///
/// Fails with [`ProjectionError::NumericDomain`] when `1 + annual/100` is
/// negative instead of returning NaN.
pub fn annual_to_monthly(annual_pct: f64) -> Result<f64> {
    let annual_factor = 1.0 + annual_pct / 100.0;
    if !annual_factor.is_finite() || annual_factor < 0.0 {
        log::warn!("annual rate {}% has no real monthly equivalent", annual_pct);
        return Err(ProjectionError::NumericDomain { annual_pct });
    }
    let monthly_factor = annual_factor.powf(1.0 / MONTHS_PER_YEAR as f64);
    Ok((monthly_factor - 1.0) * 100.0)
}

/// Fractional per-period (monthly) rate for a percentage quoted on `basis`
pub fn periodic_fraction(rate_pct: f64, basis: RateBasis) -> Result<f64> {
    let monthly_pct = match basis {
        RateBasis::Monthly => rate_pct,
        RateBasis::Annual => annual_to_monthly(rate_pct)?,
    };
    Ok(monthly_pct / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_to_annual() {
        assert_relative_eq!(monthly_to_annual(2.0), 26.824179456254548, epsilon = 1e-12);
        assert_relative_eq!(monthly_to_annual(1.0), 12.682503013196978, epsilon = 1e-12);
        assert_eq!(monthly_to_annual(0.0), 0.0);
    }

    #[test]
    fn test_annual_to_monthly() {
        let monthly = annual_to_monthly(12.0).unwrap();
        assert_relative_eq!(monthly, 0.9488792934583046, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        for tenths in -500..=500 {
            let r = tenths as f64 / 10.0;
            let back = annual_to_monthly(monthly_to_annual(r)).unwrap();
            assert!((back - r).abs() < 1e-9, "round trip of {} gave {}", r, back);
        }
    }

    #[test]
    fn test_total_loss_is_valid() {
        // 1 + (-100)/100 == 0 has a real root
        assert_eq!(annual_to_monthly(-100.0).unwrap(), -100.0);
    }

    #[test]
    fn test_negative_base_is_domain_error() {
        let err = annual_to_monthly(-150.0).unwrap_err();
        assert!(matches!(err, ProjectionError::NumericDomain { annual_pct } if annual_pct == -150.0));
        assert!(annual_to_monthly(f64::NAN).is_err());
    }

    #[test]
    fn test_below_minus_hundred_monthly_passes_through() {
        // (1 - 2)^12 == 1, so the annual equivalent is 0%
        assert_relative_eq!(monthly_to_annual(-200.0), 0.0);
    }

    #[test]
    fn test_periodic_fraction() {
        assert_relative_eq!(periodic_fraction(2.0, RateBasis::Monthly).unwrap(), 0.02);
        let from_annual = periodic_fraction(monthly_to_annual(2.0), RateBasis::Annual).unwrap();
        assert_relative_eq!(from_annual, 0.02, epsilon = 1e-12);
        assert!(periodic_fraction(-120.0, RateBasis::Annual).is_err());
    }

    #[test]
    fn test_rate_basis_parse() {
        assert_eq!("Annual".parse::<RateBasis>().unwrap(), RateBasis::Annual);
        assert_eq!("monthly".parse::<RateBasis>().unwrap(), RateBasis::Monthly);
        assert!("weekly".parse::<RateBasis>().is_err());
    }
}
