//! Solar Savings Calculations
//!
//! Pure financial math behind the savings calculator. This is the single
//! source of truth for system pricing, incentive, and payback figures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use solarbot_config::constants::{defaults, incentives, pricing};

/// Residential system sizes offered by the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SystemSize {
    /// 5 kW starter system
    Small,
    /// 7 kW mid-size system
    #[default]
    Medium,
    /// 10 kW large system
    Large,
}

impl SystemSize {
    /// Nameplate capacity in kilowatts
    pub fn kilowatts(&self) -> f64 {
        match self {
            SystemSize::Small => 5.0,
            SystemSize::Medium => 7.0,
            SystemSize::Large => 10.0,
        }
    }

    /// Gross installed cost before incentives
    pub fn system_cost(&self) -> f64 {
        self.kilowatts() * pricing::COST_PER_KW
    }
}

impl std::fmt::Display for SystemSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kW", self.kilowatts())
    }
}

/// State incentive tiers offered by the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateIncentive {
    California,
    Texas,
    Florida,
    OtherStates,
}

impl StateIncentive {
    /// Incentive rate as a fraction of system cost
    pub fn rate(&self) -> f64 {
        match self {
            StateIncentive::California => incentives::CALIFORNIA,
            StateIncentive::Texas => incentives::TEXAS,
            StateIncentive::Florida => incentives::FLORIDA,
            StateIncentive::OtherStates => incentives::OTHER_STATES,
        }
    }
}

impl std::fmt::Display for StateIncentive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateIncentive::California => write!(f, "California (High Incentives)"),
            StateIncentive::Texas => write!(f, "Texas (Medium Incentives)"),
            StateIncentive::Florida => write!(f, "Florida (Standard Incentives)"),
            StateIncentive::OtherStates => write!(f, "Other States"),
        }
    }
}

/// Calculator inputs
///
/// The default mirrors the pre-filled calculator form: a $150 monthly bill,
/// 5 sun hours, a 7 kW system, and the Texas incentive tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsInput {
    /// Current monthly electric bill (USD, must be positive)
    pub monthly_bill: f64,
    /// Average sunlight hours per day (must be positive)
    pub sun_hours: f64,
    /// System size to price
    pub system_size: SystemSize,
    /// State incentive rate as a fraction of system cost
    pub state_incentive_rate: f64,
}

impl Default for SavingsInput {
    fn default() -> Self {
        Self {
            monthly_bill: defaults::MONTHLY_BILL,
            sun_hours: defaults::SUN_HOURS,
            system_size: SystemSize::default(),
            state_incentive_rate: defaults::STATE_INCENTIVE_RATE,
        }
    }
}

impl SavingsInput {
    /// Check the positivity preconditions. Non-finite values fail too.
    pub fn validate(&self) -> Result<(), SavingsError> {
        if !self.monthly_bill.is_finite() || self.monthly_bill <= 0.0 {
            return Err(SavingsError::InvalidMonthlyBill(self.monthly_bill));
        }
        if !self.sun_hours.is_finite() || self.sun_hours <= 0.0 {
            return Err(SavingsError::InvalidSunHours(self.sun_hours));
        }
        Ok(())
    }
}

/// Calculator input validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SavingsError {
    #[error("monthly bill must be a positive amount, got {0}")]
    InvalidMonthlyBill(f64),
    #[error("sun hours must be a positive amount, got {0}")]
    InvalidSunHours(f64),
}

/// Derived savings figures
///
/// Read-only output of [`compute_savings`]; recomputed on every invocation,
/// never persisted. All currency figures are in whole US dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    /// Gross system cost before incentives
    pub system_cost: f64,
    /// Federal investment tax credit amount
    pub federal_tax_credit: f64,
    /// State incentive amount
    pub state_incentive: f64,
    /// Out-of-pocket cost after incentives
    pub net_cost: f64,
    /// First-year utility savings
    pub annual_savings: f64,
    /// Monthly payment on the 15-year loan (rounded to whole dollars)
    pub monthly_payment: f64,
    /// Years until the system pays for itself (rounded to one decimal)
    pub payback_years: f64,
    /// Savings over the 25-year system lifetime (rounded to whole dollars)
    pub lifetime_savings: f64,
}

/// Compute a savings estimate from validated inputs.
///
/// Formulas:
///
/// ```text
/// system_cost        = size_kw * COST_PER_KW
/// federal_tax_credit = system_cost * FEDERAL_TAX_CREDIT_RATE
/// state_incentive    = system_cost * state_incentive_rate
/// net_cost           = system_cost - federal_tax_credit - state_incentive
/// annual_savings     = monthly_bill * 12
/// payback_years      = net_cost / annual_savings          (1 decimal)
/// lifetime_savings   = annual_savings * 25 - net_cost     (whole dollars)
/// monthly_payment    = net_cost / 180                     (whole dollars)
/// ```
///
/// First-year production is estimated as `size_kw * sun_hours * 365 * 0.75`
/// and logged for diagnostics; it does not appear in the result.
///
/// The payback division is safe because `monthly_bill > 0` is validated
/// first, so `annual_savings` can never be zero.
pub fn compute_savings(input: &SavingsInput) -> Result<SavingsEstimate, SavingsError> {
    input.validate()?;

    let size_kw = input.system_size.kilowatts();

    let system_cost = input.system_size.system_cost();
    let federal_tax_credit = system_cost * pricing::FEDERAL_TAX_CREDIT_RATE;
    let state_incentive = system_cost * input.state_incentive_rate;
    let net_cost = system_cost - federal_tax_credit - state_incentive;

    let annual_production_kwh =
        size_kw * input.sun_hours * 365.0 * pricing::PRODUCTION_EFFICIENCY;
    tracing::debug!(annual_production_kwh, "estimated first-year production");

    let annual_savings = input.monthly_bill * 12.0;
    let payback_years = round_to(net_cost / annual_savings, 1);
    let lifetime_savings = round_to(annual_savings * pricing::LIFETIME_YEARS - net_cost, 0);
    let monthly_payment = round_to(net_cost / pricing::LOAN_TERM_MONTHS, 0);

    Ok(SavingsEstimate {
        system_cost,
        federal_tax_credit,
        state_incentive,
        net_cost,
        annual_savings,
        monthly_payment,
        payback_years,
        lifetime_savings,
    })
}

/// Round to `decimals` places, half away from zero
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
