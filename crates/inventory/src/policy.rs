//! Rules for consuming stock.

use core::fmt;
use core::str::FromStr;

use messhall_core::{DomainError, DomainResult};

/// Message for a use whose result does not fit in an `f64`.
pub const QUANTITY_OUT_OF_RANGE: &str = "resulting quantity is out of range";

/// How `use` treats consumption that exceeds the quantity on hand.
///
/// `Unchecked` is plain subtraction and lets stock go negative.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum QuantityPolicy {
    #[default]
    Unchecked,
    /// Floors the result at zero, so any use of stock that is already
    /// negative resets it to 0.
    ClampAtZero,
    RejectIfInsufficient,
}

impl QuantityPolicy {
    /// Quantity left after consuming `used` from `current`.
    ///
    /// A result that overflows to infinity is rejected under every policy.
    pub fn apply(self, current: f64, used: f64) -> DomainResult<f64> {
        let remaining = current - used;
        if !remaining.is_finite() {
            return Err(DomainError::validation(QUANTITY_OUT_OF_RANGE));
        }
        match self {
            QuantityPolicy::Unchecked => Ok(remaining),
            QuantityPolicy::ClampAtZero => Ok(remaining.max(0.0)),
            QuantityPolicy::RejectIfInsufficient => {
                if used > current {
                    Err(DomainError::insufficient(current, used))
                } else {
                    Ok(remaining)
                }
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuantityPolicy::Unchecked => "unchecked",
            QuantityPolicy::ClampAtZero => "clamp_at_zero",
            QuantityPolicy::RejectIfInsufficient => "reject_if_insufficient",
        }
    }
}

impl fmt::Display for QuantityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantityPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unchecked" => Ok(QuantityPolicy::Unchecked),
            "clamp" | "clamp_at_zero" => Ok(QuantityPolicy::ClampAtZero),
            "reject" | "reject_if_insufficient" => Ok(QuantityPolicy::RejectIfInsufficient),
            other => Err(DomainError::validation(format!(
                "unknown quantity policy '{other}' (expected unchecked, clamp_at_zero or reject_if_insufficient)"
            ))),
        }
    }
}
