use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.01 = 1% per period) unless a field says percent.
pub type Rate = Decimal;

/// Year counts, possibly fractional
pub type Years = Decimal;

/// Rounding behaviour for the "details" calculators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailsOptions {
    /// Keep full decimal precision instead of rounding to whole currency units.
    #[serde(default)]
    pub include_decimal: bool,
}

impl DetailsOptions {
    pub fn whole_units() -> Self {
        Self {
            include_decimal: false,
        }
    }

    pub fn with_decimals() -> Self {
        Self {
            include_decimal: true,
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Warnings worth surfacing for an annual rate input.
///
/// An annual figure of exactly `1` is read as a fraction (100%), not as 1%.
pub fn rate_warnings(field: &str, annual_rate: Rate) -> Vec<String> {
    let mut warnings = Vec::new();
    if annual_rate == Decimal::ONE {
        warnings.push(format!(
            "{field} = 1 is read as a fraction (100% p.a.), not as 1%"
        ));
    }
    if annual_rate < Decimal::ZERO {
        warnings.push(format!("{field} is negative ({annual_rate})"));
    }
    warnings
}
