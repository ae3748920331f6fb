use serde::{Deserialize, Serialize};

/// How the discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    #[default]
    Percentage,
    Fixed,
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountKind::Percentage => write!(f, "percentage"),
            DiscountKind::Fixed => write!(f, "fixed"),
        }
    }
}

impl std::str::FromStr for DiscountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(DiscountKind::Percentage),
            "fixed" => Ok(DiscountKind::Fixed),
            _ => Err(format!("Invalid discount kind: {}", s)),
        }
    }
}

/// Parsed inputs of a single computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceInput {
    pub original_price: f64,
    pub discount_value: f64,
    pub discount_kind: DiscountKind,
}

/// Outcome of a successful computation.
///
/// `final_price = original_price - saved_amount` and
/// `0 <= final_price <= original_price`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub final_price: f64,
    pub saved_amount: f64,
}
