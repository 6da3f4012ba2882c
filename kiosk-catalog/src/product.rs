use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product types in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Handmade,
    Bottle,
    Bakery,
}

/// Whether a product is currently sellable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SellingStatus {
    Selling,
    Hold,
    StopSelling,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Handmade => "HANDMADE",
            ProductType::Bottle => "BOTTLE",
            ProductType::Bakery => "BAKERY",
        }
    }
}

impl std::str::FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HANDMADE" => Ok(ProductType::Handmade),
            "BOTTLE" => Ok(ProductType::Bottle),
            "BAKERY" => Ok(ProductType::Bakery),
            other => Err(format!("unknown product type: {other}")),
        }
    }
}

impl SellingStatus {
    /// Statuses shown to customers. Held products stay visible, stopped
    /// products are hidden.
    pub fn for_display() -> &'static [SellingStatus] {
        &[SellingStatus::Selling, SellingStatus::Hold]
    }

    pub fn is_displayed(&self) -> bool {
        Self::for_display().contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SellingStatus::Selling => "SELLING",
            SellingStatus::Hold => "HOLD",
            SellingStatus::StopSelling => "STOP_SELLING",
        }
    }
}

impl std::str::FromStr for SellingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SELLING" => Ok(SellingStatus::Selling),
            "HOLD" => Ok(SellingStatus::Hold),
            "STOP_SELLING" => Ok(SellingStatus::StopSelling),
            other => Err(format!("unknown selling status: {other}")),
        }
    }
}

/// A sellable catalog item. The product number is the stable public
/// identifier; `id` is the persistence key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: Uuid,
    pub product_number: String,
    pub product_type: ProductType,
    pub selling_status: SellingStatus,
    pub name: String,
    /// Minor currency unit, always positive.
    pub price: i32,
}

impl Product {
    pub fn new(
        product_number: String,
        product_type: ProductType,
        selling_status: SellingStatus,
        name: String,
        price: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_number,
            product_type,
            selling_status,
            name,
            price,
        }
    }
}

/// Next number in the catalog sequence, zero-padded to three digits.
/// An empty catalog starts at "001".
pub fn next_product_number(latest: Option<&str>) -> String {
    match latest.and_then(|n| n.parse::<u32>().ok()) {
        Some(latest) => format!("{:03}", latest + 1),
        None => "001".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_product_number_from_latest() {
        assert_eq!(next_product_number(Some("001")), "002");
        assert_eq!(next_product_number(Some("009")), "010");
        assert_eq!(next_product_number(Some("099")), "100");
    }

    #[test]
    fn test_next_product_number_empty_catalog() {
        assert_eq!(next_product_number(None), "001");
    }

    #[test]
    fn test_display_statuses() {
        assert!(SellingStatus::Selling.is_displayed());
        assert!(SellingStatus::Hold.is_displayed());
        assert!(!SellingStatus::StopSelling.is_displayed());
    }
}
