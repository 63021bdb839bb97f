use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Fitness,
    Office,
}

impl Category {
    pub const ALL: [Category; 5] =
        [Self::Electronics, Self::Clothing, Self::Home, Self::Fitness, Self::Office];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Clothing => "clothing",
            Self::Home => "home",
            Self::Fitness => "fitness",
            Self::Office => "office",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "electronics" => Ok(Self::Electronics),
            "clothing" => Ok(Self::Clothing),
            "home" => Ok(Self::Home),
            "fitness" => Ok(Self::Fitness),
            "office" => Ok(Self::Office),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

/// A catalog entry eligible for clearance promotion.
///
/// `urgency_score` is the value precomputed by the catalog. The engine derives
/// its own figure from stock and days-until-removal unless configured otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClearanceItem {
    pub id: ItemId,
    pub name: String,
    pub original_price: f64,
    pub current_price: f64,
    pub category: Category,
    pub stock_count: u32,
    pub days_until_removal: u32,
    pub urgency_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ClearanceItem {
    /// Markdown already applied by the catalog, as a percentage of the original price.
    pub fn discount_pct(&self) -> f64 {
        (self.original_price - self.current_price) / self.original_price * 100.0
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.0.trim().is_empty() {
            return Err(DomainError::InvalidItem {
                item_id: self.id.clone(),
                reason: "identifier must not be empty".to_string(),
            });
        }
        if !(self.original_price > 0.0) {
            return Err(DomainError::InvalidItem {
                item_id: self.id.clone(),
                reason: format!("original price {} must be positive", self.original_price),
            });
        }
        if !(self.current_price > 0.0) || self.current_price > self.original_price {
            return Err(DomainError::InvalidItem {
                item_id: self.id.clone(),
                reason: format!(
                    "current price {} must be in (0, {}]",
                    self.current_price, self.original_price
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.urgency_score) {
            return Err(DomainError::InvalidItem {
                item_id: self.id.clone(),
                reason: format!("urgency score {} must be within [0, 1]", self.urgency_score),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Category, ClearanceItem, ItemId};

    pub fn item(
        id: &str,
        category: Category,
        original_price: f64,
        current_price: f64,
        stock_count: u32,
        days_until_removal: u32,
        urgency_score: f64,
    ) -> ClearanceItem {
        ClearanceItem {
            id: ItemId::new(id),
            name: format!("Item {id}"),
            original_price,
            current_price,
            category,
            stock_count,
            days_until_removal,
            urgency_score,
            image_url: None,
            description: None,
        }
    }
}
