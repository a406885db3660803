use serde::Serialize;

use messhall_core::{DomainError, DomainResult, ItemId};

use crate::policy::QuantityPolicy;

/// Soft cap on item names.
pub const MAX_NAME_LEN: usize = 100;

/// Soft cap on unit labels ("kg", "liters", ...).
pub const MAX_UNIT_LEN: usize = 20;

/// A stored stock item, as handed out by the store.
///
/// This is a snapshot: mutating it does not touch the stored record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl Item {
    /// Attach a store-assigned id to a validated new item.
    pub fn from_new(id: ItemId, new: NewItem) -> Self {
        Self {
            id,
            name: new.name,
            quantity: new.quantity,
            unit: new.unit,
        }
    }

    /// Quantity left after consuming `used` under `policy`.
    pub fn remaining_after(&self, used: f64, policy: QuantityPolicy) -> DomainResult<f64> {
        policy.apply(self.quantity, used)
    }
}

/// Validated input for adding an item.
///
/// Fields are private so every instance went through [`NewItem::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    name: String,
    quantity: f64,
    unit: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let unit = unit.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::validation(format!(
                "name cannot exceed {MAX_NAME_LEN} characters"
            )));
        }
        if unit.trim().is_empty() {
            return Err(DomainError::validation("unit cannot be empty"));
        }
        if unit.chars().count() > MAX_UNIT_LEN {
            return Err(DomainError::validation(format!(
                "unit cannot exceed {MAX_UNIT_LEN} characters"
            )));
        }
        // Negative stock is allowed; NaN and infinities are not storable.
        if !quantity.is_finite() {
            return Err(DomainError::validation("quantity must be a finite number"));
        }

        Ok(Self {
            name,
            quantity,
            unit,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

/// Request to consume stock from an existing item.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UseItem {
    pub id: ItemId,
    pub quantity_used: f64,
}

impl UseItem {
    pub fn new(id: ItemId, quantity_used: f64) -> DomainResult<Self> {
        if !quantity_used.is_finite() {
            return Err(DomainError::validation("quantity_used must be a finite number"));
        }
        Ok(Self { id, quantity_used })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::QUANTITY_OUT_OF_RANGE;

    fn ghee(id: i64) -> Item {
        Item::from_new(ItemId::new(id), NewItem::new("Ghee", 5.0, "kg").unwrap())
    }

    #[test]
    fn new_item_keeps_fields() {
        let item = NewItem::new("Cooking Oil", 15.0, "liters").unwrap();
        assert_eq!(item.name(), "Cooking Oil");
        assert_eq!(item.quantity(), 15.0);
        assert_eq!(item.unit(), "liters");
    }

    #[test]
    fn new_item_allows_negative_quantity() {
        let item = NewItem::new("Salt", -3.0, "kg").unwrap();
        assert_eq!(item.quantity(), -3.0);
    }

    #[test]
    fn new_item_rejects_blank_name() {
        let err = NewItem::new("   ", 1.0, "kg").unwrap_err();
        assert_eq!(err, DomainError::validation("name cannot be empty"));
    }

    #[test]
    fn new_item_rejects_blank_unit() {
        let err = NewItem::new("Rice", 1.0, "").unwrap_err();
        assert_eq!(err, DomainError::validation("unit cannot be empty"));
    }

    #[test]
    fn new_item_enforces_soft_caps() {
        let long_name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(NewItem::new(long_name, 1.0, "kg").is_err());
        assert!(NewItem::new("x".repeat(MAX_NAME_LEN), 1.0, "kg").is_ok());

        let long_unit = "u".repeat(MAX_UNIT_LEN + 1);
        assert!(NewItem::new("Rice", 1.0, long_unit).is_err());
    }

    #[test]
    fn new_item_rejects_non_finite_quantity() {
        assert!(NewItem::new("Rice", f64::NAN, "kg").is_err());
        assert!(NewItem::new("Rice", f64::INFINITY, "kg").is_err());
    }

    #[test]
    fn use_item_rejects_non_finite_amount() {
        assert!(UseItem::new(ItemId::new(1), f64::NAN).is_err());
        assert!(UseItem::new(ItemId::new(1), -2.0).is_ok());
    }

    #[test]
    fn remaining_after_uses_policy() {
        let item = ghee(1);
        assert_eq!(item.remaining_after(2.0, QuantityPolicy::Unchecked).unwrap(), 3.0);
        assert_eq!(item.remaining_after(9.0, QuantityPolicy::Unchecked).unwrap(), -4.0);
        assert_eq!(item.remaining_after(9.0, QuantityPolicy::ClampAtZero).unwrap(), 0.0);
        assert!(item.remaining_after(9.0, QuantityPolicy::RejectIfInsufficient).is_err());
    }

    #[test]
    fn remaining_after_refuses_overflow() {
        let mut item = ghee(4);
        item.quantity = 1e308;
        let err = item.remaining_after(-1e308, QuantityPolicy::Unchecked).unwrap_err();
        assert_eq!(err, DomainError::validation(QUANTITY_OUT_OF_RANGE));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(ghee(9)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 9, "name": "Ghee", "quantity": 5.0, "unit": "kg" })
        );
    }
}
