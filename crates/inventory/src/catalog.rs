//! Default stock loaded into an empty store on first start.

use messhall_core::DomainResult;

use crate::item::NewItem;

/// `(name, quantity, unit)` for every default item.
pub const DEFAULT_CATALOG: [(&str, f64, &str); 13] = [
    ("Rice", 50.0, "kg"),
    ("Dal", 30.0, "kg"),
    ("Wheat", 40.0, "kg"),
    ("Sugar", 20.0, "kg"),
    ("Tea Leaves", 5.0, "kg"),
    ("Cooking Oil", 15.0, "liters"),
    ("Salt", 10.0, "kg"),
    ("Milk", 10.0, "liters"),
    ("Potatoes", 25.0, "kg"),
    ("Onions", 20.0, "kg"),
    ("Tomatoes", 15.0, "kg"),
    ("Green Vegetables", 10.0, "kg"),
    ("Spices", 5.0, "kg"),
];

/// The default catalog as validated items, in insertion order.
///
/// Fails on the first entry that does not pass `NewItem` validation.
pub fn default_catalog() -> DomainResult<Vec<NewItem>> {
    DEFAULT_CATALOG
        .iter()
        .map(|(name, quantity, unit)| NewItem::new(*name, *quantity, *unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_entry_is_valid() {
        assert_eq!(default_catalog().unwrap().len(), DEFAULT_CATALOG.len());
    }

    #[test]
    fn catalog_starts_with_rice_and_ends_with_spices() {
        let items = default_catalog().unwrap();
        assert_eq!(items[0].name(), "Rice");
        assert_eq!(items[0].quantity(), 50.0);
        assert_eq!(items[12].name(), "Spices");
        assert_eq!(items[12].unit(), "kg");
    }

    #[test]
    fn liquids_are_measured_in_liters() {
        let liters: Vec<_> = default_catalog()
            .unwrap()
            .into_iter()
            .filter(|i| i.unit() == "liters")
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(liters, vec!["Cooking Oil", "Milk"]);
    }
}
