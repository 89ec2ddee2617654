use compact_str::CompactString;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::fmt;
use tracing::debug;

use crate::error::OrderError;
use crate::menu::{format_money, ItemId, Menu};

/// Display-ready line of the order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub name: CompactString,
    pub quantity: u32,
    pub subtotal: Decimal,
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} - {}",
            self.name,
            self.quantity,
            format_money(self.subtotal)
        )
    }
}

/// Accumulated quantities per item, in the order items were first added
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    quantities: IndexMap<ItemId, u32>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `item_id`. Leaves the ledger untouched on error.
    ///
    /// Every line subtotal and the grand total must stay representable, so
    /// `lines` and `total` never overflow.
    pub fn add(&mut self, menu: &Menu, item_id: ItemId, quantity: u32) -> Result<(), OrderError> {
        if !menu.contains(item_id) {
            return Err(OrderError::InvalidItem);
        }
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity);
        }

        let current = self.quantity_of(item_id);
        let updated = current
            .checked_add(quantity)
            .ok_or(OrderError::InvalidQuantity)?;
        self.checked_total_with(menu, item_id, updated)
            .ok_or(OrderError::InvalidQuantity)?;
        self.quantities.insert(item_id, updated);

        debug!(item_id, quantity, total_quantity = updated, "Added to order");
        Ok(())
    }

    /// Grand total as it would be with `item_id` set to `quantity`, or
    /// `None` if any subtotal or the sum overflows.
    fn checked_total_with(&self, menu: &Menu, item_id: ItemId, quantity: u32) -> Option<Decimal> {
        let others = self
            .quantities
            .iter()
            .filter(|&(&id, _)| id != item_id)
            .map(|(&id, &qty)| (id, qty));

        others
            .chain(std::iter::once((item_id, quantity)))
            .try_fold(Decimal::ZERO, |sum, (id, qty)| {
                let subtotal = menu.get(id)?.price.checked_mul(Decimal::from(qty))?;
                sum.checked_add(subtotal)
            })
    }

    pub fn quantity_of(&self, item_id: ItemId) -> u32 {
        self.quantities.get(&item_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Lines in insertion order. Each call starts a fresh iteration.
    pub fn lines<'a>(&'a self, menu: &'a Menu) -> impl Iterator<Item = OrderLine> + Clone + 'a {
        self.quantities.iter().filter_map(move |(&item_id, &quantity)| {
            let item = menu.get(item_id)?;
            Some(OrderLine {
                item_id,
                name: item.name.clone(),
                quantity,
                subtotal: item.price * Decimal::from(quantity),
            })
        })
    }

    /// Grand total. An empty order has no total.
    pub fn total(&self, menu: &Menu) -> Result<Decimal, OrderError> {
        if self.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        Ok(self.lines(menu).map(|line| line.subtotal).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuItem;

    fn display(ledger: &OrderLedger, menu: &Menu) -> Vec<String> {
        ledger.lines(menu).map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_add_accumulates() {
        let menu = Menu::default_table();
        let mut ledger = OrderLedger::new();

        ledger.add(&menu, 3, 2).unwrap();
        ledger.add(&menu, 3, 5).unwrap();
        ledger.add(&menu, 7, 1).unwrap();

        assert_eq!(ledger.quantity_of(3), 7);
        assert_eq!(ledger.quantity_of(7), 1);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_rejects_unknown_item() {
        let menu = Menu::default_table();
        let mut ledger = OrderLedger::new();

        assert_eq!(ledger.add(&menu, 99, 1), Err(OrderError::InvalidItem));
        assert_eq!(ledger.add(&menu, 0, 1), Err(OrderError::InvalidItem));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_rejects_zero_and_overflowing_quantity() {
        let menu = Menu::default_table();
        let mut ledger = OrderLedger::new();

        assert_eq!(ledger.add(&menu, 1, 0), Err(OrderError::InvalidQuantity));
        assert!(ledger.is_empty());

        ledger.add(&menu, 1, u32::MAX).unwrap();
        assert_eq!(ledger.add(&menu, 1, 1), Err(OrderError::InvalidQuantity));
        assert_eq!(ledger.quantity_of(1), u32::MAX);
    }

    #[test]
    fn test_rejects_quantity_that_overflows_amounts() {
        let menu = Menu::from_items([
            MenuItem::new(1, "Side: Yacht", Decimal::from_scientific("1e25").unwrap()),
            MenuItem::new(2, "Side: Island", Decimal::from_scientific("5e28").unwrap()),
            MenuItem::new(3, "Drink: Water", Decimal::new(150, 2)),
        ]);
        let mut ledger = OrderLedger::new();

        // line subtotal out of range
        assert_eq!(ledger.add(&menu, 1, 100_000), Err(OrderError::InvalidQuantity));
        assert!(ledger.is_empty());

        // each line fits, the grand total doesn't
        ledger.add(&menu, 2, 1).unwrap();
        assert_eq!(ledger.add(&menu, 2, 1), Err(OrderError::InvalidQuantity));
        assert_eq!(ledger.add(&menu, 1, 4_000), Err(OrderError::InvalidQuantity));
        assert_eq!(ledger.quantity_of(2), 1);
        assert_eq!(ledger.quantity_of(1), 0);

        ledger.add(&menu, 3, 2).unwrap();
        assert_eq!(ledger.lines(&menu).count(), 2);
        assert!(ledger.total(&menu).is_ok());
    }

    #[test]
    fn test_lines_and_total() {
        let menu = Menu::default_table();
        let mut ledger = OrderLedger::new();
        ledger.add(&menu, 5, 2).unwrap();
        ledger.add(&menu, 1, 1).unwrap();

        assert_eq!(
            display(&ledger, &menu),
            vec!["Entrée: Fish Tacos x2 - $15.00", "Drink: Lemonade x1 - $2.75"]
        );
        assert_eq!(ledger.total(&menu).unwrap(), Decimal::new(1775, 2));
        assert_eq!(format_money(ledger.total(&menu).unwrap()), "$17.75");
    }

    #[test]
    fn test_lines_keep_first_insertion_order() {
        let menu = Menu::default_table();
        let mut ledger = OrderLedger::new();
        ledger.add(&menu, 8, 1).unwrap();
        ledger.add(&menu, 2, 1).unwrap();
        ledger.add(&menu, 8, 3).unwrap();

        let ids: Vec<_> = ledger.lines(&menu).map(|line| line.item_id).collect();
        assert_eq!(ids, vec![8, 2]);
        assert_eq!(display(&ledger, &menu)[0], "Side: Baby Shrimp x4 - $17.00");
    }

    #[test]
    fn test_lines_are_restartable() {
        let menu = Menu::default_table();
        let mut ledger = OrderLedger::new();
        ledger.add(&menu, 4, 3).unwrap();

        let lines = ledger.lines(&menu);
        let first: Vec<_> = lines.clone().collect();
        let second: Vec<_> = lines.collect();
        assert_eq!(first, second);
        assert_eq!(first[0].subtotal, Decimal::new(855, 2));
    }

    #[test]
    fn test_empty_order_has_no_total() {
        let menu = Menu::default_table();
        let ledger = OrderLedger::new();
        assert_eq!(ledger.total(&menu), Err(OrderError::EmptyOrder));
        assert_eq!(ledger.lines(&menu).count(), 0);
    }
}
