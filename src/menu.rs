use compact_str::CompactString;
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::MenuLoadError;

pub type ItemId = u32;

/// A single orderable item. Name carries its category prefix ("Drink: ...").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: CompactString,
    pub price: Decimal,
}

impl MenuItem {
    pub fn new(id: ItemId, name: impl Into<CompactString>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Menu list row, e.g. "1. Drink: Lemonade - $2.75"
    pub fn display_line(&self) -> String {
        format!("{}. {} - {}", self.id, self.name, format_money(self.price))
    }
}

/// Read-only catalog of items, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    items: IndexMap<ItemId, MenuItem>,
}

impl Menu {
    pub fn from_items(items: impl IntoIterator<Item = MenuItem>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    /// Built-in table used whenever the menu file can't be used
    pub fn default_table() -> Self {
        Self::from_items([
            MenuItem::new(1, "Drink: Lemonade", Decimal::new(275, 2)),
            MenuItem::new(2, "Drink: Iced Tea", Decimal::new(275, 2)),
            MenuItem::new(3, "Drink: Water", Decimal::new(150, 2)),
            MenuItem::new(4, "Drink: Pepsi", Decimal::new(285, 2)),
            MenuItem::new(5, "Entrée: Fish Tacos", Decimal::new(750, 2)),
            MenuItem::new(6, "Entrée: Grilled Chicken Sandwich", Decimal::new(1000, 2)),
            MenuItem::new(7, "Side: French Fries", Decimal::new(350, 2)),
            MenuItem::new(8, "Side: Baby Shrimp", Decimal::new(425, 2)),
        ])
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.values()
    }

    pub fn display_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(MenuItem::display_line)
    }
}

/// One entry of the menu file: `{"item_name": "...", "price": 2.75}`
#[derive(Debug, Deserialize)]
struct MenuEntry {
    item_name: String,
    price: serde_json::Number,
}

/// Result of loading the menu. `warning` is set when the default table was
/// substituted and should be reported to the user.
#[derive(Debug)]
pub struct MenuLoad {
    pub menu: Menu,
    pub warning: Option<MenuLoadError>,
}

pub struct MenuStore;

impl MenuStore {
    /// Load the menu from `path`, falling back to [`Menu::default_table`].
    /// Never fails.
    pub fn load(path: &Path) -> MenuLoad {
        let exists = path.exists();
        debug!(path = %path.display(), exists, "Checking for menu file");

        if !exists {
            warn!(path = %path.display(), "Menu file not found, using default menu");
            return MenuLoad {
                menu: Menu::default_table(),
                warning: Some(MenuLoadError::NotFound {
                    path: path.to_path_buf(),
                }),
            };
        }

        let parsed = std::fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(|data| Self::parse(&data));

        match parsed {
            Ok(menu) => {
                info!(path = %path.display(), items = menu.len(), "Loaded menu");
                MenuLoad {
                    menu,
                    warning: None,
                }
            }
            Err(reason) => {
                warn!(path = %path.display(), %reason, "Menu file unusable, using default menu");
                MenuLoad {
                    menu: Menu::default_table(),
                    warning: Some(MenuLoadError::Malformed {
                        path: path.to_path_buf(),
                        reason,
                    }),
                }
            }
        }
    }

    /// Parse a menu document. Any problem rejects the whole document so a
    /// partial menu is never produced.
    pub fn parse(data: &[u8]) -> Result<Menu, String> {
        let raw: IndexMap<String, MenuEntry> =
            serde_json::from_slice(data).map_err(|e| e.to_string())?;

        if raw.is_empty() {
            return Err("menu has no items".into());
        }

        let mut items = Vec::with_capacity(raw.len());
        for (key, entry) in raw {
            let id: ItemId = key
                .trim()
                .parse()
                .map_err(|_| format!("invalid item id {:?}", key))?;
            if id == 0 {
                return Err("item ids start at 1".into());
            }

            let price = parse_price(&entry.price)
                .ok_or_else(|| format!("invalid price {} for item {}", entry.price, id))?;

            items.push(MenuItem::new(id, entry.item_name, price));
        }

        let expected = items.len();
        let menu = Menu::from_items(items);
        if menu.len() != expected {
            return Err("duplicate item ids".into());
        }
        Ok(menu)
    }
}

fn parse_price(number: &serde_json::Number) -> Option<Decimal> {
    let text = number.to_string();
    let price = text
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()?;
    (!price.is_sign_negative()).then_some(price)
}

/// Currency formatting used everywhere a price is shown: "$15.00"
pub fn format_money(amount: Decimal) -> String {
    format!(
        "${:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
