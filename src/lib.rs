pub mod config;
pub mod error;
pub mod kiosk;
pub mod menu;
pub mod messages;
pub mod order;

#[cfg(feature = "gui")]
pub mod ui;

pub use config::ConfigPaths;
pub use error::{MenuLoadError, OrderError};
pub use kiosk::{Kiosk, Receipt, Screen};
pub use menu::{format_money, ItemId, Menu, MenuItem, MenuLoad, MenuStore};
pub use messages::{KioskCommand, ViewUpdate};
pub use order::{OrderLedger, OrderLine};
