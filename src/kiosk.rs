//! Ordering session: owns the menu, the order and the screen state.
//!
//! The GTK layer turns button clicks into [`KioskCommand`]s and applies the
//! returned [`ViewUpdate`]s. Nothing here touches the display, so the whole
//! ordering flow can be driven headless.

use rust_decimal::Decimal;
use smallvec::{smallvec, SmallVec};
use std::fmt;
use tracing::{debug, info, warn};

use crate::error::OrderError;
use crate::menu::{format_money, ItemId, Menu};
use crate::messages::{KioskCommand, ViewUpdate};
use crate::order::OrderLedger;

const RECEIPT_SEPARATOR: &str = "---------------------";
const EMPTY_SUMMARY_MESSAGE: &str = "No items in the order. Please add items first.";

/// Which screen the kiosk is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Main,
    Summary,
    Terminated,
}

/// Final itemized order shown before exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub lines: Vec<String>,
    pub grand_total: Decimal,
}

impl Receipt {
    pub fn grand_total_line(&self) -> String {
        grand_total_text(self.grand_total)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", RECEIPT_SEPARATOR)?;
        write!(f, "{}", self.grand_total_line())
    }
}

fn grand_total_text(total: Decimal) -> String {
    format!("Grand Total: {}", format_money(total))
}

/// Parse the item number text box
pub fn parse_item_id(text: &str) -> Result<ItemId, OrderError> {
    text.trim().parse().map_err(|_| OrderError::InvalidItem)
}

/// Parse the quantity text box. Only positive integers are accepted.
pub fn parse_quantity(text: &str) -> Result<u32, OrderError> {
    parse_whole_number(text).and_then(positive_quantity)
}

fn parse_whole_number(text: &str) -> Result<i64, OrderError> {
    text.trim().parse().map_err(|_| OrderError::InvalidQuantity)
}

fn positive_quantity(whole: i64) -> Result<u32, OrderError> {
    u32::try_from(whole)
        .ok()
        .filter(|&quantity| quantity > 0)
        .ok_or(OrderError::InvalidQuantity)
}

pub struct Kiosk {
    menu: Menu,
    order: OrderLedger,
    screen: Screen,
}

impl Kiosk {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            order: OrderLedger::new(),
            screen: Screen::Main,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn order(&self) -> &OrderLedger {
        &self.order
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Windows may only close once "Exit Program" has run
    pub fn can_close(&self) -> bool {
        self.screen == Screen::Terminated
    }

    /// Validate both inputs and add them to the order. Both texts must be
    /// whole numbers before the menu lookup; the quantity range is checked
    /// last.
    pub fn add_to_order(&mut self, item: &str, quantity: &str) -> Result<(), OrderError> {
        let item_id = parse_item_id(item)?;
        let whole = parse_whole_number(quantity)?;
        if !self.menu.contains(item_id) {
            return Err(OrderError::InvalidItem);
        }
        let quantity = positive_quantity(whole)?;
        self.order.add(&self.menu, item_id, quantity)
    }

    pub fn order_lines(&self) -> Vec<String> {
        self.order
            .lines(&self.menu)
            .map(|line| line.to_string())
            .collect()
    }

    /// "Grand Total: $x.xx"
    pub fn total_text(&self) -> Result<String, OrderError> {
        self.order.total(&self.menu).map(grand_total_text)
    }

    pub fn receipt(&self) -> Result<Receipt, OrderError> {
        let grand_total = self.order.total(&self.menu)?;
        Ok(Receipt {
            lines: self.order_lines(),
            grand_total,
        })
    }

    /// Apply a UI command and return what the UI should change
    pub fn handle(&mut self, command: KioskCommand) -> SmallVec<[ViewUpdate; 4]> {
        debug!(?command, screen = ?self.screen, "Handling command");

        match (self.screen, command) {
            (Screen::Main, KioskCommand::AddToOrder { item, quantity }) => {
                match self.add_to_order(&item, &quantity) {
                    Ok(()) => smallvec![
                        ViewUpdate::OrderChanged(self.order_lines()),
                        ViewUpdate::ClearInputs,
                    ],
                    Err(e) => {
                        warn!(%item, %quantity, "Rejected order input: {}", e);
                        smallvec![error_update(&e, e.to_string()), ViewUpdate::ClearInputs]
                    }
                }
            }

            (Screen::Main, KioskCommand::CalculateTotal) => match self.total_text() {
                Ok(text) => smallvec![ViewUpdate::TotalChanged(text)],
                Err(e) => smallvec![error_update(&e, e.to_string())],
            },

            (Screen::Main, KioskCommand::ShowOrder) => match self.receipt() {
                Ok(receipt) => {
                    info!(lines = receipt.lines.len(), "Showing itemized order");
                    self.screen = Screen::Summary;
                    smallvec![ViewUpdate::OpenSummary(receipt)]
                }
                Err(e) => smallvec![error_update(&e, EMPTY_SUMMARY_MESSAGE.to_string())],
            },

            (Screen::Summary, KioskCommand::ExitProgram) => {
                info!("Exiting program");
                self.screen = Screen::Terminated;
                smallvec![ViewUpdate::Quit]
            }

            (screen, command) => {
                warn!(?screen, ?command, "Command not available on this screen");
                SmallVec::new()
            }
        }
    }
}

fn error_update(error: &OrderError, message: String) -> ViewUpdate {
    ViewUpdate::ShowError {
        title: error.title(),
        message,
    }
}
