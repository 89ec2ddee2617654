use crate::kiosk::Receipt;

/// Commands FROM the UI TO the kiosk controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskCommand {
    /// "Add to Order" with the raw contents of both text boxes
    AddToOrder { item: String, quantity: String },

    /// "Calculate Total"
    CalculateTotal,

    /// "Show Order" - opens the itemized summary
    ShowOrder,

    /// "Exit Program" on the summary window
    ExitProgram,
}

/// Updates FROM the controller TO the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Replace the contents of the current order list
    OrderChanged(Vec<String>),

    /// Clear the item number and quantity inputs
    ClearInputs,

    /// New text for the total label
    TotalChanged(String),

    /// Blocking error dialog
    ShowError {
        title: &'static str,
        message: String,
    },

    /// Open the itemized summary window
    OpenSummary(Receipt),

    /// Close every window and end the process
    Quit,
}
