use std::path::PathBuf;

/// Why the menu file could not be used. Always recovered by falling back to
/// the default menu.
#[derive(Debug, thiserror::Error)]
pub enum MenuLoadError {
    #[error("Menu file not found. Loading default menu...")]
    NotFound { path: PathBuf },

    #[error("menu file was empty or incorrectly formatted. Using default menu.")]
    Malformed { path: PathBuf, reason: String },
}

impl MenuLoadError {
    /// Dialog title shown alongside the message
    pub fn title(&self) -> &'static str {
        "JSON Error"
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            MenuLoadError::NotFound { path } | MenuLoadError::Malformed { path, .. } => path,
        }
    }
}

/// Rejected order operations. The ledger is never modified when one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid item number. Please try again.")]
    InvalidItem,

    #[error("Enter valid numbers for item and quantity.")]
    InvalidQuantity,

    #[error("Your order is empty. Please add items first.")]
    EmptyOrder,
}

impl OrderError {
    pub fn title(&self) -> &'static str {
        match self {
            OrderError::InvalidItem | OrderError::InvalidQuantity => "Invalid Input",
            OrderError::EmptyOrder => "Invalid Submission",
        }
    }
}
