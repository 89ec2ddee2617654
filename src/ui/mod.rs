mod dialog;
mod summary;
mod window;

pub use dialog::show_error;
pub use summary::SummaryWindow;
pub use window::KioskWindow;
