use std::path::PathBuf;

/// Menu file looked up in the working directory when no path is given
pub const DEFAULT_MENU_FILE: &str = "current_menu.json";

/// Configuration paths for the kiosk
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub menu_file: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Self {
        Self {
            menu_file: PathBuf::from(DEFAULT_MENU_FILE),
        }
    }

    /// Use `menu_file` instead of the default location when given
    pub fn with_menu_file(menu_file: Option<PathBuf>) -> Self {
        match menu_file {
            Some(menu_file) => Self { menu_file },
            None => Self::new(),
        }
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}
