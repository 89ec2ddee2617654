use clap::Parser;
use gtk4::prelude::*;
use gtk4::Application;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::info;

use beachside_eats::ui::{show_error, KioskWindow};
use beachside_eats::{ConfigPaths, Kiosk, MenuStore};

const APP_ID: &str = "com.beachsideeats.kiosk";

#[derive(Parser)]
#[command(name = "beachside-eats")]
#[command(about = "BeachSide Eats ordering kiosk")]
#[command(version)]
struct Cli {
    /// Menu file to load (defaults to ./current_menu.json)
    #[arg(long, value_name = "PATH")]
    menu: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("beachside_eats=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let paths = ConfigPaths::with_menu_file(cli.menu);

    info!("Starting BeachSide Eats");

    // Menu is read once, before the window becomes interactive
    let load = MenuStore::load(&paths.menu_file);
    let kiosk = Rc::new(RefCell::new(Kiosk::new(load.menu)));
    let warning = RefCell::new(load.warning);

    let app = Application::builder()
        .application_id(APP_ID)
        .flags(gtk4::gio::ApplicationFlags::NON_UNIQUE)
        .build();

    app.connect_activate(move |app| {
        let window = KioskWindow::new(app, kiosk.clone());
        window.present();

        if let Some(warning) = warning.borrow_mut().take() {
            show_error(window.window(), warning.title(), &warning.to_string());
        }

        info!("Kiosk window presented");
    });

    // clap already consumed our arguments
    let exit_code = app.run_with_args::<&str>(&[]);

    info!("BeachSide Eats exiting");

    std::process::exit(exit_code.into());
}
