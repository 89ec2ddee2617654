use gtk4::glib::Propagation;
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, Button, Entry, Label, ListBox,
    Orientation, ScrolledWindow, SelectionMode,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::kiosk::Kiosk;
use crate::messages::{KioskCommand, ViewUpdate};
use crate::ui::{show_error, SummaryWindow};

const WINDOW_WIDTH: i32 = 360;
const WINDOW_HEIGHT: i32 = 650;
const LIST_HEIGHT: i32 = 145;

/// Main ordering window. Holds no ordering logic: clicks go to the
/// [`Kiosk`] and the returned updates are applied here.
pub struct KioskWindow {
    window: ApplicationWindow,
    kiosk: Rc<RefCell<Kiosk>>,
    item_entry: Entry,
    quantity_entry: Entry,
    order_list: ListBox,
    total_label: Label,
    summary: RefCell<Option<SummaryWindow>>,
}

impl KioskWindow {
    pub fn new(app: &Application, kiosk: Rc<RefCell<Kiosk>>) -> Rc<Self> {
        let window = ApplicationWindow::builder()
            .application(app)
            .title("BeachSide Eats")
            .default_width(WINDOW_WIDTH)
            .default_height(WINDOW_HEIGHT)
            .build();

        let content = GtkBox::new(Orientation::Vertical, 6);
        content.set_halign(Align::Center);
        content.set_margin_top(12);
        content.set_margin_bottom(12);

        let title = Label::new(Some("Welcome to BeachSide Eats!"));
        content.append(&title);

        // Menu
        content.append(&Label::new(Some("Menu:")));
        let menu_list = Self::create_list();
        for line in kiosk.borrow().menu().display_lines() {
            Self::append_row(&menu_list, &line);
        }
        content.append(&Self::scrolled(&menu_list));

        // Inputs
        content.append(&Label::new(Some("Enter Item Number:")));
        let item_entry = Entry::new();
        content.append(&item_entry);
        content.append(&Label::new(Some("Enter Quantity:")));
        let quantity_entry = Entry::new();
        content.append(&quantity_entry);

        let add_button = Button::with_label("Add to Order");
        content.append(&add_button);

        // Current order
        content.append(&Label::new(Some("Current Order:")));
        let order_list = Self::create_list();
        content.append(&Self::scrolled(&order_list));

        let total_label = Label::new(None);
        content.append(&total_label);

        let buttons = GtkBox::new(Orientation::Horizontal, 6);
        buttons.set_halign(Align::Center);
        let total_button = Button::with_label("Calculate Total");
        let show_button = Button::with_label("Show Order");
        buttons.append(&total_button);
        buttons.append(&show_button);
        content.append(&buttons);

        window.set_child(Some(&content));

        let this = Rc::new(Self {
            window,
            kiosk,
            item_entry,
            quantity_entry,
            order_list,
            total_label,
            summary: RefCell::new(None),
        });

        let handle = this.clone();
        add_button.connect_clicked(move |_| {
            handle.dispatch(KioskCommand::AddToOrder {
                item: handle.item_entry.text().to_string(),
                quantity: handle.quantity_entry.text().to_string(),
            });
        });

        let handle = this.clone();
        total_button.connect_clicked(move |_| handle.dispatch(KioskCommand::CalculateTotal));

        let handle = this.clone();
        show_button.connect_clicked(move |_| handle.dispatch(KioskCommand::ShowOrder));

        // Only "Exit Program" on the summary ends the session
        let kiosk = this.kiosk.clone();
        this.window.connect_close_request(move |_| {
            if kiosk.borrow().can_close() {
                Propagation::Proceed
            } else {
                debug!("Ignoring close request before Exit Program");
                Propagation::Stop
            }
        });

        this
    }

    pub fn present(&self) {
        self.window.present();
    }

    pub fn window(&self) -> &ApplicationWindow {
        &self.window
    }

    /// Send a command to the kiosk and apply what comes back
    fn dispatch(self: &Rc<Self>, command: KioskCommand) {
        let updates = self.kiosk.borrow_mut().handle(command);
        for update in updates {
            self.apply(update);
        }
    }

    fn apply(self: &Rc<Self>, update: ViewUpdate) {
        debug!(?update, "Applying view update");

        match update {
            ViewUpdate::OrderChanged(lines) => {
                while let Some(child) = self.order_list.first_child() {
                    self.order_list.remove(&child);
                }
                for line in &lines {
                    Self::append_row(&self.order_list, line);
                }
            }
            ViewUpdate::ClearInputs => {
                self.item_entry.set_text("");
                self.quantity_entry.set_text("");
            }
            ViewUpdate::TotalChanged(text) => {
                self.total_label.set_text(&text);
            }
            ViewUpdate::ShowError { title, message } => {
                show_error(&self.window, title, &message);
            }
            ViewUpdate::OpenSummary(receipt) => {
                let handle = self.clone();
                let summary = SummaryWindow::new(&self.window, &receipt, move || {
                    handle.dispatch(KioskCommand::ExitProgram);
                });
                summary.present();
                *self.summary.borrow_mut() = Some(summary);
            }
            ViewUpdate::Quit => {
                if let Some(summary) = self.summary.take() {
                    summary.close();
                }
                self.window.close();
            }
        }
    }

    fn create_list() -> ListBox {
        let list = ListBox::new();
        list.set_selection_mode(SelectionMode::None);
        list
    }

    fn append_row(list: &ListBox, text: &str) {
        let label = Label::new(Some(text));
        label.set_halign(Align::Start);
        label.set_margin_start(6);
        list.append(&label);
    }

    fn scrolled(list: &ListBox) -> ScrolledWindow {
        ScrolledWindow::builder()
            .min_content_width(250)
            .min_content_height(LIST_HEIGHT)
            .child(list)
            .build()
    }
}
