// Itemized order window - GTK4 UI

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Button, Label, Orientation, Separator, Window};

use crate::kiosk::Receipt;

/// Final receipt. Its only way out is "Exit Program".
pub struct SummaryWindow {
    window: Window,
}

impl SummaryWindow {
    pub fn new(parent: &impl IsA<Window>, receipt: &Receipt, on_exit: impl Fn() + 'static) -> Self {
        let window = Window::builder()
            .title("Itemized Order")
            .default_width(355)
            .default_height(400)
            .transient_for(parent)
            .modal(true)
            .deletable(false)
            .build();

        let content = GtkBox::new(Orientation::Vertical, 6);
        content.set_margin_top(16);
        content.set_margin_bottom(16);
        content.set_margin_start(16);
        content.set_margin_end(16);

        for line in &receipt.lines {
            let label = Label::new(Some(line.as_str()));
            label.set_halign(Align::Start);
            content.append(&label);
        }

        content.append(&Separator::new(Orientation::Horizontal));

        let total = Label::new(Some(receipt.grand_total_line().as_str()));
        total.set_halign(Align::Start);
        content.append(&total);

        let exit_button = Button::with_label("Exit Program");
        exit_button.set_halign(Align::Center);
        exit_button.set_margin_top(12);
        exit_button.connect_clicked(move |_| on_exit());
        content.append(&exit_button);

        window.set_child(Some(&content));

        Self { window }
    }

    pub fn present(&self) {
        self.window.present();
    }

    pub fn close(&self) {
        self.window.close();
    }
}
