use gtk4::prelude::*;
use gtk4::{ButtonsType, MessageDialog, MessageType, Window};

/// Modal error dialog over `parent`
pub fn show_error(parent: &impl IsA<Window>, title: &str, message: &str) {
    let dialog = MessageDialog::builder()
        .transient_for(parent)
        .modal(true)
        .message_type(MessageType::Error)
        .buttons(ButtonsType::Ok)
        .text(title)
        .secondary_text(message)
        .build();

    dialog.connect_response(|dlg, _| {
        dlg.close();
    });

    dialog.present();
}
