//! Editor "insert link" dialog reducer.

use crate::constants::ID_LINK_URL_INPUT;
use crate::messages::{Command, Message};
use crate::state::AppState;

/// Markdown inserted for a confirmed link: `[name](url)`, or the autolink
/// form `<url>` when no name was given.  Both are inserted as typed.
pub fn link_markdown(name: &str, url: &str) -> String {
    if name.is_empty() {
        format!("<{}>", url)
    } else {
        format!("[{}]({})", name, url)
    }
}

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    let dialog = &mut state.link_dialog;
    match msg {
        Message::OpenLinkDialog { selection } => {
            dialog.visible = true;
            dialog.name.value = selection.clone();
            dialog.name.invalid = false;
            dialog.url.invalid = false;
            commands.push(Command::RenderLinkDialog);
            commands.push(Command::UpdateUI(Box::new(|| {
                crate::dom_utils::focus_and_select(ID_LINK_URL_INPUT);
            })));
            true
        }
        Message::LinkUrlChanged(value) => {
            // The input already shows the value; the invalid marker stays
            // until the next confirm.
            dialog.url.value = value.clone();
            true
        }
        Message::LinkNameChanged(value) => {
            dialog.name.value = value.clone();
            true
        }
        Message::FillLinkUserInfo => {
            if let Some(user) = &state.session_user {
                dialog.name.value = user.label();
                commands.push(Command::RenderLinkDialog);
            }
            true
        }
        Message::ConfirmLink => {
            if dialog.url.value.is_empty() {
                dialog.url.invalid = true;
                commands.push(Command::RenderLinkDialog);
                return true;
            }
            let text = link_markdown(&dialog.name.value, &dialog.url.value);
            commands.push(Command::ReplaceEditorSelection(text));
            commands.push(Command::FocusEditor);
            dialog.visible = false;
            dialog.url.value.clear();
            dialog.url.invalid = false;
            dialog.name.value.clear();
            dialog.name.invalid = false;
            commands.push(Command::RenderLinkDialog);
            true
        }
        Message::CloseLinkDialog => {
            dialog.visible = false;
            commands.push(Command::RenderLinkDialog);
            commands.push(Command::FocusEditor);
            true
        }
        _ => false,
    }
}
