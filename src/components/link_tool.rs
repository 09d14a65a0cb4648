//! Editor toolbar "link" button and its insert-link dialog.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent};

use crate::components::modal;
use crate::constants::{
    ATTR_TYPE, BUTTON_TYPE_BUTTON, CSS_BTN_LINK, CSS_BTN_PRIMARY, CSS_INVALID, ID_LINK_MODAL, ID_LINK_NAME_INPUT,
    ID_LINK_URL_INPUT, LINK_KEYMAP,
};
use crate::dom_utils;
use crate::editor::{set_active_editor, EditorHandle, TextareaEditor};
use crate::i18n::t;
use crate::messages::Message;
use crate::state::{dispatch_global_message, LinkDialogState, LinkField};

/// `"Ctrl-l"` style keymap against a keydown.  Modifier and key compare
/// case-insensitively; `Ctrl` also accepts the Cmd key.
pub fn matches_keymap(keymap: &str, ctrl: bool, meta: bool, key: &str) -> bool {
    let Some((modifier, bound)) = keymap.rsplit_once('-') else {
        return keymap.eq_ignore_ascii_case(key);
    };
    let modifier_down = match modifier.to_ascii_lowercase().as_str() {
        "ctrl" => ctrl || meta,
        "cmd" => meta,
        _ => false,
    };
    modifier_down && bound.eq_ignore_ascii_case(key)
}

/// Toolbar tip, e.g. `"Hyperlink (Ctrl+l)"`.
pub fn tip() -> String {
    format!("{} ({})", t("editor.link.text"), LINK_KEYMAP.replace('-', "+"))
}

/// Put a toolbar with the link button in front of `textarea` and bind the
/// keyboard shortcut on it.
pub fn attach(document: &Document, textarea: &HtmlTextAreaElement) -> Result<(), JsValue> {
    let toolbar = dom_utils::element(document, "div", "md-toolbar btn-toolbar", None)?;
    let button = dom_utils::element(document, "button", "toolbar-item btn btn-sm", None)?;
    button.set_attribute(ATTR_TYPE, BUTTON_TYPE_BUTTON)?;
    let tip = tip();
    button.set_attribute("title", &tip)?;
    button.set_attribute("aria-label", &tip)?;
    let el = dom_utils::element(document, "i", "bi bi-link-45deg", None)?;
    button.append_child(&el)?;
    toolbar.append_child(&button)?;

    let parent = textarea
        .parent_node()
        .ok_or_else(|| JsValue::from_str("editor textarea has no parent"))?;
    let anchor: &web_sys::Node = textarea.as_ref();
    parent.insert_before(&toolbar, Some(anchor))?;

    let ta = textarea.clone();
    let on_click = Closure::wrap(Box::new(move |_e: MouseEvent| open_for(&ta)) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let ta = textarea.clone();
    let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if matches_keymap(LINK_KEYMAP, e.ctrl_key(), e.meta_key(), &e.key()) {
            e.prevent_default();
            open_for(&ta);
        }
    }) as Box<dyn FnMut(_)>);
    textarea.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    Ok(())
}

fn open_for(textarea: &HtmlTextAreaElement) {
    let editor = TextareaEditor::new(textarea.clone());
    let selection = editor.selection();
    set_active_editor(Box::new(editor));
    dispatch_global_message(Message::OpenLinkDialog { selection });
}

/// Show / hide the dialog and copy the state into it.  The markup and its
/// handlers are created on the first render and reused afterwards.
pub fn render_dialog(document: &Document, dialog: &LinkDialogState) -> Result<(), JsValue> {
    let (backdrop, content) = modal::ensure_modal(document, ID_LINK_MODAL)?;
    if document.get_element_by_id(ID_LINK_URL_INPUT).is_none() {
        build_dialog(document, &content)?;
    }

    sync_field(document, ID_LINK_URL_INPUT, &dialog.url)?;
    sync_field(document, ID_LINK_NAME_INPUT, &dialog.name)?;

    if dialog.visible {
        modal::show(&backdrop);
    } else {
        modal::hide(&backdrop);
    }
    Ok(())
}

fn build_dialog(document: &Document, content: &Element) -> Result<(), JsValue> {
    dom_utils::clear_children(content);

    // Header ---------------------------------------------------------------
    let header = dom_utils::element(document, "div", "modal-header", None)?;
    let title = dom_utils::element(document, "h5", "mb-0", Some(&t("editor.link.add_link")))?;
    header.append_child(&title)?;
    let close = dom_utils::element(document, "button", "btn-close", None)?;
    close.set_attribute(ATTR_TYPE, BUTTON_TYPE_BUTTON)?;
    close.set_attribute("aria-label", &t("editor.link.btn_cancel"))?;
    on_click(&close, || Message::CloseLinkDialog)?;
    header.append_child(&close)?;
    content.append_child(&header)?;

    // Body -----------------------------------------------------------------
    let body = dom_utils::element(document, "form", "modal-body", None)?;
    let url_label = t("editor.link.form.fields.url.label");
    let url_field = field(document, ID_LINK_URL_INPUT, &url_label, Message::LinkUrlChanged)?;
    body.append_child(&url_field)?;
    let name_label = format!("{} {}", t("editor.link.form.fields.name.label"), t("form.optional"));
    let name_field = field(document, ID_LINK_NAME_INPUT, &name_label, Message::LinkNameChanged)?;
    body.append_child(&name_field)?;

    let on_submit = Closure::wrap(Box::new(move |e: web_sys::Event| {
        e.prevent_default();
        dispatch_global_message(Message::ConfirmLink);
    }) as Box<dyn FnMut(_)>);
    body.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    content.append_child(&body)?;

    // Footer ---------------------------------------------------------------
    let footer = dom_utils::element(document, "div", "modal-footer", None)?;
    let cancel = dom_utils::element(document, "button", CSS_BTN_LINK, Some(&t("editor.link.btn_cancel")))?;
    cancel.set_attribute(ATTR_TYPE, BUTTON_TYPE_BUTTON)?;
    on_click(&cancel, || Message::CloseLinkDialog)?;
    footer.append_child(&cancel)?;
    let confirm = dom_utils::element(document, "button", CSS_BTN_PRIMARY, Some(&t("editor.link.btn_confirm")))?;
    confirm.set_attribute(ATTR_TYPE, BUTTON_TYPE_BUTTON)?;
    on_click(&confirm, || Message::ConfirmLink)?;
    footer.append_child(&confirm)?;
    content.append_child(&footer)?;

    Ok(())
}

/// Label + input + "fill user info" button.
fn field(document: &Document, id: &str, label: &str, on_change: fn(String) -> Message) -> Result<Element, JsValue> {
    let group = dom_utils::element(document, "div", "mb-3", None)?;

    let label_el = dom_utils::element(document, "label", "form-label", Some(label))?;
    label_el.set_attribute("for", id)?;
    group.append_child(&label_el)?;

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_id(id);
    input.set_type("text");
    input.set_class_name("form-control");
    let input_clone = input.clone();
    let on_input = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        dispatch_global_message(on_change(input_clone.value()));
    }) as Box<dyn FnMut(_)>);
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();
    group.append_child(&input)?;

    let fill = dom_utils::element(document, "button", CSS_BTN_LINK, Some(&t("editor.link.fill_user_info")))?;
    fill.set_attribute(ATTR_TYPE, BUTTON_TYPE_BUTTON)?;
    on_click(&fill, || Message::FillLinkUserInfo)?;
    group.append_child(&fill)?;

    Ok(group)
}

fn sync_field(document: &Document, id: &str, state: &LinkField) -> Result<(), JsValue> {
    let Some(input) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return Ok(());
    };
    // Leave the caret alone while the user types.
    if input.value() != state.value {
        input.set_value(&state.value);
    }
    if state.invalid {
        input.class_list().add_1(CSS_INVALID)?;
        input.set_attribute("aria-invalid", "true")?;
    } else {
        input.class_list().remove_1(CSS_INVALID)?;
        input.remove_attribute("aria-invalid")?;
    }
    Ok(())
}

fn on_click(el: &Element, msg: fn() -> Message) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(move |_e: MouseEvent| {
        dispatch_global_message(msg());
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_l_opens_the_dialog() {
        assert!(matches_keymap("Ctrl-l", true, false, "l"));
        assert!(matches_keymap("Ctrl-l", true, false, "L"));
        assert!(matches_keymap("Ctrl-l", false, true, "l"));
        assert!(!matches_keymap("Ctrl-l", false, false, "l"));
        assert!(!matches_keymap("Ctrl-l", true, false, "k"));
    }

    #[test]
    fn tip_names_the_shortcut() {
        assert_eq!(tip(), "Hyperlink (Ctrl+l)");
    }
}
