//! Seam between editor tools and the text buffer they edit.
//!
//! Tools only need the current selection, a way to replace it, and focus.
//! The markdown editor proper lives elsewhere; here a plain `<textarea>`
//! stands in for it.

use std::cell::RefCell;

use web_sys::HtmlTextAreaElement;

pub trait EditorHandle {
    fn selection(&self) -> String;
    fn replace_selection(&self, text: &str);
    fn focus(&self);
}

/// `<textarea>` backed editor.
pub struct TextareaEditor {
    textarea: HtmlTextAreaElement,
}

impl TextareaEditor {
    pub fn new(textarea: HtmlTextAreaElement) -> Self {
        Self { textarea }
    }
}

impl EditorHandle for TextareaEditor {
    fn selection(&self) -> String {
        let start = self.textarea.selection_start().ok().flatten().unwrap_or(0);
        let end = self.textarea.selection_end().ok().flatten().unwrap_or(start);
        utf16_slice(&self.textarea.value(), start as usize, end as usize)
    }

    fn replace_selection(&self, text: &str) {
        let start = self.textarea.selection_start().ok().flatten().unwrap_or(0);
        let end = self.textarea.selection_end().ok().flatten().unwrap_or(start);
        let (value, caret) = splice_utf16(&self.textarea.value(), start as usize, end as usize, text);
        self.textarea.set_value(&value);
        if let Err(e) = self.textarea.set_selection_range(caret, caret) {
            error_log!("replace_selection failed: {:?}", e);
        }
    }

    fn focus(&self) {
        let _ = self.textarea.focus();
    }
}

thread_local! {
    /// Editor the open tool dialog acts on.
    static ACTIVE_EDITOR: RefCell<Option<Box<dyn EditorHandle>>> = RefCell::new(None);
}

pub fn set_active_editor(editor: Box<dyn EditorHandle>) {
    ACTIVE_EDITOR.with(|slot| *slot.borrow_mut() = Some(editor));
}

pub fn replace_selection(text: &str) {
    ACTIVE_EDITOR.with(|slot| match slot.borrow().as_ref() {
        Some(editor) => editor.replace_selection(text),
        None => error_log!("No active editor for replace_selection"),
    });
}

pub fn focus() {
    ACTIVE_EDITOR.with(|slot| {
        if let Some(editor) = slot.borrow().as_ref() {
            editor.focus();
        }
    });
}

/// Slice `text` by UTF-16 offsets, as the DOM selection API reports them.
pub fn utf16_slice(text: &str, start: usize, end: usize) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    let end = end.min(units.len());
    let start = start.min(end);
    String::from_utf16_lossy(&units[start..end])
}

/// Replace the UTF-16 range `start..end` of `text` with `insert`.  Returns the
/// new text and the caret offset just past the insertion.
pub fn splice_utf16(text: &str, start: usize, end: usize, insert: &str) -> (String, u32) {
    let units: Vec<u16> = text.encode_utf16().collect();
    let end = end.min(units.len());
    let start = start.min(end);
    let inserted: Vec<u16> = insert.encode_utf16().collect();
    let caret = (start + inserted.len()) as u32;
    let mut out = Vec::with_capacity(units.len() - (end - start) + inserted.len());
    out.extend_from_slice(&units[..start]);
    out.extend(inserted);
    out.extend_from_slice(&units[end..]);
    (String::from_utf16_lossy(&out), caret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Default)]
    struct Buffer {
        text: RefCell<String>,
        focused: RefCell<bool>,
    }

    struct Shared(Rc<Buffer>);

    impl EditorHandle for Shared {
        fn selection(&self) -> String {
            String::new()
        }
        fn replace_selection(&self, text: &str) {
            self.0.text.borrow_mut().push_str(text);
        }
        fn focus(&self) {
            *self.0.focused.borrow_mut() = true;
        }
    }

    #[test]
    fn selection_uses_utf16_offsets() {
        assert_eq!(utf16_slice("hello world", 6, 11), "world");
        assert_eq!(utf16_slice("😀 ok", 3, 5), "ok");
        assert_eq!(utf16_slice("abc", 2, 99), "c");
        assert_eq!(utf16_slice("abc", 5, 1), "");
    }

    #[test]
    fn splice_replaces_the_selection_and_moves_the_caret() {
        assert_eq!(splice_utf16("see here", 4, 8, "[here](u)"), ("see [here](u)".to_string(), 13));
        assert_eq!(splice_utf16("ab", 1, 1, "X"), ("aXb".to_string(), 2));
        // Emoji count as two units; the caret lands after the insertion.
        assert_eq!(splice_utf16("😀 ok", 3, 5, "<u>"), ("😀 <u>".to_string(), 6));
        assert_eq!(splice_utf16("abc", 9, 2, "!"), ("ab!c".to_string(), 3));
    }

    #[test]
    fn commands_reach_the_active_editor() {
        let buffer = Rc::new(Buffer::default());
        set_active_editor(Box::new(Shared(buffer.clone())));
        replace_selection("[a](b)");
        focus();
        assert_eq!(*buffer.text.borrow(), "[a](b)");
        assert!(*buffer.focused.borrow());
    }
}
