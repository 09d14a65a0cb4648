use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils;
use crate::i18n::t_with;
use crate::models::BadgeAward;
use crate::route::badge_path;

pub fn render(document: &Document, items: &[BadgeAward]) -> Result<Element, JsValue> {
    let grid = dom_utils::element(document, "div", "badge-grid row", None)?;
    for badge in items {
        let card = dom_utils::element(document, "div", &format!("badge-card col-6 col-md-3 badge-level-{}", badge.level), None)?;
        let link = dom_utils::route_link(document, &badge_path(&badge.id), "badge-link", "")?;
        if badge.icon.starts_with("http") || badge.icon.starts_with('/') {
            let img = document.create_element("img")?;
            img.set_attribute("src", &badge.icon)?;
            img.set_attribute("alt", &badge.name)?;
            img.set_class_name("badge-icon");
            link.append_child(&img)?;
        } else {
            let el = dom_utils::element(document, "i", &format!("badge-icon {}", badge.icon), None)?;
            link.append_child(&el)?;
        }
        let el = dom_utils::element(document, "div", "badge-name", Some(&badge.name))?;
        link.append_child(&el)?;
        card.append_child(&link)?;
        if badge.earned_count > 1 {
            let times = t_with("personal.earned_times", &[("count", &badge.earned_count.to_string())]);
            let el = dom_utils::element(document, "div", "badge-earned small", Some(&times))?;
            card.append_child(&el)?;
        }
        grid.append_child(&card)?;
    }
    Ok(grid)
}
