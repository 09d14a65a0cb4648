//! User card at the top of the profile page.
//!
//! Avatar (the uploaded image, or a coloured circle with the first letter of
//! the display name), names, reputation and the optional location / website.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::CSS_TEXT_SECONDARY;
use crate::dom_utils;
use crate::i18n::t;
use crate::models::Profile;
use crate::utils::{avatar_hue, initial};

pub fn render(document: &Document, profile: &Profile) -> Result<Element, JsValue> {
    let card = dom_utils::element(document, "div", "user-info d-flex", None)?;
    let avatar = render_avatar(document, profile)?;
    card.append_child(&avatar)?;

    let details = dom_utils::element(document, "div", "user-details", None)?;
    let name = if profile.display_name.is_empty() {
        &profile.username
    } else {
        &profile.display_name
    };
    let el = dom_utils::element(document, "h4", "display-name", Some(name))?;
    details.append_child(&el)?;
    let el = dom_utils::element(
        document,
        "div",
        CSS_TEXT_SECONDARY,
        Some(&format!("@{}", profile.username)),
    )?;
    details.append_child(&el)?;

    let rank = dom_utils::element(document, "div", "user-rank", None)?;
    let el = dom_utils::element(document, "strong", "", Some(&profile.rank.to_string()))?;
    rank.append_child(&el)?;
    let label = dom_utils::element(document, "span", "", Some(&format!(" {}", t("personal.x_reputation"))))?;
    rank.append_child(&label)?;
    details.append_child(&rank)?;

    if !profile.location.is_empty() {
        let el = dom_utils::element(document, "div", "user-location", Some(&profile.location))?;
        details.append_child(&el)?;
    }
    if !profile.website.is_empty() {
        let a = dom_utils::element(document, "a", "user-website", Some(&profile.website))?;
        a.set_attribute("href", &profile.website)?;
        a.set_attribute("target", "_blank")?;
        a.set_attribute("rel", "nofollow noopener")?;
        details.append_child(&a)?;
    }

    card.append_child(&details)?;
    Ok(card)
}

fn render_avatar(document: &Document, profile: &Profile) -> Result<Element, JsValue> {
    let wrapper = dom_utils::element(document, "div", "avatar-badge", None)?;

    if !profile.avatar.is_empty() {
        let img = document.create_element("img")?;
        img.set_attribute("src", &profile.avatar)?;
        img.set_attribute("alt", &profile.display_name)?;
        img.set_class_name("avatar-img");
        wrapper.append_child(&img)?;
    } else {
        let source = if profile.display_name.is_empty() {
            &profile.username
        } else {
            &profile.display_name
        };
        wrapper.set_text_content(Some(&initial(source)));
        wrapper.set_attribute("style", &format!("background: hsl({},70%,60%)", avatar_hue(&profile.username)))?;
    }

    Ok(wrapper)
}
