// src/pages/profile/mod.rs
//
// User profile page: `/users/{username}[/{tab}]`.

pub mod view_model;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::{alert, empty, list_head, pagination, profile, tab_bar, user_info};
use crate::constants::{CSS_BTN_OUTLINE, CSS_TEXT_SECONDARY, ID_PROFILE_CONTAINER, ID_PROFILE_NAV, PATH_EDIT_PROFILE};
use crate::dom_utils;
use crate::i18n::t;
use crate::route::ProfileRoute;
use crate::state::APP_STATE;
use crate::tabs::SubView;
use crate::utils::{format_time_with_prefix, now_secs};

use self::view_model::compose;

/// Mount (render) the profile page into the main app container.
pub fn mount_profile(document: &Document, route: &ProfileRoute) -> Result<(), JsValue> {
    let container = dom_utils::fresh_page_root(document, ID_PROFILE_CONTAINER)?;
    container.set_class_name("profile-page pt-4 mb-5");

    APP_STATE.with(|state| -> Result<(), JsValue> {
        let state = state.borrow();
        let vm = compose(route, &state.profile_page, state.session_user.as_ref());

        if let Some(title) = &vm.page_title {
            document.set_title(title);
        }

        if vm.profile_missing {
            let not_found = empty::render(document, "common.not_found")?;
            container.append_child(&not_found)?;
            return Ok(());
        }

        // ----------------------------------------------------------------
        // Header: status alert, user card, edit link
        // ----------------------------------------------------------------
        if let Some(message) = vm.status_alert {
            let status = alert::render_status(document, message)?;
            container.append_child(&status)?;
        }

        let header = dom_utils::element(document, "div", "d-md-flex justify-content-between", None)?;
        if let Some(profile) = vm.profile {
            let card = user_info::render(document, profile)?;
            header.append_child(&card)?;
        }
        if vm.show_edit_profile {
            let edit = dom_utils::route_link(document, PATH_EDIT_PROFILE, CSS_BTN_OUTLINE, &t("personal.edit_profile"))?;
            header.append_child(&edit)?;
        }
        container.append_child(&header)?;

        let nav = tab_bar::build_tab_bar(document, ID_PROFILE_NAV, &vm.nav)?;
        container.append_child(&nav)?;

        // ----------------------------------------------------------------
        // Tab body: exactly one sub-view, plus list chrome
        // ----------------------------------------------------------------
        if let Some(head) = &vm.list_head {
            let head_row = list_head::render(document, head)?;
            container.append_child(&head_row)?;
        }

        for view in SubView::ALL {
            if let Some(el) = profile::render_sub_view(document, view, &vm)? {
                container.append_child(&el)?;
            }
        }

        if vm.is_loading && vm.records.is_empty() && !vm.tab.is_overview() {
            let spinner = dom_utils::element(document, "div", "spinner-border text-secondary", None)?;
            spinner.set_attribute("role", "status")?;
            container.append_child(&spinner)?;
        }
        if let Some(error) = vm.list_error {
            let failed = alert::render_load_failed(document, &error.to_string())?;
            container.append_child(&failed)?;
        }
        if vm.show_empty {
            let empty_state = empty::render(document, "common.empty")?;
            container.append_child(&empty_state)?;
        }
        if let Some(model) = &vm.pagination {
            let wrapper = dom_utils::element(document, "div", "d-flex justify-content-center py-4", None)?;
            let pager = pagination::render(document, model)?;
            wrapper.append_child(&pager)?;
            container.append_child(&wrapper)?;
        }

        // ----------------------------------------------------------------
        // Stats (overview only)
        // ----------------------------------------------------------------
        if vm.show_stats {
            let heading = dom_utils::element(document, "h5", "mb-3", Some(&t("personal.stats")))?;
            container.append_child(&heading)?;
            if let Some(stats) = vm.stats {
                let now = now_secs();
                let mut line = format_time_with_prefix(&t("personal.joined"), stats.created_at, now);
                if let Some(last_login) = stats.last_login {
                    line.push_str(&t("personal.comma"));
                    line.push(' ');
                    line.push_str(&format_time_with_prefix(&t("personal.last_login"), last_login, now));
                }
                let el = dom_utils::element(document, "div", CSS_TEXT_SECONDARY, Some(&line))?;
                container.append_child(&el)?;
            }
        }

        Ok(())
    })
}

pub fn unmount_profile(document: &Document) {
    tab_bar::remove_keyboard_navigation(ID_PROFILE_NAV);
    dom_utils::hide_page_root(document, ID_PROFILE_CONTAINER);
}
