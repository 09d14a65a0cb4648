//! Page-number navigation shared by the profile lists and the question list.
//!
//! The window computation is pure (`PaginationModel::items`) so it is unit
//! tested natively; `render` only turns items into anchors.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom_utils;
use crate::i18n::t;
use crate::route::with_query;

/// Pages shown on each side of the current one before an ellipsis.
const WINDOW: u32 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct PaginationModel {
    pub current: u32,
    pub total: u64,
    pub page_size: u32,
    /// Path the page links point at; `order` is carried along.
    pub base_path: String,
    pub order: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageItem {
    Prev(Option<String>),
    Page { number: u32, href: String, current: bool },
    Ellipsis,
    Next(Option<String>),
}

pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(page_size as u64);
    pages.min(u32::MAX as u64) as u32
}

impl PaginationModel {
    pub fn href(&self, page: u32) -> String {
        with_query(&self.base_path, page, &self.order)
    }

    pub fn items(&self) -> Vec<PageItem> {
        let last = total_pages(self.total, self.page_size).max(1);
        // Out-of-range pages still get a sensible window.
        let current = self.current.clamp(1, last);
        let mut items = Vec::new();

        items.push(PageItem::Prev((current > 1).then(|| self.href(current - 1))));

        let lo = current.saturating_sub(WINDOW).max(1);
        let hi = current.saturating_add(WINDOW).min(last);
        if lo > 1 {
            items.push(self.page(1, current));
            if lo > 2 {
                items.push(PageItem::Ellipsis);
            }
        }
        for n in lo..=hi {
            items.push(self.page(n, current));
        }
        if hi < last {
            if hi + 1 < last {
                items.push(PageItem::Ellipsis);
            }
            items.push(self.page(last, current));
        }

        items.push(PageItem::Next((current < last).then(|| self.href(current + 1))));
        items
    }

    fn page(&self, number: u32, current: u32) -> PageItem {
        PageItem::Page {
            number,
            href: self.href(number),
            current: number == current,
        }
    }
}

pub fn render(document: &Document, model: &PaginationModel) -> Result<Element, JsValue> {
    let nav = dom_utils::element(document, "nav", "pagination", None)?;
    nav.set_attribute("aria-label", "pagination")?;
    for item in model.items() {
        let el = match item {
            PageItem::Prev(href) => arrow(document, href, &t("pagination.prev"))?,
            PageItem::Next(href) => arrow(document, href, &t("pagination.next"))?,
            PageItem::Ellipsis => dom_utils::element(document, "span", "page-ellipsis", Some("…"))?,
            PageItem::Page { number, href, current } => {
                let class = if current { "page-link active" } else { "page-link" };
                let a = dom_utils::route_link(document, &href, class, &number.to_string())?;
                if current {
                    a.set_attribute("aria-current", "page")?;
                }
                a
            }
        };
        nav.append_child(&el)?;
    }
    Ok(nav)
}

fn arrow(document: &Document, href: Option<String>, label: &str) -> Result<Element, JsValue> {
    match href {
        Some(href) => dom_utils::route_link(document, &href, "page-link", label),
        None => dom_utils::element(document, "span", "page-link disabled", Some(label)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(current: u32, total: u64) -> PaginationModel {
        PaginationModel {
            current,
            total,
            page_size: 30,
            base_path: "/users/alice/answers".into(),
            order: "newest".into(),
        }
    }

    fn numbers(items: &[PageItem]) -> Vec<Option<u32>> {
        items
            .iter()
            .filter_map(|i| match i {
                PageItem::Page { number, .. } => Some(Some(*number)),
                PageItem::Ellipsis => Some(None),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(total_pages(0, 30), 0);
        assert_eq!(total_pages(30, 30), 1);
        assert_eq!(total_pages(31, 30), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn small_lists_show_every_page() {
        let items = model(2, 90).items();
        assert_eq!(numbers(&items), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(items.first(), Some(&PageItem::Prev(Some("/users/alice/answers".into()))));
        assert_eq!(items.last(), Some(&PageItem::Next(Some("/users/alice/answers?page=3".into()))));
    }

    #[test]
    fn long_lists_collapse_with_ellipses() {
        let items = model(10, 30 * 20).items();
        assert_eq!(
            numbers(&items),
            vec![Some(1), None, Some(8), Some(9), Some(10), Some(11), Some(12), None, Some(20)]
        );
    }

    #[test]
    fn edges_disable_arrows() {
        let items = model(1, 10).items();
        assert_eq!(items.first(), Some(&PageItem::Prev(None)));
        assert_eq!(items.last(), Some(&PageItem::Next(None)));
    }

    #[test]
    fn order_is_carried_in_links() {
        let m = PaginationModel { order: "score".into(), ..model(1, 100) };
        assert_eq!(m.href(2), "/users/alice/answers?page=2&order=score");
    }
}
