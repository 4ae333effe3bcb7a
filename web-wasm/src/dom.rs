//! DOMユーティリティ
//!
//! 対象要素が無い・操作が失敗するケースはすべて黙って無視する。

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

/// 単一要素の取得（無ければNone）
pub fn select(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// 複数要素の取得
pub fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn toggle_class(el: &Element, class: &str) {
    let _ = el.class_list().toggle(class);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// クラスの付け外しを条件で決める
pub fn set_class(el: &Element, class: &str, on: bool) {
    if on {
        add_class(el, class);
    } else {
        remove_class(el, class);
    }
}

pub fn show(el: &Element) {
    set_display(el, "block");
}

pub fn hide(el: &Element) {
    set_display(el, "none");
}

fn set_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", value);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        gloo::utils::document()
    }

    #[wasm_bindgen_test]
    fn select_finds_element() {
        let document = document();
        document
            .body()
            .unwrap()
            .set_inner_html(r#"<div id="target"></div>"#);

        assert!(select(&document, "#target").is_some());
        assert!(select(&document, "#missing").is_none());
    }

    #[wasm_bindgen_test]
    fn select_all_collects_matches() {
        let document = document();
        document
            .body()
            .unwrap()
            .set_inner_html(r#"<p class="x"></p><p class="x"></p><p></p>"#);

        assert_eq!(select_all(&document, "p.x").len(), 2);
        assert!(select_all(&document, ".missing").is_empty());
    }

    #[wasm_bindgen_test]
    fn class_helpers_mutate_class_list() {
        let document = document();
        document.body().unwrap().set_inner_html(r#"<div id="el"></div>"#);
        let el = select(&document, "#el").unwrap();

        add_class(&el, "foo");
        assert!(has_class(&el, "foo"));

        toggle_class(&el, "foo");
        assert!(!has_class(&el, "foo"));

        set_class(&el, "bar", true);
        assert!(has_class(&el, "bar"));
        set_class(&el, "bar", false);
        assert!(!has_class(&el, "bar"));
    }

    #[wasm_bindgen_test]
    fn show_hide_switch_display() {
        let document = document();
        document.body().unwrap().set_inner_html(r#"<div id="el"></div>"#);
        let el = select(&document, "#el").unwrap();

        hide(&el);
        let html: &HtmlElement = el.unchecked_ref();
        assert_eq!(html.style().get_property_value("display").unwrap(), "none");

        show(&el);
        assert_eq!(html.style().get_property_value("display").unwrap(), "block");
    }
}
