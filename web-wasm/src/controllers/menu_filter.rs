//! メニューフィルタコントローラ
//!
//! カテゴリボタンのクリックでアクティブ表示を付け替え、各メニュー項目の
//! 可視状態を再計算する。可視判定は (選択中セレクタ, 項目のclass集合) の
//! 純関数で、それ以外の内部状態は持たない。

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, Element};

use sabai_common::FilterSelector;

use crate::dom;
use crate::layout::{FilterLayout, IsotopeLayout};

const CONTAINER_SELECTOR: &str = ".menu-container";
const CONTROL_SELECTOR: &str = "#menu-flters li";
const ITEM_SELECTOR: &str = ".menu-item";
const ACTIVE_CLASS: &str = "filter-active";
/// 表示された項目に付与する入場アニメーション用クラス
const ANIMATION_CLASSES: [&str; 2] = ["animated", "fadeInUp"];

pub struct MenuFilterController {
    _listeners: Vec<EventListener>,
}

impl MenuFilterController {
    /// フィルタUIを配線する。コントロールが1つも無ければNone
    pub fn init(document: &Document) -> Option<Self> {
        let controls = dom::select_all(document, CONTROL_SELECTOR);
        if controls.is_empty() {
            return None;
        }
        let items = dom::select_all(document, ITEM_SELECTOR);

        let layout = dom::select(document, CONTAINER_SELECTOR)
            .and_then(|container| IsotopeLayout::attach(&container, ITEM_SELECTOR))
            .map(|layout| Box::new(layout) as Box<dyn FilterLayout>);

        let targets = Rc::new(FilterTargets {
            controls,
            items,
            layout,
        });

        let listeners = targets
            .controls
            .iter()
            .cloned()
            .map(|control| {
                let targets = Rc::clone(&targets);
                let clicked = control.clone();
                let options = EventListenerOptions::enable_prevent_default();
                EventListener::new_with_options(&control, "click", options, move |event| {
                    event.prevent_default();
                    targets.select(&clicked);
                })
            })
            .collect();

        Some(Self {
            _listeners: listeners,
        })
    }
}

struct FilterTargets {
    controls: Vec<Element>,
    items: Vec<Element>,
    layout: Option<Box<dyn FilterLayout>>,
}

impl FilterTargets {
    /// クリックされたコントロールだけをアクティブにし、可視状態を再計算する
    fn select(&self, clicked: &Element) {
        for control in &self.controls {
            dom::remove_class(control, ACTIVE_CLASS);
        }
        dom::add_class(clicked, ACTIVE_CLASS);

        // data-filter欠落は全件表示として扱う（遷移は常に全域）
        let raw = clicked.get_attribute("data-filter").unwrap_or_default();
        self.apply(&FilterSelector::parse(&raw));
    }

    fn apply(&self, selector: &FilterSelector) {
        for item in &self.items {
            let class_attr = item.get_attribute("class").unwrap_or_default();
            if selector.matches(&class_attr) {
                dom::show(item);
                for class in ANIMATION_CLASSES {
                    dom::add_class(item, class);
                }
            } else {
                dom::hide(item);
                for class in ANIMATION_CLASSES {
                    dom::remove_class(item, class);
                }
            }
        }

        if let Some(layout) = &self.layout {
            layout.apply(selector);
        }
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r#"
        <ul id="menu-flters">
            <li data-filter="*" class="filter-active">All</li>
            <li data-filter=".filter-food">Food</li>
            <li data-filter=".filter-services">Services</li>
        </ul>
        <div class="menu-container">
            <div id="pad-thai" class="menu-item filter-food">Pad Thai</div>
            <div id="green-curry" class="menu-item filter-food">Green Curry</div>
            <div id="catering" class="menu-item filter-services">Catering</div>
        </div>
    "#;

    fn setup() -> (Document, MenuFilterController) {
        let document = gloo::utils::document();
        document.body().unwrap().set_inner_html(FIXTURE);
        let controller = MenuFilterController::init(&document).expect("init failed");
        (document, controller)
    }

    fn click(document: &Document, selector: &str) {
        let el: HtmlElement = document
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        el.click();
    }

    fn display_of(document: &Document, id: &str) -> String {
        let el: HtmlElement = document
            .get_element_by_id(id)
            .unwrap()
            .dyn_into()
            .unwrap();
        el.style().get_property_value("display").unwrap_or_default()
    }

    fn active_count(document: &Document) -> usize {
        dom::select_all(document, "#menu-flters li.filter-active").len()
    }

    #[wasm_bindgen_test]
    fn click_moves_active_class_exclusively() {
        let (document, _controller) = setup();

        for selector in [
            "li[data-filter='.filter-food']",
            "li[data-filter='.filter-services']",
            "li[data-filter='*']",
            "li[data-filter='.filter-food']",
        ] {
            click(&document, selector);
            assert_eq!(active_count(&document), 1);
            let active = dom::select(&document, "#menu-flters li.filter-active").unwrap();
            assert_eq!(
                active.get_attribute("data-filter"),
                dom::select(&document, selector)
                    .unwrap()
                    .get_attribute("data-filter")
            );
        }
    }

    #[wasm_bindgen_test]
    fn filter_shows_only_tagged_items() {
        let (document, _controller) = setup();

        click(&document, "li[data-filter='.filter-food']");

        assert_eq!(display_of(&document, "pad-thai"), "block");
        assert_eq!(display_of(&document, "green-curry"), "block");
        assert_eq!(display_of(&document, "catering"), "none");

        let shown = document.get_element_by_id("pad-thai").unwrap();
        assert!(dom::has_class(&shown, "animated"));
        assert!(dom::has_class(&shown, "fadeInUp"));

        let hidden = document.get_element_by_id("catering").unwrap();
        assert!(!dom::has_class(&hidden, "animated"));
        assert!(!dom::has_class(&hidden, "fadeInUp"));
    }

    #[wasm_bindgen_test]
    fn wildcard_shows_everything_again() {
        let (document, _controller) = setup();

        click(&document, "li[data-filter='.filter-services']");
        assert_eq!(display_of(&document, "pad-thai"), "none");

        click(&document, "li[data-filter='*']");
        for id in ["pad-thai", "green-curry", "catering"] {
            assert_eq!(display_of(&document, id), "block");
        }
    }

    #[wasm_bindgen_test]
    fn filter_without_matches_hides_all_items() {
        let document = gloo::utils::document();
        document.body().unwrap().set_inner_html(
            r#"
            <ul id="menu-flters">
                <li data-filter=".filter-desserts">Desserts</li>
            </ul>
            <div id="pad-thai" class="menu-item filter-food">Pad Thai</div>
            "#,
        );
        let _controller = MenuFilterController::init(&document).expect("init failed");

        click(&document, "li[data-filter='.filter-desserts']");
        assert_eq!(display_of(&document, "pad-thai"), "none");
    }

    #[wasm_bindgen_test]
    fn missing_controls_disable_feature() {
        let document = gloo::utils::document();
        document
            .body()
            .unwrap()
            .set_inner_html(r#"<div class="menu-item filter-food"></div>"#);

        assert!(MenuFilterController::init(&document).is_none());
    }
}
