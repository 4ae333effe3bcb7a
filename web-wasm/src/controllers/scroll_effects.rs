//! スクロール連動の装飾コントローラ
//!
//! ヘッダー/トップバーのスタイル切替と back-to-top ボタンの表示。
//! どちらの対象も無いページでは配線しない。

use gloo::events::EventListener;
use web_sys::{Document, Element};

use sabai_common::scroll;

use crate::dom;

const HEADER_SELECTOR: &str = "#header";
const TOPBAR_SELECTOR: &str = "#topbar";
const BACK_TO_TOP_SELECTOR: &str = ".back-to-top";
const HEADER_SCROLLED_CLASS: &str = "header-scrolled";
const TOPBAR_SCROLLED_CLASS: &str = "topbar-scrolled";
const BACK_TO_TOP_ACTIVE_CLASS: &str = "active";

pub struct ScrollEffectsController {
    _listener: EventListener,
}

impl ScrollEffectsController {
    pub fn init(document: &Document) -> Option<Self> {
        let effects = ScrollEffects {
            header: dom::select(document, HEADER_SELECTOR),
            topbar: dom::select(document, TOPBAR_SELECTOR),
            back_to_top: dom::select(document, BACK_TO_TOP_SELECTOR),
        };
        if effects.header.is_none() && effects.back_to_top.is_none() {
            return None;
        }

        effects.update(gloo::utils::window().scroll_y().unwrap_or(0.0));

        let listener = EventListener::new(document, "scroll", move |_| {
            effects.update(gloo::utils::window().scroll_y().unwrap_or(0.0));
        });

        Some(Self {
            _listener: listener,
        })
    }
}

struct ScrollEffects {
    header: Option<Element>,
    topbar: Option<Element>,
    back_to_top: Option<Element>,
}

impl ScrollEffects {
    fn update(&self, scroll_y: f64) {
        if let Some(header) = &self.header {
            let scrolled = scroll::header_scrolled(scroll_y);
            dom::set_class(header, HEADER_SCROLLED_CLASS, scrolled);
            // トップバーはヘッダーと連動して切り替わる
            if let Some(topbar) = &self.topbar {
                dom::set_class(topbar, TOPBAR_SCROLLED_CLASS, scrolled);
            }
        }

        if let Some(back_to_top) = &self.back_to_top {
            dom::set_class(
                back_to_top,
                BACK_TO_TOP_ACTIVE_CLASS,
                scroll::back_to_top_visible(scroll_y),
            );
        }
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r##"
        <div id="topbar"></div>
        <header id="header"></header>
        <a href="#" class="back-to-top"></a>
    "##;

    fn setup_effects() -> (Document, ScrollEffects) {
        let document = gloo::utils::document();
        document.body().unwrap().set_inner_html(FIXTURE);
        let effects = ScrollEffects {
            header: dom::select(&document, HEADER_SELECTOR),
            topbar: dom::select(&document, TOPBAR_SELECTOR),
            back_to_top: dom::select(&document, BACK_TO_TOP_SELECTOR),
        };
        (document, effects)
    }

    #[wasm_bindgen_test]
    fn init_requires_header_or_back_to_top() {
        let document = gloo::utils::document();
        document.body().unwrap().set_inner_html("<div></div>");
        assert!(ScrollEffectsController::init(&document).is_none());

        document
            .body()
            .unwrap()
            .set_inner_html(r#"<header id="header"></header>"#);
        assert!(ScrollEffectsController::init(&document).is_some());
    }

    #[wasm_bindgen_test]
    fn update_toggles_classes_at_threshold() {
        let (document, effects) = setup_effects();
        let header = document.get_element_by_id("header").unwrap();
        let topbar = document.get_element_by_id("topbar").unwrap();
        let back_to_top = dom::select(&document, BACK_TO_TOP_SELECTOR).unwrap();

        effects.update(150.0);
        assert!(dom::has_class(&header, "header-scrolled"));
        assert!(dom::has_class(&topbar, "topbar-scrolled"));
        assert!(dom::has_class(&back_to_top, "active"));

        effects.update(50.0);
        assert!(!dom::has_class(&header, "header-scrolled"));
        assert!(!dom::has_class(&topbar, "topbar-scrolled"));
        assert!(!dom::has_class(&back_to_top, "active"));
    }

    #[wasm_bindgen_test]
    fn topbar_is_optional() {
        let document = gloo::utils::document();
        document
            .body()
            .unwrap()
            .set_inner_html(r#"<header id="header"></header>"#);
        let effects = ScrollEffects {
            header: dom::select(&document, HEADER_SELECTOR),
            topbar: None,
            back_to_top: None,
        };

        effects.update(150.0);
        let header = document.get_element_by_id("header").unwrap();
        assert!(dom::has_class(&header, "header-scrolled"));
    }
}
