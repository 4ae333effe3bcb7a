//! ナビゲーションバーコントローラ
//!
//! スクロールスパイ（現在地リンクのハイライト）、モバイルナビの開閉、
//! モバイル時のドロップダウン展開。

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement};

use sabai_common::scroll;

use crate::dom;

const NAVBAR_ID: &str = "navbar";
const LINK_SELECTOR: &str = "#navbar .scrollto";
const TOGGLE_SELECTOR: &str = ".mobile-nav-toggle";
const DROPDOWN_LINK_SELECTOR: &str = ".navbar .dropdown > a";
const ACTIVE_CLASS: &str = "active";
const MOBILE_CLASS: &str = "navbar-mobile";
const DROPDOWN_ACTIVE_CLASS: &str = "dropdown-active";
/// モバイルトグルのアイコン切替クラス
const TOGGLE_ICON_CLASSES: [&str; 2] = ["fa-bars", "fa-times"];

pub struct NavbarController {
    _listeners: Vec<EventListener>,
}

impl NavbarController {
    pub fn init(document: &Document) -> Option<Self> {
        let navbar = document.get_element_by_id(NAVBAR_ID)?;
        let mut listeners = Vec::new();

        // スクロールスパイ
        let links = dom::select_all(document, LINK_SELECTOR);
        if !links.is_empty() {
            let spy = ScrollSpy {
                document: document.clone(),
                links,
            };
            spy.update();
            listeners.push(EventListener::new(document, "scroll", move |_| {
                spy.update();
            }));
        }

        // モバイルナビ開閉（最初のトグルだけを配線する）
        if let Some(toggle) = dom::select(document, TOGGLE_SELECTOR) {
            let navbar = navbar.clone();
            let toggle_el = toggle.clone();
            listeners.push(EventListener::new(&toggle, "click", move |_| {
                dom::toggle_class(&navbar, MOBILE_CLASS);
                for class in TOGGLE_ICON_CLASSES {
                    dom::toggle_class(&toggle_el, class);
                }
            }));
        }

        // モバイル時だけ効くドロップダウン展開
        for link in dom::select_all(document, DROPDOWN_LINK_SELECTOR) {
            let navbar = navbar.clone();
            let link_el = link.clone();
            let options = EventListenerOptions::enable_prevent_default();
            listeners.push(EventListener::new_with_options(&link, "click", options, move |event| {
                if !dom::has_class(&navbar, MOBILE_CLASS) {
                    return;
                }
                event.prevent_default();
                if let Some(dropdown) = link_el.next_element_sibling() {
                    dom::toggle_class(&dropdown, DROPDOWN_ACTIVE_CLASS);
                }
            }));
        }

        Some(Self {
            _listeners: listeners,
        })
    }
}

struct ScrollSpy {
    document: Document,
    links: Vec<Element>,
}

impl ScrollSpy {
    /// 各リンクの対象セクションが現在位置に入っているかを評価する
    fn update(&self) {
        let scroll_y = gloo::utils::window().scroll_y().unwrap_or(0.0);

        for link in &self.links {
            let Some(anchor) = link.dyn_ref::<HtmlAnchorElement>() else {
                continue;
            };
            let hash = anchor.hash();
            if hash.is_empty() {
                continue;
            }
            let Some(section) = dom::select(&self.document, &hash) else {
                continue;
            };
            let Some(section) = section.dyn_ref::<HtmlElement>().cloned() else {
                continue;
            };

            let active = scroll::section_active(
                scroll_y,
                section.offset_top() as f64,
                section.offset_height() as f64,
            );
            dom::set_class(link, ACTIVE_CLASS, active);
        }
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r##"
        <nav id="navbar" class="navbar">
            <ul>
                <li><a class="scrollto" href="#hero">Home</a></li>
                <li><a class="scrollto" href="#about">About</a></li>
                <li class="dropdown">
                    <a href="#"><span>More</span></a>
                    <ul id="more-menu"><li><a href="#">Specials</a></li></ul>
                </li>
            </ul>
        </nav>
        <i class="mobile-nav-toggle fa-bars"></i>
        <section id="hero" style="height: 1000px;"></section>
        <section id="about" style="height: 600px;"></section>
    "##;

    fn setup() -> (Document, NavbarController) {
        let document = gloo::utils::document();
        document.body().unwrap().set_inner_html(FIXTURE);
        let controller = NavbarController::init(&document).expect("init failed");
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

    #[wasm_bindgen_test]
    fn missing_navbar_disables_feature() {
        let document = gloo::utils::document();
        document.body().unwrap().set_inner_html("<div></div>");

        assert!(NavbarController::init(&document).is_none());
    }

    #[wasm_bindgen_test]
    fn scrollspy_marks_section_at_top_of_page() {
        let (document, _controller) = setup();

        // scroll_y=0 → 判定位置200は #hero（高さ1000）の範囲内
        let hero_link = dom::select(&document, "a[href='#hero']").unwrap();
        let about_link = dom::select(&document, "a[href='#about']").unwrap();
        assert!(dom::has_class(&hero_link, "active"));
        assert!(!dom::has_class(&about_link, "active"));
    }

    #[wasm_bindgen_test]
    fn mobile_toggle_switches_navbar_and_icon() {
        let (document, _controller) = setup();
        let navbar = document.get_element_by_id("navbar").unwrap();
        let toggle = dom::select(&document, ".mobile-nav-toggle").unwrap();

        click(&document, ".mobile-nav-toggle");
        assert!(dom::has_class(&navbar, "navbar-mobile"));
        assert!(!dom::has_class(&toggle, "fa-bars"));
        assert!(dom::has_class(&toggle, "fa-times"));

        click(&document, ".mobile-nav-toggle");
        assert!(!dom::has_class(&navbar, "navbar-mobile"));
        assert!(dom::has_class(&toggle, "fa-bars"));
        assert!(!dom::has_class(&toggle, "fa-times"));
    }

    #[wasm_bindgen_test]
    fn dropdown_only_expands_in_mobile_mode() {
        let (document, _controller) = setup();
        let dropdown = document.get_element_by_id("more-menu").unwrap();

        // デスクトップ表示では何も起きない
        click(&document, ".dropdown > a");
        assert!(!dom::has_class(&dropdown, "dropdown-active"));

        // モバイル表示に切り替えてから
        click(&document, ".mobile-nav-toggle");
        click(&document, ".dropdown > a");
        assert!(dom::has_class(&dropdown, "dropdown-active"));

        click(&document, ".dropdown > a");
        assert!(!dom::has_class(&dropdown, "dropdown-active"));
    }
}
