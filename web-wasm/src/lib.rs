//! Sabai Thai レストランサイト フロントエンド（Rust + WASM）
//!
//! 既存のページマークアップへ振る舞いを配線するenhancementクレート。
//! マークアップはテンプレート側の持ち物で、期待する要素が無い機能は
//! 黙って無効化される。

mod api;
mod controllers;
mod dom;
mod layout;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use controllers::booking_form::BookingFormController;
use controllers::menu_filter::MenuFilterController;
use controllers::navbar::NavbarController;
use controllers::scroll_effects::ScrollEffectsController;

/// ページ全体の配線
///
/// 機能ごとのコントローラを1度だけ構築して束ねる。ページが生きている間
/// リスナーを保持し続けるため、起動時に意図的にリークさせる。
struct Page {
    _menu: Option<MenuFilterController>,
    _booking: Option<BookingFormController>,
    _navbar: Option<NavbarController>,
    _scroll: Option<ScrollEffectsController>,
}

impl Page {
    fn init(document: &Document) -> Self {
        let page = Self {
            _menu: MenuFilterController::init(document),
            _booking: BookingFormController::init(document),
            _navbar: NavbarController::init(document),
            _scroll: ScrollEffectsController::init(document),
        };

        layout::init_animations();

        // 配線が済んだらプリローダを外す
        if let Some(preloader) = dom::select(document, "#preloader") {
            preloader.remove();
        }

        page
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let page = Page::init(&gloo::utils::document());
    std::mem::forget(page);
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const FULL_FIXTURE: &str = r##"
        <div id="preloader"></div>
        <div id="topbar"></div>
        <header id="header">
            <nav id="navbar" class="navbar">
                <ul><li><a class="scrollto" href="#menu">Menu</a></li></ul>
            </nav>
        </header>
        <section id="menu" style="height: 800px;">
            <ul id="menu-flters">
                <li data-filter="*" class="filter-active">All</li>
                <li data-filter=".filter-food">Food</li>
            </ul>
            <div class="menu-container">
                <div class="menu-item filter-food">Pad Thai</div>
            </div>
        </section>
        <form id="bookingForm"><input type="text" name="name"></form>
        <div class="loading" style="display: none;"></div>
        <div class="error-message" style="display: none;"></div>
        <div class="sent-message" style="display: none;"></div>
        <a href="#" class="back-to-top"></a>
    "##;

    #[wasm_bindgen_test]
    fn full_page_wires_every_controller() {
        let document = gloo::utils::document();
        document.body().unwrap().set_inner_html(FULL_FIXTURE);

        let page = Page::init(&document);

        assert!(page._menu.is_some());
        assert!(page._booking.is_some());
        assert!(page._navbar.is_some());
        assert!(page._scroll.is_some());
        assert!(document.get_element_by_id("preloader").is_none());
    }

    #[wasm_bindgen_test]
    fn empty_page_disables_everything() {
        let document = gloo::utils::document();
        document.body().unwrap().set_inner_html("");

        let page = Page::init(&document);

        assert!(page._menu.is_none());
        assert!(page._booking.is_none());
        assert!(page._navbar.is_none());
        assert!(page._scroll.is_none());
    }
}
