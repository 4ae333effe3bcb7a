//! 外部レイアウト/アニメーションライブラリ連携
//!
//! Isotope（グリッド再配置）と AOS（スクロールアニメーション）は
//! ページ側で読み込まれていれば使う任意の協調者。グローバルが無ければ
//! すべて何もしない。フィルタの可視判定そのものはRust側が持つ。

use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use sabai_common::FilterSelector;

#[wasm_bindgen]
extern "C" {
    /// グリッドレイアウトライブラリ（ページグローバル）
    type Isotope;

    #[wasm_bindgen(constructor)]
    fn new(container: &Element, options: &JsValue) -> Isotope;

    #[wasm_bindgen(method)]
    fn arrange(this: &Isotope, options: &JsValue);
}

#[wasm_bindgen(js_namespace = AOS)]
extern "C" {
    #[wasm_bindgen(js_name = init)]
    fn aos_init(options: &JsValue);

    #[wasm_bindgen(js_name = refresh)]
    fn aos_refresh();
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IsotopeOptions<'a> {
    item_selector: &'a str,
    layout_mode: &'a str,
}

#[derive(Serialize)]
struct ArrangeOptions {
    filter: String,
}

#[derive(Serialize)]
struct AosOptions<'a> {
    duration: u32,
    easing: &'a str,
    once: bool,
    mirror: bool,
}

fn global_exists(name: &str) -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str(name)).unwrap_or(false))
        .unwrap_or(false)
}

/// フィルタ適用後に呼ばれる協調者
pub trait FilterLayout {
    fn apply(&self, selector: &FilterSelector);
}

/// Isotopeによる再配置 + AOSの再計測
pub struct IsotopeLayout {
    instance: Isotope,
}

impl IsotopeLayout {
    /// Isotopeグローバルがあればコンテナへ取り付ける
    pub fn attach(container: &Element, item_selector: &str) -> Option<Self> {
        if !global_exists("Isotope") {
            return None;
        }
        let options = serde_wasm_bindgen::to_value(&IsotopeOptions {
            item_selector,
            layout_mode: "fitRows",
        })
        .ok()?;
        Some(Self {
            instance: Isotope::new(container, &options),
        })
    }
}

impl FilterLayout for IsotopeLayout {
    fn apply(&self, selector: &FilterSelector) {
        let arrange = ArrangeOptions {
            filter: selector.css_selector(),
        };
        if let Ok(options) = serde_wasm_bindgen::to_value(&arrange) {
            self.instance.arrange(&options);
        }
        refresh_animations();
    }
}

/// スクロールアニメーションの初期化（AOS.init相当）
pub fn init_animations() {
    if !global_exists("AOS") {
        return;
    }
    let options = AosOptions {
        duration: 1000,
        easing: "ease-in-out",
        once: true,
        mirror: false,
    };
    if let Ok(options) = serde_wasm_bindgen::to_value(&options) {
        aos_init(&options);
    }
}

/// 表示項目が変わった後の再計測（AOS.refresh相当）
pub fn refresh_animations() {
    if global_exists("AOS") {
        aos_refresh();
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // テスト環境にはどちらのライブラリも読み込まれていない

    #[wasm_bindgen_test]
    fn attach_without_global_returns_none() {
        let document = gloo::utils::document();
        document
            .body()
            .unwrap()
            .set_inner_html(r#"<div class="menu-container"></div>"#);
        let container = document.query_selector(".menu-container").unwrap().unwrap();

        assert!(IsotopeLayout::attach(&container, ".menu-item").is_none());
    }

    #[wasm_bindgen_test]
    fn animation_calls_are_noops_without_global() {
        init_animations();
        refresh_animations();
    }
}
