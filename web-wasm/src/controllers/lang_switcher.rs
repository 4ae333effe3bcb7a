//! 言語切替（英語 / タイ語）
//!
//! マークアップ側の onclick="switchLang('th')" から呼ばれる前提で
//! switchLang をページへグローバル公開する。data-en / data-th の
//! 両属性を持つ要素だけが差し替え対象。

use wasm_bindgen::prelude::*;
use web_sys::Document;

use sabai_common::Lang;

use crate::dom;

const BUTTON_SELECTOR: &str = ".lang-btn";
const TEXT_SELECTOR: &str = "[data-en]";
const ACTIVE_CLASS: &str = "active";

/// 表示言語を切り替える（マークアップのボタンから直接呼ばれる）
#[wasm_bindgen(js_name = switchLang)]
pub fn switch_lang(code: &str) {
    let Some(lang) = Lang::from_code(code) else {
        return;
    };
    apply_lang(&gloo::utils::document(), lang);
}

pub(crate) fn apply_lang(document: &Document, lang: Lang) {
    // 選択中ボタンのハイライトを付け替える
    let marker = format!("'{}'", lang.code());
    for button in dom::select_all(document, BUTTON_SELECTOR) {
        let selected = button
            .get_attribute("onclick")
            .is_some_and(|handler| handler.contains(&marker));
        dom::set_class(&button, ACTIVE_CLASS, selected);
    }

    // テキストの差し替え。プレースホルダは対象外
    for el in dom::select_all(document, TEXT_SELECTOR) {
        let tag = el.tag_name();
        if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") {
            continue;
        }
        if let Some(text) = el.get_attribute(lang.text_attr()) {
            el.set_text_content(Some(&text));
        }
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r#"
        <button class="lang-btn active" onclick="switchLang('en')">EN</button>
        <button class="lang-btn" onclick="switchLang('th')">TH</button>
        <h2 id="title" data-en="Our Menu" data-th="เมนูของเรา">Our Menu</h2>
        <p id="partial" data-en="Welcome">Welcome</p>
        <input id="field" data-en="Name" value="untouched">
    "#;

    fn setup() -> Document {
        let document = gloo::utils::document();
        document.body().unwrap().set_inner_html(FIXTURE);
        document
    }

    fn text_of(document: &Document, id: &str) -> String {
        document
            .get_element_by_id(id)
            .unwrap()
            .text_content()
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn switch_to_thai_replaces_text_and_button() {
        let document = setup();

        apply_lang(&document, Lang::Th);

        assert_eq!(text_of(&document, "title"), "เมนูของเรา");
        let en_button = dom::select(&document, ".lang-btn[onclick=\"switchLang('en')\"]").unwrap();
        let th_button = dom::select(&document, ".lang-btn[onclick=\"switchLang('th')\"]").unwrap();
        assert!(!dom::has_class(&en_button, "active"));
        assert!(dom::has_class(&th_button, "active"));
    }

    #[wasm_bindgen_test]
    fn switch_back_to_english_restores_text() {
        let document = setup();

        apply_lang(&document, Lang::Th);
        apply_lang(&document, Lang::En);

        assert_eq!(text_of(&document, "title"), "Our Menu");
        let en_button = dom::select(&document, ".lang-btn[onclick=\"switchLang('en')\"]").unwrap();
        assert!(dom::has_class(&en_button, "active"));
    }

    #[wasm_bindgen_test]
    fn element_without_target_attr_is_left_alone() {
        let document = setup();

        apply_lang(&document, Lang::Th);

        // data-thが無い要素は英語のまま
        assert_eq!(text_of(&document, "partial"), "Welcome");
    }

    #[wasm_bindgen_test]
    fn input_values_are_not_translated() {
        let document = setup();

        apply_lang(&document, Lang::Th);

        let field: web_sys::HtmlInputElement = document
            .get_element_by_id("field")
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(field.value(), "untouched");
    }

    #[wasm_bindgen_test]
    fn unknown_code_is_ignored() {
        let document = setup();

        switch_lang("jp");

        assert_eq!(text_of(&document, "title"), "Our Menu");
    }
}
