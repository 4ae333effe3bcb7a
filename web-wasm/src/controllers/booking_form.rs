//! 予約フォーム送信コントローラ
//!
//! submitを横取りしてWebhookへPOSTし、loading / sent / error の
//! インジケータを排他的に切り替える。多重送信ガードは持たない
//! （連打されればその回数だけ送る）。

use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Array;
use wasm_bindgen_futures::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlFormElement};

use sabai_common::{BookingPayload, Error, SubmissionState, SUBMIT_ERROR_MESSAGE};

use crate::api::webhook;
use crate::dom;

const FORM_ID: &str = "bookingForm";
const LOADING_SELECTOR: &str = ".loading";
const ERROR_SELECTOR: &str = ".error-message";
const SENT_SELECTOR: &str = ".sent-message";

pub struct BookingFormController {
    _listener: EventListener,
}

impl BookingFormController {
    /// フォームと3つのインジケータが揃っていれば配線する
    pub fn init(document: &Document) -> Option<Self> {
        Self::with_endpoint(document, webhook::WEBHOOK_URL)
    }

    fn with_endpoint(document: &Document, endpoint: &'static str) -> Option<Self> {
        let targets = Rc::new(BookingTargets::find(document)?);
        let form = targets.form.clone();

        // passiveリスナーではprevent_defaultが無視される
        let options = EventListenerOptions::enable_prevent_default();
        let listener = EventListener::new_with_options(&form, "submit", options, move |event| {
            event.prevent_default();

            targets.apply_state(SubmissionState::Loading);

            let payload = targets.collect_payload();
            let targets = Rc::clone(&targets);
            spawn_local(async move {
                let outcome = match payload {
                    Ok(payload) => webhook::send_to(endpoint, &payload).await,
                    Err(err) => Err(err),
                };
                targets.settle(outcome);
            });
        });

        Some(Self {
            _listener: listener,
        })
    }
}

struct BookingTargets {
    form: HtmlFormElement,
    loading: Element,
    error: Element,
    sent: Element,
}

impl BookingTargets {
    fn find(document: &Document) -> Option<Self> {
        let form: HtmlFormElement = document.get_element_by_id(FORM_ID)?.dyn_into().ok()?;
        Some(Self {
            form,
            loading: dom::select(document, LOADING_SELECTOR)?,
            error: dom::select(document, ERROR_SELECTOR)?,
            sent: dom::select(document, SENT_SELECTOR)?,
        })
    }

    /// フォームの name→value を集め、固定のgidを付与する
    fn collect_payload(&self) -> Result<BookingPayload, Error> {
        let form_data = FormData::new_with_form(&self.form)
            .map_err(|err| Error::Transport(format!("{:?}", err)))?;

        let mut fields = Vec::new();
        if let Ok(Some(entries)) = js_sys::try_iter(&form_data) {
            for entry in entries.flatten() {
                let pair: Array = entry.unchecked_into();
                let Some(name) = pair.get(0).as_string() else {
                    continue;
                };
                // ファイル値は来ない前提（テキスト系フィールドのみのフォーム）
                let value = pair.get(1).as_string().unwrap_or_default();
                fields.push((name, value));
            }
        }

        Ok(BookingPayload::from_fields(fields))
    }

    /// HTTP交換の結果で終端状態へ遷移する
    fn settle(&self, outcome: sabai_common::Result<()>) {
        if let Err(err) = &outcome {
            // 失敗詳細はオペレータ向けコンソールだけに出す
            console::error!("booking submit failed:", err.to_string());
        }

        let state = SubmissionState::settle(&outcome);
        if state.resets_form() {
            self.form.reset();
        }
        self.apply_state(state);
    }

    /// インジケータ3つを排他的に表示する
    fn apply_state(&self, state: SubmissionState) {
        if state.error_visible() {
            self.error.set_inner_html(SUBMIT_ERROR_MESSAGE);
        }
        set_visible(&self.loading, state.loading_visible());
        set_visible(&self.sent, state.sent_visible());
        set_visible(&self.error, state.error_visible());
    }
}

fn set_visible(el: &Element, visible: bool) {
    if visible {
        dom::show(el);
    } else {
        dom::hide(el);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};

    wasm_bindgen_test_configure!(run_in_browser);

    // 到達不能なエンドポイント。テストから本物のWebhookを叩かないため
    const TEST_ENDPOINT: &str = "https://127.0.0.1:9/";

    const FIXTURE: &str = r#"
        <form id="bookingForm" action="">
            <input type="text" name="name">
            <input type="text" name="phone">
        </form>
        <div class="loading" style="display: none;">Loading</div>
        <div class="error-message" style="display: none;"></div>
        <div class="sent-message" style="display: none;">Your booking request was sent!</div>
    "#;

    fn setup_dom() -> Document {
        let document = gloo::utils::document();
        document.body().unwrap().set_inner_html(FIXTURE);
        document
    }

    fn set_field(document: &Document, name: &str, value: &str) {
        let input: HtmlInputElement = document
            .query_selector(&format!("input[name='{}']", name))
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_value(value);
    }

    fn field_value(document: &Document, name: &str) -> String {
        let input: HtmlInputElement = document
            .query_selector(&format!("input[name='{}']", name))
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        input.value()
    }

    fn display_of(el: &Element) -> String {
        el.unchecked_ref::<HtmlElement>()
            .style()
            .get_property_value("display")
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn init_requires_form_and_indicators() {
        let document = gloo::utils::document();
        document
            .body()
            .unwrap()
            .set_inner_html(r#"<form id="bookingForm"></form><div class="loading"></div>"#);

        assert!(BookingFormController::init(&document).is_none());
    }

    #[wasm_bindgen_test]
    fn submit_is_intercepted_and_enters_loading() {
        let document = setup_dom();
        let _controller =
            BookingFormController::with_endpoint(&document, TEST_ENDPOINT).expect("init failed");
        let targets = BookingTargets::find(&document).unwrap();

        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("submit", &init).unwrap();

        let not_canceled = targets.form.dispatch_event(&event).unwrap();

        // デフォルトの遷移が抑止されている
        assert!(!not_canceled);
        assert!(event.default_prevented());

        // ネットワークが解決する前からloadingだけが見えている
        assert_eq!(display_of(&targets.loading), "block");
        assert_eq!(display_of(&targets.sent), "none");
        assert_eq!(display_of(&targets.error), "none");
    }

    #[wasm_bindgen_test]
    fn collect_payload_gathers_fields_and_gid() {
        let document = setup_dom();
        set_field(&document, "name", "Jane");
        set_field(&document, "phone", "555-1234");
        let targets = BookingTargets::find(&document).unwrap();

        let payload = targets.collect_payload().expect("collect failed");
        let json = payload.to_json().expect("serialize failed");

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let expected = serde_json::json!({
            "name": "Jane",
            "phone": "555-1234",
            "gid": "ChIJFTW2SvrxVDARlZfGIQe67OU",
        });
        assert_eq!(value, expected);
    }

    #[wasm_bindgen_test]
    fn settle_success_shows_sent_and_resets_form() {
        let document = setup_dom();
        set_field(&document, "name", "Jane");
        let targets = BookingTargets::find(&document).unwrap();
        targets.apply_state(SubmissionState::Loading);

        targets.settle(Ok(()));

        assert_eq!(display_of(&targets.loading), "none");
        assert_eq!(display_of(&targets.sent), "block");
        assert_eq!(display_of(&targets.error), "none");
        assert_eq!(field_value(&document, "name"), "");
    }

    #[wasm_bindgen_test]
    fn settle_failure_shows_message_and_keeps_fields() {
        let document = setup_dom();
        set_field(&document, "name", "Jane");
        set_field(&document, "phone", "555-1234");
        let targets = BookingTargets::find(&document).unwrap();
        targets.apply_state(SubmissionState::Loading);

        targets.settle(Err(Error::Status(500)));

        assert_eq!(display_of(&targets.loading), "none");
        assert_eq!(display_of(&targets.sent), "none");
        assert_eq!(display_of(&targets.error), "block");
        assert_eq!(
            targets.error.text_content().unwrap_or_default(),
            SUBMIT_ERROR_MESSAGE
        );
        assert_eq!(field_value(&document, "name"), "Jane");
        assert_eq!(field_value(&document, "phone"), "555-1234");
    }

    #[wasm_bindgen_test]
    fn transport_failure_looks_the_same_as_status_failure() {
        let document = setup_dom();
        let targets = BookingTargets::find(&document).unwrap();

        targets.settle(Err(Error::Transport("connection refused".to_string())));

        assert_eq!(display_of(&targets.error), "block");
        assert_eq!(
            targets.error.text_content().unwrap_or_default(),
            SUBMIT_ERROR_MESSAGE
        );
        assert_eq!(display_of(&targets.sent), "none");
    }

    #[wasm_bindgen_test]
    fn resubmit_after_failure_reenters_loading() {
        let document = setup_dom();
        let targets = BookingTargets::find(&document).unwrap();

        targets.settle(Err(Error::Status(500)));
        assert_eq!(display_of(&targets.error), "block");

        // 再送信でloadingへ戻り、前回のエラー表示は消える
        targets.apply_state(SubmissionState::Loading);
        assert_eq!(display_of(&targets.loading), "block");
        assert_eq!(display_of(&targets.error), "none");
        assert_eq!(display_of(&targets.sent), "none");
    }
}
