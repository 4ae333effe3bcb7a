//! 予約Webhook連携
//!
//! 予約フォームの内容をJSONで固定エンドポイントへPOSTする。
//! レスポンスボディは読まず、ステータスの成否だけを見る。
//! リトライ・タイムアウト・バックオフは行わない（1回撃って終わり）。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use sabai_common::{BookingPayload, Error};

/// 送信先（make.com のWebhookリレー）
pub const WEBHOOK_URL: &str = "https://hook.eu1.make.com/9zmguwti3y7qg2nd59x21s579xqr9f4s";

/// POSTリクエストを組み立てる
pub(crate) fn build_request(url: &str, payload: &BookingPayload) -> Result<Request, Error> {
    let body = payload.to_json()?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(into_transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(into_transport)?;

    Ok(request)
}

/// 指定エンドポイントへ送信し、結果だけを返す
pub async fn send_to(url: &str, payload: &BookingPayload) -> Result<(), Error> {
    let request = build_request(url, payload)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(into_transport)?;
    let resp: Response = resp_value.dyn_into().map_err(into_transport)?;

    // ステータスコードによる分岐はしない（失敗は全部同じ扱い）
    if resp.ok() {
        Ok(())
    } else {
        Err(Error::Status(resp.status()))
    }
}

/// 本番エンドポイントへ送信する
pub async fn send(payload: &BookingPayload) -> Result<(), Error> {
    send_to(WEBHOOK_URL, payload).await
}

fn into_transport(err: JsValue) -> Error {
    Error::Transport(format!("{:?}", err))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn build_request_sets_method_url_and_header() {
        let payload = BookingPayload::from_fields([("name", "Jane")]);
        let request = build_request(WEBHOOK_URL, &payload).expect("build failed");

        assert_eq!(request.method(), "POST");
        assert_eq!(request.url(), WEBHOOK_URL);
        assert_eq!(
            request.headers().get("Content-Type").unwrap(),
            Some("application/json".to_string())
        );
    }

    #[wasm_bindgen_test]
    async fn build_request_body_carries_all_fields() {
        let payload = BookingPayload::from_fields([("name", "Jane"), ("phone", "555-1234")]);
        let request = build_request("https://example.com/hook", &payload).expect("build failed");

        let body = JsFuture::from(request.text().unwrap()).await.unwrap();
        let body = body.as_string().unwrap();

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        let expected = serde_json::json!({
            "name": "Jane",
            "phone": "555-1234",
            "gid": "ChIJFTW2SvrxVDARlZfGIQe67OU",
        });
        assert_eq!(value, expected);
    }
}
