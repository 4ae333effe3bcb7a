//! 予約フォーム送信のドメインロジック
//!
//! - BookingPayload: フォーム内容 + 固定の店舗ID（gid）
//! - SubmissionState: loading / sent / error の排他的UI状態

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;

/// 送信ペイロードに常に付与するGoogleプレイスID
pub const PLACE_GID: &str = "ChIJFTW2SvrxVDARlZfGIQe67OU";

/// 送信失敗時にユーザーへ見せる固定メッセージ
pub const SUBMIT_ERROR_MESSAGE: &str = "Something went wrong. Please call us directly.";

/// 1回の送信ごとに作られるペイロード
///
/// フォームの name→value をそのまま保持し、`gid` を必ず上書きで付与する。
/// 送信が解決したら破棄される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookingPayload {
    fields: BTreeMap<String, String>,
}

impl BookingPayload {
    /// フォームフィールドの列からペイロードを組み立てる
    ///
    /// 同名フィールドは後勝ち。`gid` はフォーム値より固定IDを優先する。
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: BTreeMap<String, String> = fields
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        fields.insert("gid".to_string(), PLACE_GID.to_string());
        Self { fields }
    }

    /// JSONボディへシリアライズする
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        // gidが常に入るため実際には空にならない
        self.fields.is_empty()
    }
}

/// 送信UIの排他的状態
///
/// loading / sent / error のインジケータはこの状態から導出され、
/// 同時に2つ以上が可視になることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Sent,
    Failed,
}

impl SubmissionState {
    /// HTTP交換の結果から終端状態を決める
    pub fn settle<T>(outcome: &Result<T>) -> Self {
        match outcome {
            Ok(_) => Self::Sent,
            Err(_) => Self::Failed,
        }
    }

    pub fn loading_visible(self) -> bool {
        self == Self::Loading
    }

    pub fn sent_visible(self) -> bool {
        self == Self::Sent
    }

    pub fn error_visible(self) -> bool {
        self == Self::Failed
    }

    /// フォームをリセットするのは成功時だけ
    pub fn resets_form(self) -> bool {
        self == Self::Sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    // =============================================
    // BookingPayload
    // =============================================

    #[test]
    fn test_payload_injects_gid() {
        let payload = BookingPayload::from_fields([("name", "Jane")]);
        assert_eq!(payload.get("gid"), Some(PLACE_GID));
        assert_eq!(payload.get("name"), Some("Jane"));
        assert_eq!(payload.len(), 2);
    }

    #[test]
    fn test_payload_gid_overwrites_form_field() {
        let payload = BookingPayload::from_fields([("gid", "spoofed")]);
        assert_eq!(payload.get("gid"), Some(PLACE_GID));
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn test_payload_json_exact_shape() {
        // name="Jane", phone="555-1234" のフォームを送信した場合のボディ
        let payload = BookingPayload::from_fields([("name", "Jane"), ("phone", "555-1234")]);
        let json = payload.to_json().expect("シリアライズ失敗");

        let value: serde_json::Value = serde_json::from_str(&json).expect("パース失敗");
        let expected = serde_json::json!({
            "name": "Jane",
            "phone": "555-1234",
            "gid": "ChIJFTW2SvrxVDARlZfGIQe67OU",
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn test_payload_no_extra_keys() {
        let payload = BookingPayload::from_fields([("email", "a@b.c")]);
        let json = payload.to_json().expect("シリアライズ失敗");
        let value: serde_json::Value = serde_json::from_str(&json).expect("パース失敗");
        let map = value.as_object().expect("オブジェクトでない");
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("email"));
        assert!(map.contains_key("gid"));
    }

    #[test]
    fn test_payload_empty_form_still_has_gid() {
        let payload = BookingPayload::from_fields(Vec::<(String, String)>::new());
        assert!(!payload.is_empty());
        assert_eq!(payload.len(), 1);
    }

    // =============================================
    // SubmissionState
    // =============================================

    #[test]
    fn test_settle_success() {
        let outcome: crate::Result<()> = Ok(());
        assert_eq!(SubmissionState::settle(&outcome), SubmissionState::Sent);
    }

    #[test]
    fn test_settle_status_failure() {
        let outcome: crate::Result<()> = Err(Error::Status(500));
        assert_eq!(SubmissionState::settle(&outcome), SubmissionState::Failed);
    }

    #[test]
    fn test_settle_transport_failure() {
        // ステータス失敗とトランスポート失敗は同じ終端状態に落ちる
        let outcome: crate::Result<()> = Err(Error::Transport("offline".to_string()));
        assert_eq!(SubmissionState::settle(&outcome), SubmissionState::Failed);
    }

    #[test]
    fn test_at_most_one_indicator_visible() {
        for state in [
            SubmissionState::Idle,
            SubmissionState::Loading,
            SubmissionState::Sent,
            SubmissionState::Failed,
        ] {
            let visible = [
                state.loading_visible(),
                state.sent_visible(),
                state.error_visible(),
            ];
            let count = visible.iter().filter(|v| **v).count();
            assert!(count <= 1, "{:?} で複数インジケータが可視", state);
        }
    }

    #[test]
    fn test_resets_form_only_on_success() {
        assert!(SubmissionState::Sent.resets_form());
        assert!(!SubmissionState::Failed.resets_form());
        assert!(!SubmissionState::Loading.resets_form());
        assert!(!SubmissionState::Idle.resets_form());
    }
}
