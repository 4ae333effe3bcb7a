//! ページ各部のコントローラ
//!
//! 各コントローラは初期化時に必要なDOM参照を取り込み、対象要素が
//! 見つからなければNoneを返して機能ごと無効化する。グローバルな
//! モジュール状態は持たない。

pub mod booking_form;
pub mod lang_switcher;
pub mod menu_filter;
pub mod navbar;
pub mod scroll_effects;
