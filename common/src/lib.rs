//! Sabai Thai Common Library
//!
//! WASMフロントエンドと共有されるドメインロジック（ブラウザ非依存）

pub mod booking;
pub mod error;
pub mod filter;
pub mod lang;
pub mod scroll;

pub use booking::{BookingPayload, SubmissionState, PLACE_GID, SUBMIT_ERROR_MESSAGE};
pub use error::{Error, Result};
pub use filter::FilterSelector;
pub use lang::Lang;
