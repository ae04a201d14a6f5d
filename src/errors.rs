use thiserror::Error;

/// Everything a gateway operation can fail with. Commands flatten these to
/// the user-visible message at the Tauri boundary; nothing is retried and
/// nothing crashes the view.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Caught before any request leaves the process.
    #[error("{0}")]
    Validation(String),

    /// The administrator password did not match; no write happened.
    #[error("密碼錯誤，不准修改！")]
    Unauthorized,

    /// The store rejected the operation; carries its own message when the
    /// response body had one.
    #[error("資料庫拒絕了！原因：{0}")]
    Store(String),

    /// The request never completed.
    #[error("連線失敗：{0}")]
    Transport(#[from] reqwest::Error),

    /// The store location or secrets are missing from the environment.
    #[error("伺服器尚未設定：{0}")]
    Config(String),
}
