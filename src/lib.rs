//! BG Remove Pro ネイティブ実行系
//!
//! ブラウザと同じアップロードワークフローを tokio + reqwest で動かす。
//! 実サーバーに対する結合テストや、ブラウザなしでの動作確認に使う。

pub mod client;
pub mod config;
pub mod error;
pub mod local_file;
pub mod runner;

pub use client::{HttpClient, ProcessingClient};
pub use config::Config;
pub use error::{BgRemoveError, Result};
pub use local_file::LocalFile;
pub use runner::{ProgressSample, WorkflowRunner};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// RUST_LOG があればそれを、無ければ info レベルでログ出力
///
/// 2回目以降の呼び出しは何もしない。
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bg_remove_pro=info,bg_remove_common=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
