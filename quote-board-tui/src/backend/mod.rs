//! Backend 层：与 UI 无关的服务
//!
//! - `QuoteBackend`：在 tokio 运行时上执行 `BackendCommand`，结果经 channel 送回
//! - `ConfigService`：读写 JSON 配置文件

mod config_service;
mod quote_backend;

pub use config_service::{
    resolve_server_url, AppConfig, ConfigService, JsonConfigService, SERVER_URL_ENV,
};
pub use quote_backend::QuoteBackend;
