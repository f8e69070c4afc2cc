//! 后台请求执行器
//!
//! 每条 `BackendCommand` 在 tokio 运行时上作为独立任务执行，
//! 完成后把 `BackendEvent` 发回 channel。主循环每一轮用 `try_recv` 取出结果，
//! 所以 UI 线程从不等待网络。
//!
//! 请求之间没有顺序保证，也不支持取消。

use std::sync::Arc;

use anyhow::{Context, Result};
use quote_board_client::{ClientConfig, HttpQuoteApi, QuoteService};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::message::{BackendCommand, BackendEvent};

/// TUI 的后台服务
pub struct QuoteBackend {
    service: QuoteService,
    handle: Handle,
    tx: UnboundedSender<BackendEvent>,
    rx: UnboundedReceiver<BackendEvent>,
}

impl QuoteBackend {
    /// 连接到 HTTP 服务端
    pub fn connect(config: &ClientConfig, handle: Handle) -> Result<Self> {
        let api = HttpQuoteApi::new(config).context("Failed to create the HTTP client")?;
        log::info!("Using quote server at {}", config.base_url());
        Ok(Self::new(QuoteService::new(Arc::new(api)), handle))
    }

    pub fn new(service: QuoteService, handle: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            service,
            handle,
            tx,
            rx,
        }
    }

    /// 在后台执行一条请求
    pub fn dispatch(&self, command: BackendCommand) {
        log::debug!("Dispatching {command:?}");

        let service = self.service.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let event = execute(&service, command).await;
            if tx.send(event).is_err() {
                log::debug!("UI has shut down, dropping backend result");
            }
        });
    }

    /// 取出一个已完成的结果（不阻塞）
    pub fn try_recv(&mut self) -> Option<BackendEvent> {
        self.rx.try_recv().ok()
    }

    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<BackendEvent> {
        self.rx.recv().await
    }
}

async fn execute(service: &QuoteService, command: BackendCommand) -> BackendEvent {
    match command {
        BackendCommand::LoadQuotes => BackendEvent::Loaded(service.list().await),
        BackendCommand::CreateQuote(draft) => {
            let result = service.create(draft.clone()).await;
            BackendEvent::Created { draft, result }
        }
        BackendCommand::UpdateQuote(submitted) => {
            let result = service.update(submitted.clone()).await;
            BackendEvent::Updated { submitted, result }
        }
        BackendCommand::DeleteQuote(id) => {
            let result = service.delete(id.clone()).await.map(|_| ());
            BackendEvent::Deleted { id, result }
        }
        BackendCommand::RandomQuote => BackendEvent::Random(service.random().await),
    }
}
