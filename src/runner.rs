//! ワークフローのネイティブ実行系
//!
//! ブラウザ版と同じ `WorkflowController` を tokio のタイマーと
//! `ProcessingClient` で駆動する。

use bg_remove_common::{
    Effect, Event, NotificationCenter, Phase, Session, WorkflowConfig, WorkflowController,
};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::client::ProcessingClient;
use crate::local_file::LocalFile;

/// 進捗ティックの記録
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSample {
    pub percent: u8,
    /// セッション開始からの経過時間
    pub elapsed: Duration,
}

struct PendingDismiss {
    id: u64,
    due: Instant,
}

pub struct WorkflowRunner<C> {
    controller: WorkflowController,
    client: C,
    payload: Option<LocalFile>,
    progress_trace: Vec<ProgressSample>,
    pending_dismissals: Vec<PendingDismiss>,
}

impl<C: ProcessingClient> WorkflowRunner<C> {
    pub fn new(config: WorkflowConfig, client: C) -> Self {
        Self {
            controller: WorkflowController::new(config),
            client,
            payload: None,
            progress_trace: Vec::new(),
            pending_dismissals: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        self.controller.session()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        self.controller.notifications()
    }

    /// 直近のセッションの進捗記録
    pub fn progress_trace(&self) -> &[ProgressSample] {
        &self.progress_trace
    }

    /// 1ファイルを選択し、結果表示まで進める
    pub async fn select_file(&mut self, file: LocalFile) -> &Session {
        self.choose_files(vec![file]).await
    }

    /// ドロップ相当（先頭のみ使用）。検証に通れば結果表示まで進める
    pub async fn choose_files(&mut self, files: Vec<LocalFile>) -> &Session {
        let candidates = files.iter().map(|f| f.meta.clone()).collect();
        if self.controller.phase() == Phase::Idle {
            self.payload = files.into_iter().next();
            self.progress_trace.clear();
        }
        self.dispatch(Event::FilesChosen(candidates)).await;
        self.controller.session()
    }

    pub async fn remove_file(&mut self) {
        self.dispatch(Event::RemoveFile).await;
    }

    pub async fn reset_workflow(&mut self) {
        self.dispatch(Event::ProcessAnother).await;
    }

    pub async fn dismiss(&mut self, id: u64) {
        self.pending_dismissals.retain(|p| p.id != id);
        self.dispatch(Event::DismissNotification(id)).await;
    }

    /// 自動消去待ちの通知がすべて消えるまで待つ
    pub async fn wait_for_notifications(&mut self) {
        self.pending_dismissals.sort_by_key(|p| p.due);
        let pending = std::mem::take(&mut self.pending_dismissals);
        for p in pending {
            tokio::time::sleep_until(p.due).await;
            self.controller.dispatch(Event::DismissNotification(p.id));
        }
    }

    async fn dispatch(&mut self, event: Event) {
        let effects = self.controller.dispatch(event);
        if self.controller.phase() == Phase::Idle {
            self.payload = None;
        }
        self.run_effects(effects).await;
    }

    /// 副作用を順に実行し、その結果のイベントも処理する
    async fn run_effects(&mut self, effects: Vec<Effect>) {
        let mut queue: VecDeque<Effect> = effects.into();

        while let Some(effect) = queue.pop_front() {
            let next = match effect {
                Effect::ReadPreview { generation } => match &self.payload {
                    Some(file) => {
                        let url = file.data_url();
                        self.controller.dispatch(Event::PreviewReady { generation, url })
                    }
                    None => Vec::new(),
                },
                Effect::StartProgress {
                    generation,
                    interval_ms,
                } => self.run_progress(generation, interval_ms).await,
                Effect::Submit { generation, file } => {
                    let outcome = match &self.payload {
                        Some(payload) => self.client.submit(&file, &payload.bytes).await,
                        None => Err(bg_remove_common::Error::Network(
                            "selected file is no longer available".into(),
                        )),
                    };
                    match &outcome {
                        Ok(image) => info!(url = %image.processed_url, "background removed"),
                        Err(e) => warn!(error = %e, "processing failed"),
                    }
                    self.controller
                        .dispatch(Event::ProcessingFinished { generation, outcome })
                }
                Effect::ScheduleDismiss { id, after_ms } => {
                    self.pending_dismissals.push(PendingDismiss {
                        id,
                        due: Instant::now() + Duration::from_millis(after_ms as u64),
                    });
                    Vec::new()
                }
            };
            queue.extend(next);
        }

        if self.controller.phase() == Phase::Idle {
            self.payload = None;
        }
    }

    /// 100%に達するまで一定間隔でティックを送る
    async fn run_progress(&mut self, generation: u64, interval_ms: u32) -> Vec<Effect> {
        let started = Instant::now();
        let interval = Duration::from_millis(interval_ms as u64);
        let mut effects = Vec::new();

        loop {
            sleep(interval).await;
            let tick_effects = self.controller.dispatch(Event::ProgressTick { generation });
            let session = self.controller.session();
            if session.generation != generation || session.phase != Phase::Processing {
                break;
            }
            self.progress_trace.push(ProgressSample {
                percent: session.progress.percent(),
                elapsed: started.elapsed(),
            });
            debug!(
                percent = session.progress.percent(),
                ticks = session.progress.ticks(),
                "progress"
            );
            let complete = session.progress.is_complete();
            effects.extend(tick_effects);
            if complete {
                break;
            }
        }

        effects
    }
}
