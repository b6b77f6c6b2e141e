//! アップロードワークフローのコントローラ
//!
//! 状態は `WorkflowController` が一元的に保持し、入力はすべて `Event` として
//! `dispatch` に渡す。遷移関数はタイマーや通信を直接行わず、実行してほしい
//! 副作用を `Effect` として返す。WASM版とネイティブ版はそれぞれの方法で
//! `Effect` を実行し、結果を再び `Event` として戻す。
//!
//! ```text
//! Idle --FilesChosen(ok)--> FileSelected --(即時)--> Processing
//! Processing --ProcessingFinished(ok)--> Result
//! Processing --ProcessingFinished(err)--> Result (fallback)
//! Result --ProcessAnother--> Idle
//! Idle/FileSelected --RemoveFile--> Idle
//! ```

use crate::config::WorkflowConfig;
use crate::error::Result;
use crate::notification::{NotificationCenter, NotificationKind};
use crate::response::ProcessedImage;
use crate::types::{FileCandidate, Phase, ResultMode, SelectedFile, Session};
use crate::validation::{invalid_file_message, validate_file};

const SUCCESS_MESSAGE: &str = "Background removed successfully!";

/// コントローラへの入力
#[derive(Debug)]
pub enum Event {
    /// クリック選択またはドロップされたファイル（先頭のみ使用）
    FilesChosen(Vec<FileCandidate>),
    /// ローカルプレビューの読込完了
    PreviewReady { generation: u64, url: String },
    ProgressTick { generation: u64 },
    ProcessingFinished {
        generation: u64,
        outcome: Result<ProcessedImage>,
    },
    RemoveFile,
    ProcessAnother,
    DismissNotification(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    FilesChosen,
    PreviewReady,
    ProgressTick,
    ProcessingFinished,
    RemoveFile,
    ProcessAnother,
    DismissNotification,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::FilesChosen(_) => EventKind::FilesChosen,
            Event::PreviewReady { .. } => EventKind::PreviewReady,
            Event::ProgressTick { .. } => EventKind::ProgressTick,
            Event::ProcessingFinished { .. } => EventKind::ProcessingFinished,
            Event::RemoveFile => EventKind::RemoveFile,
            Event::ProcessAnother => EventKind::ProcessAnother,
            Event::DismissNotification(_) => EventKind::DismissNotification,
        }
    }
}

/// 実行系に依頼する副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 選択ファイルからプレビューURLを作り `PreviewReady` を返す
    ReadPreview { generation: u64 },
    /// `interval_ms` ごとに `ProgressTick` を送る（100%まで）
    StartProgress { generation: u64, interval_ms: u32 },
    /// 画像を送信し `ProcessingFinished` を返す
    Submit { generation: u64, file: SelectedFile },
    /// `after_ms` 後に `DismissNotification(id)` を送る
    ScheduleDismiss { id: u64, after_ms: u32 },
}

type Transition = fn(&mut WorkflowController, Event) -> Vec<Effect>;

/// イベント種別 → 遷移関数
const TRANSITIONS: &[(EventKind, Transition)] = &[
    (EventKind::FilesChosen, WorkflowController::on_files_chosen),
    (EventKind::PreviewReady, WorkflowController::on_preview_ready),
    (EventKind::ProgressTick, WorkflowController::on_progress_tick),
    (EventKind::ProcessingFinished, WorkflowController::on_processing_finished),
    (EventKind::RemoveFile, WorkflowController::on_remove_file),
    (EventKind::ProcessAnother, WorkflowController::on_process_another),
    (EventKind::DismissNotification, WorkflowController::on_dismiss_notification),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowController {
    config: WorkflowConfig,
    session: Session,
    notifications: NotificationCenter,
    last_generation: u64,
}

impl WorkflowController {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// イベントを処理し、実行すべき副作用を返す
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let kind = event.kind();
        match TRANSITIONS.iter().find(|(k, _)| *k == kind) {
            Some((_, transition)) => transition(self, event),
            None => {
                log::warn!("no transition registered for {:?}", kind);
                Vec::new()
            }
        }
    }

    /// 1ファイルを選択
    pub fn select_file(&mut self, candidate: FileCandidate) -> Vec<Effect> {
        self.dispatch(Event::FilesChosen(vec![candidate]))
    }

    pub fn remove_file(&mut self) -> Vec<Effect> {
        self.dispatch(Event::RemoveFile)
    }

    pub fn reset_workflow(&mut self) -> Vec<Effect> {
        self.dispatch(Event::ProcessAnother)
    }

    fn on_files_chosen(&mut self, event: Event) -> Vec<Effect> {
        let Event::FilesChosen(candidates) = event else {
            return Vec::new();
        };
        let Some(candidate) = candidates.into_iter().next() else {
            log::debug!("drop without files ignored");
            return Vec::new();
        };
        if self.session.phase != Phase::Idle {
            log::debug!("file ignored in phase {}", self.session.phase.as_str());
            return Vec::new();
        }

        if let Err(e) = validate_file(&candidate, &self.config) {
            log::warn!("rejected {}: {}", candidate.name, e);
            let message = invalid_file_message(&self.config);
            return vec![self.notify(NotificationKind::Error, message)];
        }

        self.last_generation += 1;
        let generation = self.last_generation;
        log::debug!(
            "session {} started: {} ({} bytes)",
            generation,
            candidate.name,
            candidate.size
        );
        self.session = Session {
            generation,
            phase: Phase::FileSelected,
            selected_file: Some(SelectedFile::from_validated(candidate)),
            ..Default::default()
        };

        let mut effects = vec![Effect::ReadPreview { generation }];
        effects.extend(self.start_processing());
        effects
    }

    /// FileSelected → Processing（ユーザー操作なしで即時）
    fn start_processing(&mut self) -> Vec<Effect> {
        if self.session.phase != Phase::FileSelected || self.session.selected_file.is_none() {
            return Vec::new();
        }
        self.session.phase = Phase::Processing;
        vec![Effect::StartProgress {
            generation: self.session.generation,
            interval_ms: self.config.progress_interval_ms,
        }]
    }

    fn on_preview_ready(&mut self, event: Event) -> Vec<Effect> {
        let Event::PreviewReady { generation, url } = event else {
            return Vec::new();
        };
        if !self.is_current(generation) {
            log::debug!("stale preview for session {} dropped", generation);
            return Vec::new();
        }
        self.session.original_preview_url = Some(url);
        Vec::new()
    }

    fn on_progress_tick(&mut self, event: Event) -> Vec<Effect> {
        let Event::ProgressTick { generation } = event else {
            return Vec::new();
        };
        if !self.is_current(generation) || self.session.phase != Phase::Processing {
            return Vec::new();
        }
        if self.session.progress.is_complete() {
            return Vec::new();
        }

        let complete = self.session.progress.advance(self.config.progress_step);
        if !complete {
            return Vec::new();
        }

        match &self.session.selected_file {
            Some(file) => vec![Effect::Submit {
                generation,
                file: file.clone(),
            }],
            None => Vec::new(),
        }
    }

    fn on_processing_finished(&mut self, event: Event) -> Vec<Effect> {
        let Event::ProcessingFinished { generation, outcome } = event else {
            return Vec::new();
        };
        if !self.is_current(generation)
            || self.session.phase != Phase::Processing
            || !self.session.progress.is_complete()
        {
            log::debug!("stale processing result for session {} dropped", generation);
            return Vec::new();
        }

        match outcome {
            Ok(image) => {
                log::debug!("session {} processed: {}", generation, image.processed_url);
                self.session.result = Some(ResultMode::Processed {
                    processed_url: image.processed_url,
                    original_url: image.original_url,
                });
                self.session.phase = Phase::Result;
                vec![self.notify(NotificationKind::Success, SUCCESS_MESSAGE)]
            }
            Err(e) => {
                log::warn!("session {} processing failed: {}", generation, e);
                let effect = self.notify(NotificationKind::Error, format!("Error: {}", e));
                if self.config.fallback_on_error {
                    self.session.result = Some(ResultMode::Fallback {
                        error: e.to_string(),
                    });
                    self.session.phase = Phase::Result;
                } else {
                    self.session = Session::default();
                }
                vec![effect]
            }
        }
    }

    fn on_remove_file(&mut self, _event: Event) -> Vec<Effect> {
        match self.session.phase {
            Phase::Idle | Phase::FileSelected => {
                self.session = Session::default();
            }
            phase => log::debug!("remove ignored in phase {}", phase.as_str()),
        }
        Vec::new()
    }

    fn on_process_another(&mut self, _event: Event) -> Vec<Effect> {
        log::debug!("workflow reset from {}", self.session.phase.as_str());
        self.session = Session::default();
        Vec::new()
    }

    fn on_dismiss_notification(&mut self, event: Event) -> Vec<Effect> {
        if let Event::DismissNotification(id) = event {
            self.notifications.dismiss(id);
        }
        Vec::new()
    }

    fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> Effect {
        let id = self.notifications.push(kind, message);
        Effect::ScheduleDismiss {
            id,
            after_ms: self.config.notification_ttl_ms,
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.session.phase != Phase::Idle && self.session.generation == generation
    }
}
