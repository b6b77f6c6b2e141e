//! ブラウザ上の副作用実行
//!
//! コントローラは `RwSignal` に1つだけ置き、画面はその射影として描画する。
//! `Effect` はここで gloo のタイマー・FileReader・fetch に変換される。

use std::cell::RefCell;

use bg_remove_common::{Effect, Error, Event, FileCandidate, Phase, WorkflowConfig, WorkflowController};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileList, FileReader};

use crate::api::upload::submit_image;

thread_local! {
    /// 選択中ファイルの本体（コントローラはメタデータのみ持つ）
    static SELECTED_PAYLOAD: RefCell<Option<File>> = const { RefCell::new(None) };
}

#[derive(Clone, Copy)]
pub struct Driver {
    controller: RwSignal<WorkflowController>,
}

impl Driver {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            controller: RwSignal::new(WorkflowController::new(config)),
        }
    }

    pub fn controller(&self) -> RwSignal<WorkflowController> {
        self.controller
    }

    /// input[type=file] またはドロップで得たファイル
    pub fn choose_files(&self, files: &FileList) {
        let files: Vec<File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
        let candidates = files.iter().map(candidate_from).collect();

        if self.controller.with_untracked(|c| c.phase()) == Phase::Idle {
            let first = files.into_iter().next();
            SELECTED_PAYLOAD.with(|slot| *slot.borrow_mut() = first);
        }
        self.dispatch(Event::FilesChosen(candidates));
    }

    pub fn dispatch(&self, event: Event) {
        let effects = self
            .controller
            .try_update(|c| c.dispatch(event))
            .unwrap_or_default();

        if self.controller.with_untracked(|c| c.phase()) == Phase::Idle {
            SELECTED_PAYLOAD.with(|slot| slot.borrow_mut().take());
        }

        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::ReadPreview { generation } => self.read_preview(generation),
            Effect::StartProgress {
                generation,
                interval_ms,
            } => self.start_progress(generation, interval_ms),
            Effect::Submit { generation, file } => self.submit(generation, file.name),
            Effect::ScheduleDismiss { id, after_ms } => {
                let driver = *self;
                spawn_local(async move {
                    TimeoutFuture::new(after_ms).await;
                    driver.dispatch(Event::DismissNotification(id));
                });
            }
        }
    }

    fn read_preview(&self, generation: u64) {
        let Some(file) = SELECTED_PAYLOAD.with(|slot| slot.borrow().clone()) else {
            return;
        };
        let reader = match FileReader::new() {
            Ok(reader) => reader,
            Err(e) => {
                log::warn!("FileReader unavailable: {:?}", e);
                return;
            }
        };

        let driver = *self;
        let reader_clone = reader.clone();
        let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
            if let Ok(result) = reader_clone.result() {
                if let Some(url) = result.as_string() {
                    driver.dispatch(Event::PreviewReady { generation, url });
                }
            }
        }) as Box<dyn FnMut(_)>);

        reader.set_onload(Some(closure.as_ref().unchecked_ref()));
        closure.forget();

        if let Err(e) = reader.read_as_data_url(&file) {
            log::warn!("preview read failed: {:?}", e);
        }
    }

    /// 100%まで一定間隔でティックを送る（途中キャンセルなし）
    fn start_progress(&self, generation: u64, interval_ms: u32) {
        let driver = *self;
        spawn_local(async move {
            loop {
                TimeoutFuture::new(interval_ms).await;
                let running = driver.controller.with_untracked(|c| {
                    let session = c.session();
                    session.generation == generation
                        && session.phase == Phase::Processing
                        && !session.progress.is_complete()
                });
                if !running {
                    break;
                }
                driver.dispatch(Event::ProgressTick { generation });
            }
        });
    }

    fn submit(&self, generation: u64, file_name: String) {
        let driver = *self;
        let config = self.controller.with_untracked(|c| c.config().clone());
        let payload = SELECTED_PAYLOAD.with(|slot| slot.borrow().clone());

        spawn_local(async move {
            let outcome = match payload {
                Some(file) => submit_image(&config, &file, &file_name).await,
                None => Err(Error::Network("selected file is no longer available".into())),
            };
            driver.dispatch(Event::ProcessingFinished { generation, outcome });
        });
    }
}

fn candidate_from(file: &File) -> FileCandidate {
    FileCandidate::new(file.name(), file.size() as u64, file.type_())
}
