//! メインアプリケーションコンポーネント
//!
//! セクションの表示/非表示はフェーズから決まる（DOMは状態の射影）。

use bg_remove_common::{Event, Phase};
use leptos::prelude::*;

use crate::components::{
    file_info::FileInfo,
    header::Header,
    notifications::Notifications,
    preview_panel::PreviewPanel,
    progress_bar::ProgressBar,
    upload_area::UploadArea,
};
use crate::driver::Driver;
use crate::page_config::load_page_config;

fn display_when(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

#[component]
pub fn App() -> impl IntoView {
    let driver = Driver::new(load_page_config());
    let controller = driver.controller();

    let phase = Memo::new(move |_| controller.with(|c| c.phase()));
    let progress = Signal::derive(move || controller.with(|c| c.session().progress.fraction()));
    let file_info = Signal::derive(move || controller.with(|c| c.session().file_info()));
    let original_url =
        Signal::derive(move || controller.with(|c| c.session().original_preview_url.clone()));
    let result = Signal::derive(move || controller.with(|c| c.session().result_view()));
    let notifications =
        Signal::derive(move || controller.with(|c| c.notifications().items().to_vec()));

    let on_files = move |files: web_sys::FileList| driver.choose_files(&files);
    let on_remove = move |_| driver.dispatch(Event::RemoveFile);
    let on_process_another = move |_| driver.dispatch(Event::ProcessAnother);
    let on_close = move |id: u64| driver.dispatch(Event::DismissNotification(id));

    view! {
        <div class="container" data-phase=move || phase.get().as_str()>
            <Header />

            <section
                class="upload-section"
                style:display=move || display_when(phase.get() == Phase::Idle)
            >
                <UploadArea on_files=on_files />
            </section>

            <section
                style:display=move || display_when(matches!(phase.get(), Phase::FileSelected | Phase::Processing))
            >
                <FileInfo info=file_info on_remove=on_remove />
                <ProgressBar progress=progress />
            </section>

            <section style:display=move || display_when(phase.get() == Phase::Result)>
                <PreviewPanel
                    original_url=original_url
                    result=result
                    on_process_another=on_process_another
                />
            </section>

            <Notifications items=notifications on_close=on_close />
        </div>
    }
}
