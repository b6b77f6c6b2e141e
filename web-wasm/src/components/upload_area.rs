//! アップロードエリアコンポーネント
//!
//! クリックでファイル選択、またはドラッグ&ドロップ。1回に1ファイル。

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{DragEvent, FileList};

const ACCEPT: &str = "image/png,image/jpeg,image/webp";

#[component]
pub fn UploadArea<F>(on_files: F) -> impl IntoView
where
    F: Fn(FileList) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<Input> = NodeRef::new();

    let open_dialog = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = {
        let on_files = on_files.clone();
        move |_: web_sys::Event| {
            let Some(input) = input_ref.get() else {
                return;
            };
            if let Some(files) = input.files() {
                on_files(files);
            }
            // 同じファイルを選び直せるようにする
            input.set_value("");
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_files(files);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    view! {
        <div
            class=move || if is_dragover.get() { "upload-box dragover" } else { "upload-box" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=open_dialog
        >
            <div class="upload-icon"><i class="fas fa-cloud-upload-alt"></i></div>
            <p>"Drag & drop your image here or click to browse"</p>
            <p class="text-muted">"Supports: PNG, JPG, WEBP (max 10MB)"</p>
            <button class="btn btn-primary" type="button">"Upload Image"</button>
            <input
                type="file"
                accept=ACCEPT
                style="display: none"
                node_ref=input_ref
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
