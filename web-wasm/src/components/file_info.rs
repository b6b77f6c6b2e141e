//! 選択ファイル情報

use bg_remove_common::FileInfoView;
use leptos::prelude::*;

#[component]
pub fn FileInfo<F>(
    #[prop(into)] info: Signal<Option<FileInfoView>>,
    on_remove: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let removable = move || info.with(|i| i.as_ref().is_some_and(|i| i.removable));

    view! {
        <div
            class="file-info"
            style:display=move || if info.with(Option::is_some) { "flex" } else { "none" }
        >
            <span class="file-name">
                {move || info.with(|i| i.as_ref().map(|i| i.name.clone()).unwrap_or_default())}
            </span>
            <span class="file-size">
                {move || info.with(|i| i.as_ref().map(|i| i.size_text.clone()).unwrap_or_default())}
            </span>
            <button
                class="remove-file"
                title="Remove file"
                style:display=move || if removable() { "inline-block" } else { "none" }
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove(());
                }
            >
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
