//! 処理前/処理後のプレビュー

use bg_remove_common::ResultView;
use leptos::prelude::*;

#[component]
pub fn PreviewPanel<F>(
    #[prop(into)] original_url: Signal<Option<String>>,
    #[prop(into)] result: Signal<Option<ResultView>>,
    on_process_another: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let original = move || match original_url.get() {
        Some(url) => view! { <img src=url alt="Original" /> }.into_any(),
        None => view! {
            <div class="image-placeholder"><i class="fas fa-image"></i></div>
        }
        .into_any(),
    };

    let processed = move || match result.get() {
        Some(ResultView { image_url: Some(url), demo_badge: true, opacity, .. }) => view! {
            <div class="demo-result">
                <img src=url alt="Original" style=format!("opacity: {}", opacity) />
                <div class="demo-badge">
                    <i class="fas fa-check-circle"></i>
                    <p>"Background removed (demo mode)"</p>
                </div>
            </div>
        }
        .into_any(),
        Some(ResultView { image_url: Some(url), .. }) => view! {
            <img src=url alt="Background Removed" />
        }
        .into_any(),
        _ => view! {
            <div class="image-placeholder"><i class="fas fa-magic"></i></div>
        }
        .into_any(),
    };

    let download_href = move || result.with(|r| r.as_ref().and_then(|v| v.download_href.clone()));
    let download_name = move || result.with(|r| r.as_ref().map(|v| v.download_name.clone()));

    view! {
        <div class="preview-section">
            <div class="preview-grid">
                <div class="preview-card">
                    <h3>"Original"</h3>
                    <div class="preview-image">{original}</div>
                </div>
                <div class="preview-card">
                    <h3>"Background Removed"</h3>
                    <div class="preview-image checkerboard">{processed}</div>
                </div>
            </div>
            <div class="preview-actions">
                <a class="btn btn-primary" href=download_href download=download_name>
                    <i class="fas fa-download"></i>
                    " Download"
                </a>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_process_another(())
                >
                    "Process Another"
                </button>
            </div>
        </div>
    }
}
