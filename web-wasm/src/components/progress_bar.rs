//! プログレスバーコンポーネント

use leptos::prelude::*;

#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<f32>) -> impl IntoView {
    view! {
        <div class="processing-section">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress.get() * 100.0)
                />
            </div>
            <p class="progress-text">
                {move || format!("Removing background... {:.0}%", progress.get() * 100.0)}
            </p>
        </div>
    }
}
