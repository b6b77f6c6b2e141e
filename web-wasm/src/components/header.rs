//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="tool-header">
            <h1>"Remove Image Background"</h1>
            <p class="text-muted">"100% automatic. Upload a PNG, JPG or WEBP image up to 10MB."</p>
        </header>
    }
}
