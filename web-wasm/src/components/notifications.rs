//! 通知トースト

use bg_remove_common::Notification;
use leptos::prelude::*;

#[component]
pub fn Notifications<F>(
    #[prop(into)] items: Signal<Vec<Notification>>,
    on_close: F,
) -> impl IntoView
where
    F: Fn(u64) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="notification-stack">
            <For
                each=move || items.get()
                key=|n| n.id
                children=move |n| {
                    let on_close = on_close.clone();
                    let id = n.id;
                    view! {
                        <div class=format!("notification notification-{}", n.kind.as_str())>
                            <i class=format!("fas fa-{}", n.kind.icon())></i>
                            <span>{n.message}</span>
                            <button class="notification-close" on:click=move |_| on_close(id)>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
