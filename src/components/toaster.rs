//! Toaster
//!
//! Renders the single active toast from the store.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::toast::ToastKind;

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.toast().read().current().cloned().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast success",
                ToastKind::Error => "toast error",
            };
            let icon = toast.display_icon();
            let message = toast.message;
            view! {
                <div class=class role="status">
                    <span class="toast-icon">{icon}</span>
                    <span class="toast-message">{message}</span>
                </div>
            }
        })}
    }
}
