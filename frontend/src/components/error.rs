use crate::api::ApiError;
use leptos::*;

/// Inline banner listing every message carried by the error, so multi-field
/// validation failures show all failing fields at once.
#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                {move || error.get().map(|err| {
                    let messages = err.messages();
                    if messages.len() > 1 {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {messages.into_iter().map(|message| {
                                    view! { <li>{message}</li> }
                                }).collect_view()}
                            </ul>
                        }.into_view()
                    } else {
                        view! {
                            <div class="font-bold">
                                {messages.into_iter().next().unwrap_or_default()}
                            </div>
                        }.into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

/// Transient success banner, cleared by the caller.
#[component]
pub fn InlineNotice(notice: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || notice.get().is_some() fallback=|| ()>
            <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded my-2 text-sm">
                {move || notice.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
