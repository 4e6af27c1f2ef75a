use crate::notifications::{DisplayState, NotificationChannel, ToastConfig};
use dioxus::core::Task;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Shows the latest notification pushed onto `channel` until the user
/// closes it. Swapping the `channel` prop moves the listener over.
///
/// `config` only seeds the initial display state; later changes to it are
/// not applied to a mounted toast.
#[component]
pub fn Toast(channel: NotificationChannel, #[props(default)] config: ToastConfig) -> Element {
    let mut state = use_signal(|| DisplayState::new(&config));
    let mut listener = use_signal(|| None::<Task>);

    use_effect(use_reactive((&channel,), move |(channel,)| {
        let subscription = channel.subscribe();
        let task = spawn(async move {
            while let Some(raw) = subscription.next().await {
                let _ = state.write().receive(raw);
            }
            debug!("Notification channel closed, toast stops listening");
        });
        if let Some(previous) = listener.write().replace(task) {
            previous.cancel();
        }
    }));

    let current = state.read().clone();
    if !current.opened {
        return rsx! {};
    }
    let glyph = current.glyph();
    let class = format!("toast toast-{}", current.icon);
    let message = current.message;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class,
            if !glyph.is_empty() {
                svg {
                    class: "toast-icon",
                    view_box: "0 0 20 20",
                    fill: "currentColor",
                    path { fill_rule: "evenodd", clip_rule: "evenodd", d: glyph }
                }
            }
            p { class: "toast-message", "{message}" }
            button {
                class: "toast-close",
                onclick: move |_| state.write().dismiss(),
                "✕"
            }
        }
    }
}
