use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use toaster_ui::{NotificationChannel, NotificationEvent, RawNotification, Toast, ToastConfig};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    launch(App)
}

#[component]
fn App() -> Element {
    let mut channel = use_signal(NotificationChannel::new);

    let emit = move |notification: RawNotification| {
        let reached = channel.read().push(notification);
        if reached == 0 {
            warn!("Notification pushed with no toast listening");
        }
    };

    rsx! {
        head {
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Title { "Toaster" }
        }
        main { class: "demo",
            h1 { "Toaster" }
            div { class: "demo-actions",
                button {
                    onclick: move |_| emit(NotificationEvent::success("Changes saved").into()),
                    "Success"
                }
                button {
                    onclick: move |_| emit(NotificationEvent::failure("Upload failed").into()),
                    "Error"
                }
                button {
                    onclick: move |_| emit(NotificationEvent::warning("Storage almost full").into()),
                    "Warning"
                }
                button {
                    onclick: move |_| {
                        emit(RawNotification {
                            icon: Some("error".to_string()),
                            message: None,
                        })
                    },
                    "Malformed"
                }
                button {
                    onclick: move |_| {
                        channel.read().close();
                        channel.set(NotificationChannel::new());
                        info!("Swapped in a fresh notification channel");
                    },
                    "New channel"
                }
            }
            Toast {
                channel: channel(),
                config: ToastConfig {
                    initially_opened: false,
                },
            }
        }
    }
}
