//! Notice banner shown above the map.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

/// Show a notice. Info notices dismiss themselves after
/// [`crate::state::notice::NOTICE_TIMEOUT_MS`]; errors wait for the user.
pub fn post(notices: RwSignal<NoticeState>, kind: NoticeKind, message: String) {
    let Some(id) = notices.try_update(|n| n.show(kind, message)) else {
        return;
    };
    #[cfg(feature = "csr")]
    {
        if kind == NoticeKind::Info {
            leptos::task::spawn_local(async move {
                let timeout = u64::from(crate::state::notice::NOTICE_TIMEOUT_MS);
                gloo_timers::future::sleep(std::time::Duration::from_millis(timeout)).await;
                notices.update(|n| n.expire(id));
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    move || {
        notices.with(|n| n.current.clone()).map(|notice| {
            let class = match notice.kind {
                NoticeKind::Info => "notice notice--info",
                NoticeKind::Error => "notice notice--error",
            };
            view! {
                <div class=class role="alert">
                    <span class="notice__message">{notice.message}</span>
                    <button class="notice__dismiss" on:click=move |_| notices.update(NoticeState::dismiss)>
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}
