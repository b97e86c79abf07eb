//! 詳細モーダルコンポーネント
//!
//! - Escape で閉じる、左右キーで前後のカテゴリへ（循環）
//! - 共有ボタンは要約をクリップボードへコピー

use fortune_common::i18n::category_icon;
use fortune_common::{category_name, parse_details, t, Session};
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[component]
pub fn DetailModal(session: ReadSignal<Session>, set_session: WriteSignal<Session>) -> impl IntoView {
    let locale = move || session.with(|s| s.locale());
    let (share_status, set_share_status) = signal(None::<&'static str>);

    let close = move || set_session.update(|s| s.browser_mut().close());
    let next = move || {
        set_share_status.set(None);
        set_session.update(|s| s.browser_mut().next());
    };
    let prev = move || {
        set_share_status.set(None);
        set_session.update(|s| s.browser_mut().prev());
    };

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if session.with_untracked(|s| s.browser().current().is_none()) {
            return;
        }
        match ev.key().as_str() {
            "Escape" => close(),
            "ArrowRight" => next(),
            "ArrowLeft" => prev(),
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());

    let share = move |_| {
        let Some(text) = session.with_untracked(|s| s.browser().share_text(s.locale())) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let key = match copy_to_clipboard(&text).await {
                Ok(()) => "shareSuccess",
                Err(e) => {
                    gloo::console::warn!("clipboard write failed", e);
                    "shareError"
                }
            };
            set_share_status.set(Some(key));
        });
    };

    let current = move || {
        session.with(|s| s.browser().current().map(|(key, result)| (key, result.clone())))
    };

    view! {
        {move || {
            current()
                .map(|(key, result)| {
                    let sections = parse_details(&result.details)
                        .map(|section| {
                            let title = section.title.map(|title| view! { <h4>{title.to_string()}</h4> });
                            view! {
                                <div class="detail-section">
                                    {title}
                                    <p>{section.body.to_string()}</p>
                                </div>
                            }
                        })
                        .collect_view();

                    view! {
                        <div class="modal-backdrop" on:click=move |_| close()>
                            <div class="modal" on:click=|ev| ev.stop_propagation()>
                                <header class="modal-header">
                                    <span class="icon">{category_icon(key)}</span>
                                    <h2>{category_name(locale(), key)}</h2>
                                    <button class="btn-close" on:click=move |_| close()>
                                        {t(locale(), "close", &[])}
                                    </button>
                                </header>
                                <div class="modal-summary">
                                    <h3>{t(locale(), "summary", &[])}</h3>
                                    <p>{result.summary.clone()}</p>
                                </div>
                                <div class="modal-details">{sections}</div>
                                <footer class="modal-footer">
                                    <button class="btn" on:click=move |_| prev()>
                                        {t(locale(), "previous", &[])}
                                    </button>
                                    <button class="btn btn-secondary" on:click=share>
                                        {t(locale(), "share", &[])}
                                    </button>
                                    <button class="btn" on:click=move |_| next()>
                                        {t(locale(), "next", &[])}
                                    </button>
                                </footer>
                                {move || share_status.get().map(|key| view! {
                                    <p class="share-status">{t(locale(), key, &[])}</p>
                                })}
                            </div>
                        </div>
                    }
                })
        }}
    }
}

async fn copy_to_clipboard(text: &str) -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or_else(|| wasm_bindgen::JsValue::from_str("window is not available"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}
