//! 解析進捗コンポーネント

use fortune_common::i18n::category_icon;
use fortune_common::{category_name, status_short_key, t, CategoryKey, Session};
use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;

#[component]
pub fn GenerationProgress(session: ReadSignal<Session>) -> impl IntoView {
    let locale = move || session.with(|s| s.locale());

    view! {
        <section class="generation-progress">
            <h2>{move || t(locale(), "progressTitle", &[])}</h2>
            <p class="text-muted">{move || session.with(|s| s.progress().description())}</p>

            <ProgressBar fraction=Signal::derive(move || session.with(|s| s.progress().fraction())) />

            <ul class="category-status-list">
                {CategoryKey::ALL
                    .into_iter()
                    .map(|key| {
                        let status = move || {
                            session.with(|s| s.progress().status(key).map(|p| p.status).unwrap_or_default())
                        };
                        let message = move || {
                            session.with(|s| s.progress().status(key).map(|p| p.message.clone()).unwrap_or_default())
                        };
                        view! {
                            <li class=move || format!("category-status {}", status().as_str().to_lowercase())>
                                <span class="icon">{category_icon(key)}</span>
                                <span class="name">{move || category_name(locale(), key)}</span>
                                <span class="badge">{move || t(locale(), status_short_key(status()), &[])}</span>
                                <p class="message">{message}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
