//! 結果表示コンポーネント

use fortune_common::{t, Session};
use leptos::prelude::*;

use crate::components::detail_modal::DetailModal;
use crate::components::fortune_card::FortuneCard;

#[component]
pub fn ResultsDisplay(session: ReadSignal<Session>, set_session: WriteSignal<Session>) -> impl IntoView {
    let locale = Signal::derive(move || session.with(|s| s.locale()));
    let user_name = move || {
        session.with(|s| s.input().map(|input| input.name.clone()).unwrap_or_default())
    };
    let cards = move || {
        session.with(|s| {
            s.browser()
                .cards()
                .map(|(key, result)| (key, result.summary.clone()))
                .collect::<Vec<_>>()
        })
    };
    let on_open = move |key| {
        set_session.update(|s| {
            s.browser_mut().open(key);
        })
    };

    view! {
        <section class="results">
            <h2>{move || t(locale.get(), "resultsTitle", &[("name", &user_name())])}</h2>
            <Show
                when=move || session.with(|s| !s.browser().is_empty())
                fallback=move || view! {
                    <div class="results-empty">
                        <h3>{move || t(locale.get(), "resultsEmptyTitle", &[])}</h3>
                        <p class="text-muted">{move || t(locale.get(), "resultsEmptyDescription", &[])}</p>
                    </div>
                }
            >
                <p class="text-muted">{move || t(locale.get(), "resultsDescription", &[])}</p>
                <div class="card-grid">
                    <For
                        each=cards
                        key=|(key, _)| *key
                        children=move |(key, summary)| {
                            view! {
                                <FortuneCard
                                    category=key
                                    summary=summary
                                    locale=locale
                                    viewed=Signal::derive(move || session.with(|s| s.browser().is_viewed(key)))
                                    on_open=on_open
                                />
                            }
                        }
                    />
                </div>
            </Show>
            <DetailModal session=session set_session=set_session />
        </section>
    }
}
