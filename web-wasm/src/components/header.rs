//! ヘッダーコンポーネント
//!
//! 言語切替は入力ページでのみ有効

use fortune_common::{t, Locale};
use leptos::prelude::*;

#[component]
pub fn Header<FL, FR>(
    #[prop(into)] locale: Signal<Locale>,
    #[prop(into)] can_change_locale: Signal<bool>,
    #[prop(into)] show_reset: Signal<bool>,
    on_locale_change: FL,
    on_reset: FR,
) -> impl IntoView
where
    FL: Fn(Locale) + 'static + Clone + Send + Sync,
    FR: Fn() + 'static + Clone + Send + Sync,
{
    let on_change = move |ev: web_sys::Event| {
        if let Ok(next) = event_target_value(&ev).parse::<Locale>() {
            on_locale_change(next);
        }
    };

    view! {
        <header class="header">
            <h1>{move || t(locale.get(), "appTitle", &[])}</h1>
            <div class="header-actions">
                <select
                    class="locale-select"
                    disabled=move || !can_change_locale.get()
                    on:change=on_change
                >
                    {Locale::ALL
                        .into_iter()
                        .map(|l| {
                            view! {
                                <option value=l.as_str() selected=move || locale.get() == l>
                                    {l.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <Show when=move || show_reset.get()>
                    {
                        let on_reset = on_reset.clone();
                        view! {
                            <button class="btn btn-secondary" on:click=move |_| on_reset()>
                                {move || t(locale.get(), "startNewAnalysis", &[])}
                            </button>
                        }
                    }
                </Show>
            </div>
        </header>
    }
}
