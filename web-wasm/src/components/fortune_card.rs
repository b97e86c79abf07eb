//! 結果カードコンポーネント
//!
//! 一度開いたカードは裏返った状態（要約表示）のまま残る

use fortune_common::i18n::category_icon;
use fortune_common::{category_name, t, CategoryKey, Locale};
use leptos::prelude::*;

#[component]
pub fn FortuneCard<F>(
    category: CategoryKey,
    summary: String,
    #[prop(into)] locale: Signal<Locale>,
    #[prop(into)] viewed: Signal<bool>,
    on_open: F,
) -> impl IntoView
where
    F: Fn(CategoryKey) + 'static + Clone + Send + Sync,
{
    view! {
        <div
            class="fortune-card"
            class:flipped=move || viewed.get()
            on:click=move |_| on_open(category)
        >
            <div class="card-front">
                <div class="card-icon">{category_icon(category)}</div>
                <h3>{move || category_name(locale.get(), category)}</h3>
            </div>
            <div class="card-back">
                <h3>{move || category_name(locale.get(), category)}</h3>
                <p class="summary">{summary}</p>
                <span class="link">{move || t(locale.get(), "viewDetails", &[])}</span>
            </div>
        </div>
    }
}
