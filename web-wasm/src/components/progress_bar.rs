//! プログレスバーコンポーネント

use leptos::prelude::*;

#[component]
pub fn ProgressBar(#[prop(into)] fraction: Signal<f32>) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", fraction.get() * 100.0)
                />
            </div>
            <p class="progress-text">
                {move || format!("{:.0}%", fraction.get() * 100.0)}
            </p>
        </div>
    }
}
