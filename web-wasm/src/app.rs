//! メインアプリケーションコンポーネント
//!
//! 画面状態はすべて `Session` に集約し、ページごとにコンポーネントを切り替える。

use fortune_common::{run_batch, AnalysisClient, Locale, Page, Session, UserInput, RESULTS_TRANSITION_DELAY};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::gemini::FetchTransport;
use crate::components::{
    generation_progress::GenerationProgress, header::Header, input_form::InputForm,
    results_display::ResultsDisplay,
};

#[component]
pub fn App() -> impl IntoView {
    let (session, set_session) = signal(Session::default());

    let locale = Signal::derive(move || session.with(|s| s.locale()));
    let page = Memo::new(move |_| session.with(|s| s.page()));

    let on_locale_change = move |next: Locale| {
        set_session.update(|s| {
            s.set_locale(next);
        });
    };

    let on_reset = move || set_session.update(|s| s.reset());

    // 解析開始ハンドラ
    let on_submit = move |input: UserInput| {
        let mut started = None;
        set_session.update(|s| started = s.start(input.clone()));
        let Some(run_id) = started else {
            return;
        };
        let locale = session.with_untracked(|s| s.locale());

        spawn_local(async move {
            let client = AnalysisClient::new(FetchTransport::from_build_env());
            run_batch(
                &client,
                &input,
                locale,
                |key| {
                    set_session.update(|s| {
                        if let Err(e) = s.on_start(run_id, key) {
                            gloo::console::warn!(e.to_string());
                        }
                    })
                },
                |key, outcome| {
                    if let Err(e) = &outcome {
                        gloo::console::error!(e.to_string());
                    }
                    set_session.update(|s| {
                        if let Err(e) = s.on_complete(run_id, key, outcome) {
                            gloo::console::warn!(e.to_string());
                        }
                    })
                },
            )
            .await;

            TimeoutFuture::new(RESULTS_TRANSITION_DELAY.as_millis() as u32).await;
            set_session.update(|s| {
                s.show_results(run_id);
            });
        });
    };

    view! {
        <div class="container">
            <Header
                locale=locale
                can_change_locale=Signal::derive(move || session.with(|s| s.can_change_locale()))
                show_reset=Signal::derive(move || page.get() == Page::Results)
                on_locale_change=on_locale_change
                on_reset=on_reset
            />

            {move || match page.get() {
                Page::Input => view! { <InputForm locale=locale on_submit=on_submit /> }.into_any(),
                Page::Generating => view! { <GenerationProgress session=session /> }.into_any(),
                Page::Results => view! { <ResultsDisplay session=session set_session=set_session /> }.into_any(),
            }}
        </div>
    }
}
