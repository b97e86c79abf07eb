//! 入力フォームコンポーネント
//!
//! 氏名・生年月日は必須。出生時刻（時/分/午前午後）と顔写真は任意。

use fortune_common::birth_time::{sanitize_input, validate_hour, validate_minute};
use fortune_common::{combine_birth_time, t, FacePhoto, Locale, Meridiem, UserInput};
use leptos::prelude::*;

use crate::components::upload_area::UploadArea;

#[component]
pub fn InputForm<F>(#[prop(into)] locale: Signal<Locale>, on_submit: F) -> impl IntoView
where
    F: Fn(UserInput) + 'static + Clone + Send + Sync,
{
    let (name, set_name) = signal(String::new());
    let (dob, set_dob) = signal(String::new());
    let (hour, set_hour) = signal(String::new());
    let (minute, set_minute) = signal(String::new());
    let (meridiem, set_meridiem) = signal(Meridiem::Am);
    let (photo, set_photo) = signal(None::<FacePhoto>);
    let (photo_loading, set_photo_loading) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let can_submit = move || {
        UserInput::is_submittable(&name.get(), &dob.get()) && !photo_loading.get() && !submitting.get()
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }
        set_submitting.set(true);
        on_submit(UserInput {
            name: name.get_untracked().trim().to_string(),
            dob: dob.get_untracked(),
            tob: combine_birth_time(&hour.get_untracked(), &minute.get_untracked(), meridiem.get_untracked()),
            face_photo: photo.get_untracked(),
        });
    };

    view! {
        <form class="input-form" on:submit=on_form_submit>
            <h2>{move || t(locale.get(), "inputTitle", &[])}</h2>
            <p class="text-muted description">{move || t(locale.get(), "inputDescription", &[])}</p>

            <label class="field">
                <span>{move || t(locale.get(), "nameLabel", &[])}</span>
                <input
                    type="text"
                    placeholder=move || t(locale.get(), "namePlaceholder", &[])
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>

            <label class="field">
                <span>{move || t(locale.get(), "dobLabel", &[])}</span>
                <input
                    type="date"
                    prop:value=move || dob.get()
                    on:input=move |ev| set_dob.set(event_target_value(&ev))
                />
            </label>

            <div class="field">
                <span>{move || t(locale.get(), "tobLabel", &[])}</span>
                <div class="time-inputs">
                    <input
                        type="text"
                        inputmode="numeric"
                        placeholder="HH"
                        prop:value=move || hour.get()
                        on:input=move |ev| {
                            let next = sanitize_input(&hour.get_untracked(), &event_target_value(&ev));
                            set_hour.set(next);
                        }
                        on:blur=move |_| set_hour.set(validate_hour(&hour.get_untracked()))
                    />
                    ":"
                    <input
                        type="text"
                        inputmode="numeric"
                        placeholder="MM"
                        prop:value=move || minute.get()
                        on:input=move |ev| {
                            let next = sanitize_input(&minute.get_untracked(), &event_target_value(&ev));
                            set_minute.set(next);
                        }
                        on:blur=move |_| set_minute.set(validate_minute(&minute.get_untracked()))
                    />
                    <select on:change=move |ev| {
                        if let Ok(m) = event_target_value(&ev).parse::<Meridiem>() {
                            set_meridiem.set(m);
                        }
                    }>
                        <option value="am" selected=move || meridiem.get() == Meridiem::Am>"AM"</option>
                        <option value="pm" selected=move || meridiem.get() == Meridiem::Pm>"PM"</option>
                    </select>
                </div>
            </div>

            <div class="field">
                <span>{move || t(locale.get(), "photoLabel", &[])}</span>
                <UploadArea
                    locale=locale
                    disabled=Signal::derive(move || submitting.get())
                    on_photo_changed=move |p| set_photo.set(p)
                    on_loading_changed=move |loading| set_photo_loading.set(loading)
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || !can_submit()>
                {move || {
                    let key = if submitting.get() { "analyzing" } else { "startAnalysis" };
                    t(locale.get(), key, &[])
                }}
            </button>
        </form>
    }
}
