//! 顔写真アップロードコンポーネント
//!
//! 選択したファイルを data URL として読み込む。読み込み失敗は写真なしと同じ扱い。
//! 読み込み中は親に通知し、送信を止めてもらう。

use fortune_common::{t, FacePhoto, Locale, PhotoSource};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

/// 読み込み中の写真の世代管理
///
/// 新しいファイルを選ぶたびに世代が進み、古い読み込み結果は捨てる
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoReads {
    generation: u64,
}

impl PhotoReads {
    /// 新しい読み込みを開始し、その世代を返す
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// 進行中の読み込みをすべて無効にする
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

#[component]
pub fn UploadArea<F, L>(
    #[prop(into)] locale: Signal<Locale>,
    #[prop(into)] disabled: Signal<bool>,
    on_photo_changed: F,
    on_loading_changed: L,
) -> impl IntoView
where
    F: Fn(Option<FacePhoto>) + 'static + Clone + Send + Sync,
    L: Fn(bool) + 'static + Clone + Send + Sync,
{
    let (file_name, set_file_name) = signal(None::<String>);
    let (reads, set_reads) = signal(PhotoReads::default());

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        // 前の写真は新しい読み込みが終わるまで使わない
        on_photo_changed(None);

        match input.files().and_then(|files| files.get(0)) {
            Some(file) => {
                let mut generation = 0;
                set_reads.update(|r| generation = r.begin());
                set_file_name.set(Some(file.name()));
                on_loading_changed(true);

                let on_photo_changed = on_photo_changed.clone();
                let on_loading_changed = on_loading_changed.clone();
                read_file(file, move |photo| {
                    if !reads.with_untracked(|r| r.is_current(generation)) {
                        return;
                    }
                    on_loading_changed(false);
                    on_photo_changed(photo);
                });
            }
            None => {
                set_reads.update(|r| r.cancel());
                set_file_name.set(None);
                on_loading_changed(false);
            }
        }
    };

    view! {
        <label class=move || if disabled.get() { "upload-area disabled" } else { "upload-area" }>
            <div class="upload-icon">"📷"</div>
            <p>
                {move || file_name.get().unwrap_or_else(|| t(locale.get(), "photoPlaceholder", &[]))}
            </p>
            <input
                type="file"
                accept="image/*"
                class="hidden"
                disabled=move || disabled.get()
                on:change=on_change
            />
        </label>
    }
}

/// data URL として読み込み、完了時（失敗時は `None`）に `on_done` を呼ぶ
fn read_file<F>(file: File, on_done: F)
where
    F: Fn(Option<FacePhoto>) + Clone + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::warn!("FileReader unavailable", e);
            on_done(None);
            return;
        }
    };

    let file_name = file.name();
    let mime_type = file.type_();
    let reader_clone = reader.clone();
    let on_load = on_done.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        let photo = reader_clone
            .result()
            .ok()
            .and_then(|result| result.as_string())
            .map(|data_url| FacePhoto {
                file_name: file_name.clone(),
                mime_type: mime_type.clone(),
                source: PhotoSource::DataUrl(data_url),
            });
        if photo.is_none() {
            gloo::console::warn!("failed to read photo; continuing without it");
        }
        on_load(photo);
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if reader.read_as_data_url(&file).is_err() {
        gloo::console::warn!("failed to start reading photo");
        on_done(None);
    }
}
