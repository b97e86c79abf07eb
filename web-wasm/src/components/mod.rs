pub mod detail_modal;
pub mod fortune_card;
pub mod generation_progress;
pub mod header;
pub mod input_form;
pub mod progress_bar;
pub mod results_display;
pub mod upload_area;
