pub mod file_info;
pub mod header;
pub mod notifications;
pub mod preview_panel;
pub mod progress_bar;
pub mod upload_area;
