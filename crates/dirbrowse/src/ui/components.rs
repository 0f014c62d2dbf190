pub mod footer_bar;
pub mod status_bar;
