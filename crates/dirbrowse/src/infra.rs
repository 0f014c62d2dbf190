pub mod config;
pub mod editor;
pub mod lister;
pub mod logging;
