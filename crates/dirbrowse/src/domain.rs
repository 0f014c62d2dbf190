//! Plain data types shared by the browser and its infrastructure.

pub mod entry;
