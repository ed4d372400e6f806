pub mod detection_list;
pub mod handlers;
pub mod header;
pub mod navbar;
pub mod pages;
pub mod panels;
pub mod upload_section;
pub mod utils;
