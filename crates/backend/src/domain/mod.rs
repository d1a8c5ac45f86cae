pub mod a001_category;
pub mod a002_content_item;
