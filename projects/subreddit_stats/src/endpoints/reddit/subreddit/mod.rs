pub mod hot_titles;
pub mod pagination;
pub mod subscribers;
pub mod top_ten;
pub mod word_count;
