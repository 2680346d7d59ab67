pub mod components;
pub mod config;
pub mod member_count;
