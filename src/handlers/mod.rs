pub mod chat;
pub mod homepage;
pub mod news;
pub mod quiz;
pub mod review;
