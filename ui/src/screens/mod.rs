// This file makes the screen modules available to the rest of the application.

pub mod dashboard;
pub mod token_detail;
pub mod trending_tokens;
pub mod twitter_trends;
pub mod wallet_activity;
pub mod wallet_tracker;
