pub mod attempt;
pub mod auth;
pub mod certificate;
pub mod components;
pub mod homepage;
pub mod layout;
pub mod quizzes;
pub mod results;

// Re-export commonly used functions from layout
pub use layout::{not_found, page, render, titled};
