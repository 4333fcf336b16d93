pub mod attempt;
pub mod catalog;
pub mod identity;
pub mod otp;
pub mod registration;
pub mod ticker;
