pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod requests;
