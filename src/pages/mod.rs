pub mod profile;
pub mod questions;
