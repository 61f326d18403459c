//! Form rendering module
//!
//! - `field_renderer`: text, number and multi-select field widgets
//! - `user_form`: the user information form shared by both pages

mod field_renderer;
mod user_form;

pub use user_form::draw;
