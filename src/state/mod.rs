//! Application state module

mod app_state;
mod forms;
mod pages;

pub use app_state::*;
pub use forms::*;
pub use pages::*;
