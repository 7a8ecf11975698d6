//! Core traits that define the launcher's seams.
//!
//! - `Application`: the lifecycle capability driven by the launcher

pub mod application;

pub use application::Application;
