#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod prompt;
pub mod providers;
pub mod scoring;

pub use config::Config;
pub use error::{Result, SparkError};
pub use scoring::{Feedback, Polarity, TitleAnalysis, score_title};
