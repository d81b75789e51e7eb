pub mod rules;

pub use rules::{Feedback, Polarity, TitleAnalysis, score_title};
