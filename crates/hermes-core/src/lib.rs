//! Core types, traits, and orchestration for the Hermes question summarizer.

pub mod error;
pub mod input;
pub mod models;
pub mod parser;
pub mod service;
pub mod testutil;
pub mod traits;

pub use error::AppError;
pub use models::{ChatExchange, QuestionContent, SearchSummary, SummaryRecord};
pub use service::SummarizeService;
pub use traits::{Provider, Summarizer};
