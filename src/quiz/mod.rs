pub mod config;
pub mod engine;
pub mod scoring;
pub mod session;
pub mod validation;

pub use config::{default_table, load_table, NodeTable, QuizNode, Transition, END_NODE};
pub use engine::{advance, Step};
pub use scoring::{score, AnswerSet, RiskAssessment, RiskLevel, ScoreContribution};
pub use session::QuizSession;
pub use validation::validate_table;
