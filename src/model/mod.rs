pub mod case;
pub mod comment;
pub mod config;
pub mod extraction;
pub mod verdict;
pub mod vote;

pub use case::{Case, CaseInput, CaseStatus};
pub use comment::Comment;
pub use config::{Config, PushConfig};
pub use extraction::{ExtractedVerdict, ExtractedVerdictChoice};
pub use verdict::{NewVerdict, Verdict, VerdictChoice};
pub use vote::VoteStats;
