//! Repositories for case, verdict, vote, bookmark and comment operations

pub mod bookmark;
pub mod case;
pub mod comment;
pub mod verdict;
pub mod vote;

pub use bookmark::BookmarkRepository;
pub use case::CaseRepository;
pub use comment::CommentRepository;
pub use verdict::VerdictRepository;
pub use vote::VoteRepository;
