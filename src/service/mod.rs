pub mod bookmark;
pub mod case;
pub mod comment;
pub mod llm;
pub mod nickname;
pub mod push;
pub mod verdict;
pub mod vote;

pub use bookmark::BookmarkService;
pub use case::CaseService;
pub use comment::CommentService;
pub use llm::LlmClient;
pub use push::PushService;
pub use verdict::VerdictService;
pub use vote::VoteService;
