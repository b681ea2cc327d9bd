pub mod bookmark;
pub mod case;
pub mod comment;
pub mod error;
pub mod health;
pub mod identity;
pub mod openapi;
pub mod verdict;
pub mod vote;
