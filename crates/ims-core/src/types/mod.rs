//! Core type definitions used across the IMS workspace.

pub mod id;
pub mod notice;
pub mod order;
pub mod pagination;
pub mod search;

pub use id::*;
pub use notice::{Notice, NoticeLevel};
pub use order::PositionUpdate;
pub use pagination::{PageRequest, PageResponse};
pub use search::SearchQuery;
