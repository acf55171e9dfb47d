pub mod batch;
pub mod classifier;
pub mod due_filter;
pub mod indexer;
pub mod selection;
pub mod work_item;

pub use batch::SubmissionIndex;
pub use due_filter::DueStatus;
pub use indexer::{Listing, ListingEntry};
pub use work_item::{CourseGroups, WorkItem};
