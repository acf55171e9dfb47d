pub mod course;
pub mod document;
pub mod submission;

pub use course::{Course, CourseWork, DueDate, DueTime};
pub use document::{Document, DocumentHandle};
pub use submission::{AssignmentSubmission, Attachment, DriveFile, StudentSubmission};
