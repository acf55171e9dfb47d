pub mod classroom_service;
pub mod docs_service;
pub mod gemini_service;
pub mod sources;

pub use classroom_service::ClassroomService;
pub use docs_service::DocsService;
pub use gemini_service::GeminiService;
pub use sources::{CourseWorkSource, DocumentResolver, SubmissionSource};
