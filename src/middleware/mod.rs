pub mod student_body;
pub mod student_id;

pub use student_body::StudentPayload;
pub use student_id::StudentId;
