pub mod exam;
pub mod invoice;
pub mod teacher;
pub mod user;

pub use exam::{ApprovalError, Exam, ExamStatus, Question, QuestionKind, QuestionStatus};
pub use invoice::{format_cents, Invoice, InvoiceStatus, LineItem};
pub use teacher::{Teacher, TeacherStatus};
pub use user::{Role, SystemUser};
