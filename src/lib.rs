pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod grades;
pub mod ocr;
pub mod parser;
pub mod record;
pub mod scorer;
pub mod subjects;

pub use error::{AdmitError, AdmitResult};
pub use grades::Grade;
pub use parser::parse;
pub use record::{StructuredRecord, SubjectResults};
pub use scorer::ScoreReport;
