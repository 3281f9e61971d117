//! Rule dispatch, the validation entry point and batch execution

pub mod batch;
pub mod validator;

pub use batch::{BatchReport, InputRecord, RecordReport, validate_batch};
pub use validator::{Validator, Violation, validate};
