//! chalk-result - The value model for computed formula results.

pub mod error;
pub mod result;

pub use error::{Result, WireError};
pub use result::{
    Property, ResultKind, ResultValue, decode_execution_result, decode_execution_result_reader,
    decode_object, decode_object_reader, format_number,
};
