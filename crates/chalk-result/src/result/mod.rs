//! Result value API.
//!
//! - [`ResultValue`], [`Property`], [`ResultKind`] - The computed value model
//! - [`format_number`] - Canonical display form of numbers
//! - [`decode_execution_result`], [`decode_object`] - Wire decoding (plus `_reader` variants)

mod number;
mod value;
pub mod wire;

pub use number::format_number;
pub use value::{Property, ResultKind, ResultValue};
pub use wire::{
    decode_execution_result, decode_execution_result_reader, decode_object, decode_object_reader,
};
