//! Flattening of nested values into `application/x-www-form-urlencoded` bodies.
//!
//! Nested structure is preserved in the field names:
//!
//! ```text
//! {"address": {"city": "Bedford"}, "items": [{"sku": "a1"}]}
//!   -> address.city=Bedford&items[0].sku=a1
//! ```
//!
//! A top-level mapping or null contributes no namespace. Any other top-level
//! value (a sequence or a lone scalar) is placed under the `model` namespace, so
//! `["x", "y"]` becomes `model[0]=x&model[1]=y`. The receiving endpoint
//! relies on this asymmetry.
//!
//! Keys are not escaped against the path syntax: a key containing `.` or
//! `[` cannot be told apart from a separator on the receiving end.

mod encoder;
mod error;
mod value;

pub use encoder::{encode, encode_into, to_body, FormPair, FormPath, MODEL_NAMESPACE};
pub use error::EncodingError;
pub use value::FormValue;
