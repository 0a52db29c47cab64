//! Link term encoding and decoding.
//!
//! Both directions are pure functions: no I/O, no shared state. Encoding
//! concatenates `{type}{id}` segments in canonical order; decoding recovers
//! the segments using a caller-supplied vocabulary of type names, since the
//! term itself stores no delimiters.

pub mod decode;
pub mod encode;

pub use decode::{
    decode_report, decode_token, decode_token_with_registry, DecodeReport, RejectedId,
};
pub use encode::encode_token;
