//! Response handling module.
//!
//! [`ResponseBody`] holds the decoded output of a successful call, either
//! parsed JSON or raw text depending on the response content type.
//! [`decode_collection`] normalizes endpoints that return the same list in
//! more than one shape.

mod body;
mod collection;

pub use body::ResponseBody;
pub use collection::{decode_collection, decode_value};
