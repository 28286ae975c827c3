//! Header parsing for the free-form header specification string.
//!
//! This module provides:
//! - Parsing a header spec into ordered entries ([`parse`], [`HeaderSpec`])
//! - The parsed entry type ([`HeaderEntry`])
//! - Conversion of entries into `http` header pairs ([`HeaderLineError`])

mod entry;
mod parser;


pub use entry::{HeaderEntry, HeaderLineError};
pub use parser::{HeaderSpec, parse};
