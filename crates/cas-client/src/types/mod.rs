//! CAS protocol types and data structures.
//!
//! Protocol versions, verification results, attribute sets and the
//! constants defined by the CAS protocol.

mod attributes;
mod constants;
mod result;
mod version;

pub use attributes::*;
pub use constants::*;
pub use result::*;
pub use version::*;
