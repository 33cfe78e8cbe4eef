//! Declaration detectors
//!
//! - `common`: the generic tree walk, node-kind dispatch table, text helpers
//! - `typescript`: handlers for classes, interfaces, enums and functions
//!
//! Adding a declaration kind means adding a handler and registering its node
//! kind in `typescript::DECLARATION_HANDLERS`; the walk does not change.

pub mod common;
pub mod typescript;
