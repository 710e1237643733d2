//! URL cleanup engine
//!
//! Rewrites URLs according to one of three named operations:
//!
//! - `canonical` - strip volatile parts (query, fragment) to produce a
//!   stable identifier
//! - `redirection` - rewrite the host to the canonical production host and
//!   fold the whole URL to lower case
//! - `all` - canonical first, then redirection
//!
//! The engine is a pure function of its inputs: no I/O, no shared state,
//! safe to call from any number of concurrent tasks.

pub mod engine;
pub mod error;
pub mod operation;
pub mod parsed;

pub use engine::{canonical_clean_up, clean_url, redirection_clean_up};
pub use error::{CleanerError, CleanerResult};
pub use operation::Operation;
pub use parsed::ParsedUrl;
