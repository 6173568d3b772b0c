//! Wipe Use Case
//!
//! Empties a remote webroot:
//! - Guard rails on the configured root
//! - The root must currently be a directory
//! - Contents are deleted bottom-up; the root itself stays

mod options;
mod result;
mod use_case;

pub use options::WipeOptions;
pub use result::WipeResult;
pub use use_case::WipeUseCase;
