//! Deploy Module
//!
//! Uploads a local build directory into the resolved remote webroot.
//!
//! ## Structure
//!
//! - `options` - Inputs (`DeployOptions`)
//! - `result` - Outcome (`DeployResult`)
//! - `use_case` - Orchestration (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use webroot_sync::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(&session, events);
//! let result = use_case.execute(&DeployOptions::new(local_dist))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployResult;
pub use use_case::DeployUseCase;
