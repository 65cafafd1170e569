//! # postboard-core - Core Domain Types
//!
//! Foundation crate for Postboard. Provides the records exchanged with the
//! remote data service, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`User`] - A person who can author posts
//! - [`Post`] - A post owned by a user (`user_id` foreign key)
//! - [`Comment`] - A comment attached to a post (`post_id` foreign key)
//! - [`NewComment`] - Payload for creating a comment (the service assigns `id`)
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with a `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use postboard_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Postboard crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{AppPhase, Comment, NewComment, Post, User};
