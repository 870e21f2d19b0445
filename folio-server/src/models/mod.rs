//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod lang;
pub mod content_id;
pub mod comment;

pub use validation::{require, ValidationError};
pub use lang::{ContentType, Lang};
pub use content_id::{ContentId, RawId};
pub use comment::{CommentText, UserName};
