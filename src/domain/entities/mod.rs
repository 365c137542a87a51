//! Domain Entities

mod compose;

pub use compose::{ComposeDocument, ReferencedFile};
