//! Domain Layer
//!
//! The environment synthesis model, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Compose document and its referenced files
//! - `value_objects/` - Fingerprint, VariableName, EnvironmentSet, warnings
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Parsing and naming are deterministic
//! 3. **Ports & Adapters** - All file reads go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
