//! # armid
//!
//! Hierarchical resource identifier parsing and formatting.
//!
//! ## Design Principles
//!
//! - Every identifier kind is a declarative [`Grammar`]; one engine parses
//!   and formats all of them
//! - Identifiers are plain value types, only ever fully populated
//! - Strict parsing is the only validating parse; insensitive parsing is a
//!   lossy normalization of literal casing
//! - Errors name the segment at fault
//!
//! ## ID Format
//!
//! Resource Manager identifiers alternate literal keys and captured values:
//!
//! ```text
//! /subscriptions/{SubscriptionId}/resourceGroups/{ResourceGroup}/providers/Microsoft.KeyVault/vaults/{Name}
//! ```
//!
//! Parsing and formatting round-trip:
//!
//! ```
//! use armid::VaultId;
//!
//! let input = "/subscriptions/SUB1/resourceGroups/RG1/providers/Microsoft.KeyVault/vaults/V1";
//! let id = VaultId::parse(input)?;
//! assert_eq!(id.name, "V1");
//! assert_eq!(id.id(), input);
//! # Ok::<(), armid::IdError>(())
//! ```

mod error;
mod format;
mod grammar;
mod macros;
mod nested;
mod parser;
mod registry;
mod resource;
mod types;
pub mod validate;

pub use error::{GrammarError, IdError, RegistryError};
pub use grammar::{Grammar, Segment};
pub use nested::ManagedHsmRoleDefinitionId;
pub use parser::{Captures, Matching};
pub use registry::{Identified, Registry};
pub use resource::ResourceId;
pub use types::*;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
