//! Rust code generation modules.

pub mod aliases;
pub mod declarations;
pub mod docs;
pub mod enums;
pub mod fields;
pub mod functions;
pub mod naming;
pub mod policy;
pub mod structs;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use aliases::AliasRegistry;
pub use declarations::DeclarationEmitter;
pub use docs::{DocResolver, ResolvedSymbol};
pub use fields::project_field;
pub use types::TypeProjector;
