pub mod data;
pub mod error;
pub mod math;
pub mod operations;
pub mod rules;

#[cfg(test)]
mod fixtures;

pub use error::{RelsortError, Result};
pub use operations::connection::{ConnectionAnalyzer, ConnectionDescriptor, Direction};
pub use operations::sort::MemberSequencer;
pub use rules::RelationRules;
