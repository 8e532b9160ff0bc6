mod analyzer;
mod descriptor;
mod direction;

pub use analyzer::ConnectionAnalyzer;
pub use descriptor::ConnectionDescriptor;
pub use direction::Direction;
