mod natural;
mod node_map;
mod role_sorters;
mod sequencer;
mod walk;

pub use natural::natural_cmp;
pub use sequencer::MemberSequencer;
