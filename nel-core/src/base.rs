//! Values exchanged with the simulation engine.
mod item;
mod state;
mod transition;
pub use item::Item;
pub use state::AgentState;
pub use transition::AgentTransition;
