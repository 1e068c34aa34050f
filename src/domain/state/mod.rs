//! Application state: keyed store, typed actions and their reducers.

pub mod actions;
pub mod reducers;
pub mod store;

pub use actions::*;
pub use reducers::*;
pub use store::*;

/// The store as wired by the application
pub type AppStore = StateStore<StateKey, Action, StateValue>;
