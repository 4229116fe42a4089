//! This file serves as the root for all SeaORM entity modules.
//! The calculator persists a single kind of record: a named rate scenario
//! together with the inputs it was computed from.

pub mod scenario;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::scenario::Entity as Scenario;
}
