//! Command implementations for the verse CLI.

mod lookup;

pub use lookup::{LookupContext, execute as execute_lookups};
