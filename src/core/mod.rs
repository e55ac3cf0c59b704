// Core modules implementing the record model, roster state, and error modeling.
pub mod error;
pub mod record;
pub mod roster;
