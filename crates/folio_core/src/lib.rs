//! Decision core of the portfolio terminal: history, command registry,
//! interpreter, assistant lookup, and autocomplete. No I/O lives here.

pub mod assistant;
pub mod complete;
pub mod history;
pub mod interpreter;
pub mod model;
pub mod registry;
