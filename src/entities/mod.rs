//! Entity type definitions
//!
//! - [`Project`] - the unit of estimation: type, language, size category,
//!   adjustment factor and the 15 COCOMO cost driver ratings
//! - [`Function`] - an elementary function counted by function point analysis
//! - [`CostDrivers`] - the cost driver rating set with its fixed multipliers

pub mod drivers;
pub mod function;
pub mod project;

pub use drivers::CostDrivers;
pub use function::{Function, FunctionError, MAX_DATA_ITEMS};
pub use project::Project;
