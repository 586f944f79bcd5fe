//! Function entity - one elementary function counted by function point analysis

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::identity::{EntityId, EntityPrefix};
use crate::reference::FunctionType;

/// Elementary data item counts at or above this bound are invalid input
pub const MAX_DATA_ITEMS: u32 = 100;

/// A declared function of a project
///
/// Owned by exactly one [`crate::entities::Project`]; deleting the project
/// drops its functions with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    /// Unique identifier (FUNC-...)
    pub id: EntityId,

    /// Function name
    pub name: String,

    /// Function category
    #[serde(default)]
    pub function_type: FunctionType,

    /// Number of sub-functions (record types / logical groups)
    #[serde(default)]
    pub sub_functions: u32,

    /// Number of elementary data items (must stay below 100)
    #[serde(default)]
    pub data_items: u32,
}

impl Function {
    /// Create a new function
    pub fn new(
        name: impl Into<String>,
        function_type: FunctionType,
        sub_functions: u32,
        data_items: u32,
    ) -> Self {
        Self {
            id: EntityId::new(EntityPrefix::Func),
            name: name.into(),
            function_type,
            sub_functions,
            data_items,
        }
    }

    /// Check the input constraints the banding table assumes
    pub fn validate(&self) -> Result<(), FunctionError> {
        if self.data_items >= MAX_DATA_ITEMS {
            return Err(FunctionError::TooManyDataItems {
                name: self.name.clone(),
                data_items: self.data_items,
            });
        }
        Ok(())
    }
}

/// Function input constraint violations
#[derive(Debug, Error, Diagnostic)]
pub enum FunctionError {
    #[error("function '{name}' declares {data_items} elementary data items (limit is 99)")]
    #[diagnostic(code(softcost::entities::too_many_data_items))]
    TooManyDataItems { name: String, data_items: u32 },
}
