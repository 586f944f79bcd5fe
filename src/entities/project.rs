//! Project entity - the unit of estimation
//!
//! A project owns the functions counted by function point analysis and the
//! attribute set the COCOMO model needs. All derived metrics are computed on
//! demand from the current field values; nothing is cached on the entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{EstimateError, ProjectEstimate};
use crate::core::entity::Entity;
use crate::core::identity::{EntityId, EntityPrefix};
use crate::entities::drivers::CostDrivers;
use crate::entities::function::Function;
use crate::reference::{ProjectType, ReferenceData};

/// Project entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (PROJ-...)
    pub id: EntityId,

    /// Project name
    pub name: String,

    /// Detailed description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// COCOMO project category
    #[serde(default)]
    pub project_type: ProjectType,

    /// Implementation language, resolved against the language table
    pub language: String,

    /// Size category, resolved against the project size table
    pub size_category: String,

    /// Function point adjustment factor
    #[serde(default = "default_adjustment_factor")]
    pub adjustment_factor: i64,

    /// The 15 COCOMO cost driver ratings
    #[serde(default)]
    pub drivers: CostDrivers,

    /// Functions owned by this project
    #[serde(default)]
    pub functions: Vec<Function>,

    /// Creation timestamp
    pub created: DateTime<Utc>,

    /// Last-saved timestamp, maintained by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// Author name
    pub author: String,
}

fn default_adjustment_factor() -> i64 {
    1
}

impl Entity for Project {
    const PREFIX: &'static str = "PROJ";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created(&self) -> DateTime<Utc> {
        self.created
    }

    fn author(&self) -> &str {
        &self.author
    }
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: EntityId::new(EntityPrefix::Proj),
            name: String::new(),
            description: None,
            project_type: ProjectType::default(),
            language: String::new(),
            size_category: String::new(),
            adjustment_factor: 1,
            drivers: CostDrivers::default(),
            functions: Vec::new(),
            created: Utc::now(),
            updated: None,
            author: String::new(),
        }
    }
}

impl Project {
    /// Create a new project
    pub fn new(
        name: impl Into<String>,
        project_type: ProjectType,
        language: impl Into<String>,
        size_category: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(EntityPrefix::Proj),
            name: name.into(),
            project_type,
            language: language.into(),
            size_category: size_category.into(),
            author: author.into(),
            created: Utc::now(),
            ..Default::default()
        }
    }

    /// Add a function to the project
    pub fn add_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    /// Number of declared functions
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Record that the project was just saved
    pub fn touch(&mut self) {
        self.updated = Some(Utc::now());
    }

    /// Compute the full set of derived metrics against a reference dataset
    ///
    /// Recomputed from scratch on every call; the entity stores no results.
    pub fn estimate(&self, reference: &ReferenceData) -> Result<ProjectEstimate, EstimateError> {
        ProjectEstimate::compute(self, reference)
    }
}
