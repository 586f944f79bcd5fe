//! Static reference data for the estimation methods
//!
//! [`ReferenceData`] bundles the four lookup tables the engine needs: the
//! function point banding table, the COCOMO coefficients and the language and
//! project size profiles. Tables are validated once when the set is built and
//! immutable afterwards; callers construct a set explicitly and pass it into
//! the analysis functions rather than going through global state.

use miette::Diagnostic;
use rust_embed::Embed;
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

pub mod bands;
pub mod coefficients;
pub mod profiles;

pub use bands::{BandTable, Complexity, CountRange, FunctionPointBand, FunctionType};
pub use coefficients::{Coefficient, CoefficientName, CoefficientTable, ProjectType};
pub use profiles::{LanguageProfile, LanguageTable, ProjectSizeProfile, SizeTable};

/// Built-in seed tables shipped with the crate
#[derive(Embed)]
#[folder = "data/reference/"]
struct EmbeddedTables;

const BANDS_FILE: &str = "function_point_bands.yaml";
const COEFFICIENTS_FILE: &str = "coefficients.yaml";
const LANGUAGES_FILE: &str = "languages.yaml";
const SIZES_FILE: &str = "project_sizes.yaml";

/// Errors raised by reference table loading and lookups
#[derive(Debug, Error, Diagnostic)]
pub enum ReferenceError {
    #[error("unknown programming language '{0}'")]
    #[diagnostic(code(softcost::reference::unknown_language))]
    UnknownLanguage(String),

    #[error("unknown project size category '{0}'")]
    #[diagnostic(code(softcost::reference::unknown_size))]
    UnknownSizeCategory(String),

    #[error("no coefficient {name} defined for project type {project_type}")]
    #[diagnostic(code(softcost::reference::missing_coefficient))]
    MissingCoefficient {
        project_type: ProjectType,
        name: CoefficientName,
    },

    #[error(
        "no function point band matches {function_type} with {sub_functions} \
         sub-functions and {data_items} elementary data items"
    )]
    #[diagnostic(code(softcost::reference::no_matching_band))]
    NoMatchingBand {
        function_type: FunctionType,
        sub_functions: u32,
        data_items: u32,
    },

    #[error("overlapping {function_type} bands: ({first}) and ({second})")]
    #[diagnostic(
        code(softcost::reference::overlapping_bands),
        help("band ranges must be disjoint per function type so every lookup is unambiguous")
    )]
    OverlappingBands {
        function_type: FunctionType,
        first: String,
        second: String,
    },

    #[error("invalid profile '{name}': {reason}")]
    #[diagnostic(code(softcost::reference::invalid_profile))]
    InvalidProfile { name: String, reason: String },

    #[error("reference table '{0}' is missing")]
    #[diagnostic(code(softcost::reference::missing_table))]
    MissingTable(String),

    #[error("malformed reference table '{file}': {message}")]
    #[diagnostic(code(softcost::reference::malformed_table))]
    MalformedTable { file: String, message: String },
}

/// Immutable, validated reference dataset
#[derive(Debug, Clone)]
pub struct ReferenceData {
    bands: BandTable,
    coefficients: CoefficientTable,
    languages: LanguageTable,
    sizes: SizeTable,
}

impl ReferenceData {
    /// Assemble a dataset from raw table rows, running all load-time checks
    pub fn new(
        bands: Vec<FunctionPointBand>,
        coefficients: Vec<Coefficient>,
        languages: Vec<LanguageProfile>,
        sizes: Vec<ProjectSizeProfile>,
    ) -> Result<Self, ReferenceError> {
        Ok(Self {
            bands: BandTable::new(bands)?,
            coefficients: CoefficientTable::new(coefficients),
            languages: LanguageTable::new(languages),
            sizes: SizeTable::new(sizes)?,
        })
    }

    /// Load the built-in seed tables shipped with the crate
    pub fn builtin() -> Result<Self, ReferenceError> {
        Self::new(
            embedded_table(BANDS_FILE)?,
            embedded_table(COEFFICIENTS_FILE)?,
            embedded_table(LANGUAGES_FILE)?,
            embedded_table(SIZES_FILE)?,
        )
    }

    /// Load operator-supplied tables from a directory
    ///
    /// Expects the same four file names as the built-in set
    /// (`function_point_bands.yaml`, `coefficients.yaml`, `languages.yaml`,
    /// `project_sizes.yaml`). The same validation applies.
    pub fn from_dir(dir: &Path) -> Result<Self, ReferenceError> {
        Self::new(
            file_table(dir, BANDS_FILE)?,
            file_table(dir, COEFFICIENTS_FILE)?,
            file_table(dir, LANGUAGES_FILE)?,
            file_table(dir, SIZES_FILE)?,
        )
    }

    /// Find the band containing both counts for a function type
    pub fn lookup_band(
        &self,
        function_type: FunctionType,
        sub_functions: u32,
        data_items: u32,
    ) -> Result<&FunctionPointBand, ReferenceError> {
        self.bands.lookup(function_type, sub_functions, data_items)
    }

    /// Resolve a COCOMO coefficient for a project type
    pub fn lookup_coefficient(
        &self,
        project_type: ProjectType,
        name: CoefficientName,
    ) -> Result<f64, ReferenceError> {
        self.coefficients.lookup(project_type, name)
    }

    /// Lines of code per function point for the named language
    pub fn lookup_language(&self, name: &str) -> Result<u32, ReferenceError> {
        self.languages.lookup(name)
    }

    /// Workload days per function point for the named size category
    pub fn lookup_size(&self, name: &str) -> Result<u32, ReferenceError> {
        self.sizes.lookup(name)
    }
}

fn embedded_table<T: DeserializeOwned + 'static>(file: &str) -> Result<T, ReferenceError> {
    let asset =
        EmbeddedTables::get(file).ok_or_else(|| ReferenceError::MissingTable(file.to_string()))?;
    let content =
        std::str::from_utf8(asset.data.as_ref()).map_err(|e| ReferenceError::MalformedTable {
            file: file.to_string(),
            message: e.to_string(),
        })?;
    parse_table(file, content)
}

fn file_table<T: DeserializeOwned + 'static>(dir: &Path, file: &str) -> Result<T, ReferenceError> {
    let path = dir.join(file);
    let content = std::fs::read_to_string(&path)
        .map_err(|_| ReferenceError::MissingTable(path.display().to_string()))?;
    parse_table(file, &content)
}

fn parse_table<T: DeserializeOwned + 'static>(file: &str, content: &str) -> Result<T, ReferenceError> {
    serde_yml::from_str(content).map_err(|e| ReferenceError::MalformedTable {
        file: file.to_string(),
        message: e.to_string(),
    })
}
