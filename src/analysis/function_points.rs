//! Function point analysis
//!
//! Converts declared functions into function points via the banding table,
//! then derives estimated code size and raw workload from the language and
//! project size profiles.

use crate::analysis::EstimateError;
use crate::entities::{Function, Project};
use crate::reference::ReferenceData;

/// Raw function points of one function, resolved through the banding table
///
/// Fails with a not-found error when the function's counts fall outside every
/// band defined for its type; the caller decides how to surface that.
pub fn raw_points(function: &Function, reference: &ReferenceData) -> Result<u32, EstimateError> {
    let band = reference.lookup_band(
        function.function_type,
        function.sub_functions,
        function.data_items,
    )?;
    Ok(band.points)
}

/// Net function points of one function: adjustment factor times raw points
pub fn net_points(
    project: &Project,
    function: &Function,
    reference: &ReferenceData,
) -> Result<i64, EstimateError> {
    Ok(project.adjustment_factor * i64::from(raw_points(function, reference)?))
}

/// Sum of raw function points over all functions of the project
///
/// Zero for a project with no declared functions.
pub fn project_raw_points(
    project: &Project,
    reference: &ReferenceData,
) -> Result<u32, EstimateError> {
    let mut total = 0;
    for function in &project.functions {
        total += raw_points(function, reference)?;
    }
    Ok(total)
}

/// Net function points of the project: adjustment factor times the raw sum
pub fn project_net_points(
    project: &Project,
    reference: &ReferenceData,
) -> Result<i64, EstimateError> {
    Ok(project.adjustment_factor * i64::from(project_raw_points(project, reference)?))
}

/// Estimated size in thousands of lines of code
pub fn estimated_kloc(project: &Project, reference: &ReferenceData) -> Result<f64, EstimateError> {
    let lines_per_point = reference.lookup_language(&project.language)?;
    let net = project_net_points(project, reference)?;
    Ok(f64::from(lines_per_point) * net as f64 / 1000.0)
}

/// Raw workload in person-days from the size profile
pub fn raw_workload_days(
    project: &Project,
    reference: &ReferenceData,
) -> Result<i64, EstimateError> {
    let days_per_point = reference.lookup_size(&project.size_category)?;
    let net = project_net_points(project, reference)?;
    Ok(i64::from(days_per_point) * net)
}

/// Raw workload in months (30-day months)
pub fn workload_months(
    project: &Project,
    reference: &ReferenceData,
) -> Result<f64, EstimateError> {
    Ok(raw_workload_days(project, reference)? as f64 / 30.0)
}
