//! COCOMO effort and schedule estimation
//!
//! Simple effort comes from estimated KLOC and the A/B coefficients of the
//! project type; intermediate effort applies the product of the 15 cost
//! driver multipliers; development time follows from C/D. All three results
//! are rounded to two decimals.

use crate::analysis::{function_points, EstimateError};
use crate::entities::Project;
use crate::reference::{CoefficientName, ReferenceData};

/// Round to two decimals, halves away from zero
///
/// The one rounding policy used for every published effort and schedule
/// figure, so results reproduce bit-for-bit across runs.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `base ^ exponent`, rejecting the mathematically undefined cases
///
/// A non-positive base under a non-integer exponent has no real-valued
/// result; that is a domain error here, never silently coerced to zero.
fn power(base: f64, exponent: f64) -> Result<f64, EstimateError> {
    if base <= 0.0 && exponent.fract() != 0.0 {
        return Err(EstimateError::UndefinedPower { base, exponent });
    }
    Ok(base.powf(exponent))
}

/// Simple effort in person-months: `A * kloc^B`
pub fn simple_effort(project: &Project, reference: &ReferenceData) -> Result<f64, EstimateError> {
    let a = reference.lookup_coefficient(project.project_type, CoefficientName::A)?;
    let b = reference.lookup_coefficient(project.project_type, CoefficientName::B)?;
    let kloc = function_points::estimated_kloc(project, reference)?;
    Ok(round2(a * power(kloc, b)?))
}

/// Intermediate effort: simple effort times the cost driver product
pub fn intermediate_effort(
    project: &Project,
    reference: &ReferenceData,
) -> Result<f64, EstimateError> {
    let simple = simple_effort(project, reference)?;
    Ok(round2(simple * project.drivers.product()))
}

/// Development time in months: `C * intermediate^D`
pub fn development_time(
    project: &Project,
    reference: &ReferenceData,
) -> Result<f64, EstimateError> {
    let c = reference.lookup_coefficient(project.project_type, CoefficientName::C)?;
    let d = reference.lookup_coefficient(project.project_type, CoefficientName::D)?;
    let intermediate = intermediate_effort(project, reference)?;
    Ok(round2(c * power(intermediate, d)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::drivers::{CostDrivers, ProgrammerCapability, Reliability};
    use crate::entities::Function;
    use crate::reference::{FunctionType, ProjectType};

    fn reference() -> ReferenceData {
        ReferenceData::builtin().unwrap()
    }

    fn organic_project() -> Project {
        let mut project =
            Project::new("demo", ProjectType::Organic, "pascal", "medium", "Author");
        project.add_function(Function::new("entry", FunctionType::Input, 1, 3));
        project
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        // 2.625 * 100 is exactly 262.5, a true halfway point.
        assert_eq!(round2(2.625), 2.63);
        assert_eq!(round2(-2.625), -2.63);
        assert_eq!(round2(2.004), 2.0);
        assert_eq!(round2(2.006), 2.01);
    }

    #[test]
    fn test_simple_effort_organic() {
        let reference = reference();
        let effort = simple_effort(&organic_project(), &reference).unwrap();

        // A=2.4, B=1.05, kloc = 91 * 3 / 1000 = 0.273
        let expected = round2(2.4 * 0.273_f64.powf(1.05));
        assert_eq!(effort, expected);
    }

    #[test]
    fn test_intermediate_equals_simple_for_nominal_drivers() {
        let reference = reference();
        let project = organic_project();
        assert_eq!(
            intermediate_effort(&project, &reference).unwrap(),
            simple_effort(&project, &reference).unwrap()
        );
    }

    #[test]
    fn test_intermediate_applies_driver_product() {
        let reference = reference();
        let mut project = organic_project();
        project.drivers = CostDrivers {
            reliability: Reliability::VeryHigh,
            programmer_capability: ProgrammerCapability::VeryHigh,
            ..Default::default()
        };

        let simple = simple_effort(&project, &reference).unwrap();
        let expected = round2(simple * 1.40 * 0.70);
        assert_eq!(intermediate_effort(&project, &reference).unwrap(), expected);
    }

    #[test]
    fn test_development_time_organic() {
        let reference = reference();
        let project = organic_project();

        let intermediate = intermediate_effort(&project, &reference).unwrap();
        let expected = round2(2.5 * intermediate.powf(0.38));
        assert_eq!(development_time(&project, &reference).unwrap(), expected);
    }

    #[test]
    fn test_zero_kloc_is_a_domain_error() {
        // No functions: net points 0, kloc 0, and B=1.05 is non-integer.
        let reference = reference();
        let project = Project::new("empty", ProjectType::Organic, "pascal", "medium", "A");

        let err = simple_effort(&project, &reference).unwrap_err();
        assert!(matches!(err, EstimateError::UndefinedPower { .. }));
    }

    #[test]
    fn test_negative_kloc_is_a_domain_error() {
        let reference = reference();
        let mut project = organic_project();
        project.adjustment_factor = -1;

        let err = simple_effort(&project, &reference).unwrap_err();
        assert!(matches!(err, EstimateError::UndefinedPower { .. }));
    }
}
