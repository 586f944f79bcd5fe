//! Derived metric computation
//!
//! Two pure pipelines over a project and a reference dataset: function point
//! analysis ([`function_points`]) and the COCOMO effort model ([`cocomo`]),
//! composed into the [`ProjectEstimate`] aggregate. Every operation is a
//! stateless function of its inputs; failures propagate as typed errors and
//! no partial results are produced.

use miette::Diagnostic;
use thiserror::Error;

use crate::reference::ReferenceError;

pub mod cocomo;
pub mod estimate;
pub mod function_points;

pub use estimate::ProjectEstimate;

/// Errors raised while computing derived metrics
#[derive(Debug, Error, Diagnostic)]
pub enum EstimateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Reference(#[from] ReferenceError),

    #[error(
        "effort is undefined for non-positive base {base} raised to \
         non-integer exponent {exponent}"
    )]
    #[diagnostic(
        code(softcost::analysis::undefined_power),
        help("a project with zero net function points has no real-valued effort estimate")
    )]
    UndefinedPower { base: f64, exponent: f64 },
}
