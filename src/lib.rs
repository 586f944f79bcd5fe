//! softcost: software project cost and schedule estimation
//!
//! A pure calculation engine implementing function point analysis and the
//! COCOMO effort model over plain data records. Persistence and presentation
//! are the caller's concern; the engine is a deterministic function of a
//! [`entities::Project`] and an immutable [`reference::ReferenceData`] set.

pub mod analysis;
pub mod core;
pub mod entities;
pub mod reference;
