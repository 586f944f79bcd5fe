//! COCOMO cost drivers
//!
//! Each of the 15 intermediate-COCOMO cost drivers is an enum whose variants
//! are the qualitative rating levels the method defines, each carrying a
//! fixed effort multiplier. Keeping the ratings as enums means a project can
//! never hold a multiplier value outside its published table.

use serde::{Deserialize, Serialize};

macro_rules! cost_driver {
    (
        $(#[$meta:meta])*
        $name:ident, default $default:ident {
            $($variant:ident => $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Effort multiplier for this rating level
            pub fn multiplier(&self) -> f64 {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            /// All rating levels in table order
            pub fn levels() -> &'static [$name] {
                &[$(Self::$variant),+]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }
    };
}

cost_driver! {
    /// Required software reliability (RELY)
    Reliability, default Nominal {
        VeryLow => 0.75,
        Low => 0.88,
        Nominal => 1.00,
        High => 1.15,
        VeryHigh => 1.40,
    }
}

cost_driver! {
    /// Database size relative to program size (DATA)
    DataSize, default Nominal {
        Low => 0.94,
        Nominal => 1.00,
        High => 1.08,
        VeryHigh => 1.16,
    }
}

cost_driver! {
    /// Product complexity (CPLX)
    ProductComplexity, default Nominal {
        VeryLow => 0.70,
        Low => 0.85,
        Nominal => 1.00,
        High => 1.15,
        VeryHigh => 1.30,
        ExtraHigh => 1.65,
    }
}

cost_driver! {
    /// Execution time constraint (TIME)
    TimeConstraint, default Nominal {
        Nominal => 1.00,
        High => 1.11,
        VeryHigh => 1.30,
        ExtraHigh => 1.66,
    }
}

cost_driver! {
    /// Main storage constraint (STOR)
    StorageConstraint, default Nominal {
        Nominal => 1.00,
        High => 1.06,
        VeryHigh => 1.21,
        ExtraHigh => 1.56,
    }
}

cost_driver! {
    /// Virtual machine volatility (VIRT)
    VmVolatility, default Nominal {
        Low => 0.87,
        Nominal => 1.00,
        High => 1.15,
        VeryHigh => 1.30,
    }
}

cost_driver! {
    /// Development system turnaround constraint (TURN)
    Turnaround, default Nominal {
        Low => 0.87,
        Nominal => 1.00,
        High => 1.07,
        VeryHigh => 1.15,
    }
}

cost_driver! {
    /// Analyst capability (ACAP)
    AnalystCapability, default Nominal {
        VeryLow => 1.46,
        Low => 1.19,
        Nominal => 1.00,
        High => 0.86,
        VeryHigh => 0.71,
    }
}

cost_driver! {
    /// Application domain experience (AEXP)
    ApplicationExperience, default Nominal {
        VeryLow => 1.29,
        Low => 1.13,
        Nominal => 1.00,
        High => 0.91,
        VeryHigh => 0.82,
    }
}

cost_driver! {
    /// Programmer capability (PCAP)
    ProgrammerCapability, default Nominal {
        VeryLow => 1.42,
        Low => 1.17,
        Nominal => 1.00,
        High => 0.86,
        VeryHigh => 0.70,
    }
}

cost_driver! {
    /// Virtual machine experience (VEXP)
    VmExperience, default Nominal {
        VeryLow => 1.21,
        Low => 1.10,
        Nominal => 1.00,
        High => 0.95,
    }
}

cost_driver! {
    /// Programming language experience (LEXP)
    LanguageExperience, default Nominal {
        VeryLow => 1.14,
        Low => 1.07,
        Nominal => 1.00,
        High => 0.95,
    }
}

cost_driver! {
    /// Use of modern programming practices (MODP)
    ModernPractices, default Nominal {
        VeryLow => 1.24,
        Low => 1.10,
        Nominal => 1.00,
        High => 0.91,
        VeryHigh => 0.82,
    }
}

cost_driver! {
    /// Availability of software tools (TOOL)
    ToolAvailability, default Nominal {
        VeryLow => 1.24,
        Low => 1.10,
        Nominal => 1.00,
        High => 0.91,
        VeryHigh => 0.83,
    }
}

cost_driver! {
    /// Required schedule deviation from nominal (SCED)
    ScheduleConstraint, default Nominal {
        VeryLow => 1.23,
        Low => 1.08,
        Nominal => 1.00,
        High => 1.04,
        VeryHigh => 1.10,
    }
}

/// The full set of 15 cost driver ratings for a project
///
/// Defaults to the nominal level (multiplier 1.00) for every driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostDrivers {
    pub reliability: Reliability,
    pub data_size: DataSize,
    pub complexity: ProductComplexity,
    pub time_constraint: TimeConstraint,
    pub storage_constraint: StorageConstraint,
    pub vm_volatility: VmVolatility,
    pub turnaround: Turnaround,
    pub analyst_capability: AnalystCapability,
    pub application_experience: ApplicationExperience,
    pub programmer_capability: ProgrammerCapability,
    pub vm_experience: VmExperience,
    pub language_experience: LanguageExperience,
    pub modern_practices: ModernPractices,
    pub tool_availability: ToolAvailability,
    pub schedule_constraint: ScheduleConstraint,
}

impl CostDrivers {
    /// The 15 multiplier values in declaration order
    pub fn multipliers(&self) -> [f64; 15] {
        [
            self.reliability.multiplier(),
            self.data_size.multiplier(),
            self.complexity.multiplier(),
            self.time_constraint.multiplier(),
            self.storage_constraint.multiplier(),
            self.vm_volatility.multiplier(),
            self.turnaround.multiplier(),
            self.analyst_capability.multiplier(),
            self.application_experience.multiplier(),
            self.programmer_capability.multiplier(),
            self.vm_experience.multiplier(),
            self.language_experience.multiplier(),
            self.modern_practices.multiplier(),
            self.tool_availability.multiplier(),
            self.schedule_constraint.multiplier(),
        ]
    }

    /// Product of all 15 multipliers (the intermediate-effort adjustment)
    pub fn product(&self) -> f64 {
        self.multipliers().iter().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_nominal() {
        let drivers = CostDrivers::default();
        for multiplier in drivers.multipliers() {
            assert_eq!(multiplier, 1.00);
        }
        assert_eq!(drivers.product(), 1.00);
    }

    #[test]
    fn test_product_multiplies_all_drivers() {
        let drivers = CostDrivers {
            reliability: Reliability::High,
            complexity: ProductComplexity::ExtraHigh,
            programmer_capability: ProgrammerCapability::VeryHigh,
            ..Default::default()
        };

        let expected = 1.15 * 1.65 * 0.70;
        assert!((drivers.product() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_product_monotone_in_each_driver() {
        // Raising any single multiplier must not decrease the product.
        let baseline = CostDrivers::default();

        let mut by_multiplier: Vec<(f64, f64)> = AnalystCapability::levels()
            .iter()
            .map(|level| {
                let product = CostDrivers {
                    analyst_capability: *level,
                    ..baseline
                }
                .product();
                (level.multiplier(), product)
            })
            .collect();
        by_multiplier.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

        let mut previous = f64::MIN;
        for (_, product) in by_multiplier {
            assert!(product >= previous);
            previous = product;
        }
    }

    #[test]
    fn test_rating_levels_match_published_tables() {
        let values: Vec<f64> = Reliability::levels().iter().map(|l| l.multiplier()).collect();
        assert_eq!(values, vec![0.75, 0.88, 1.00, 1.15, 1.40]);

        let values: Vec<f64> = ScheduleConstraint::levels()
            .iter()
            .map(|l| l.multiplier())
            .collect();
        assert_eq!(values, vec![1.23, 1.08, 1.00, 1.04, 1.10]);
    }

    #[test]
    fn test_serde_snake_case_levels() {
        let yaml = serde_yml::to_string(&Reliability::VeryHigh).unwrap();
        assert_eq!(yaml.trim(), "very_high");

        let parsed: Reliability = serde_yml::from_str("low").unwrap();
        assert_eq!(parsed, Reliability::Low);
    }

    #[test]
    fn test_cost_drivers_roundtrip() {
        let drivers = CostDrivers {
            data_size: DataSize::VeryHigh,
            vm_experience: VmExperience::VeryLow,
            ..Default::default()
        };

        let yaml = serde_yml::to_string(&drivers).unwrap();
        let parsed: CostDrivers = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, drivers);
    }

    #[test]
    fn test_partial_drivers_fill_with_nominal() {
        let parsed: CostDrivers = serde_yml::from_str("reliability: very_low").unwrap();
        assert_eq!(parsed.reliability, Reliability::VeryLow);
        assert_eq!(parsed.complexity, ProductComplexity::Nominal);
    }
}
