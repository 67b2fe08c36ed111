//! Match rule implementations for the explanation pipeline.

pub mod energy_alignment;
pub mod family_friendly;
pub mod low_maintenance;
pub mod size_match;

// Re-export for convenience
pub use energy_alignment::EnergyAlignmentRule;
pub use family_friendly::FamilyFriendlyRule;
pub use low_maintenance::LowMaintenanceRule;
pub use size_match::SizeMatchRule;
