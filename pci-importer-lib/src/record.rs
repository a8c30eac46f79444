use serde::{Deserialize, Serialize};

/// Lowest accepted PCI rating
pub const PCI_MIN: i64 = 1;
/// Highest accepted PCI rating
pub const PCI_MAX: i64 = 5;

/// One validated road row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadRecord {
    pub road_name: String,
    pub pcivalue_2019: i64,
    pub pcivalue_2021: i64,
}
