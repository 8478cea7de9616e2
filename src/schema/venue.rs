use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub town: String,
    pub capacity: u32,
    pub attendance: u32,
    /// Attendance as a rounded percentage of capacity.
    pub full_percentage: u32,
}

impl Venue {
    pub fn new(name: impl Into<String>, town: impl Into<String>, capacity: u32, attendance: u32) -> Self {
        let full_percentage = if capacity == 0 {
            0
        } else {
            (f64::from(attendance) / f64::from(capacity) * 100.0).round() as u32
        };
        Self {
            name: name.into(),
            town: town.into(),
            capacity,
            attendance,
            full_percentage,
        }
    }
}
