/// Represents a registered patient.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
}

/// A medication issued to a patient. `quantity` counts the doses left to dispense.
#[derive(Debug, Clone, PartialEq)]
pub struct Prescription {
    pub id: u32,
    pub patient_id: u32,
    pub medication: String,
    pub dosage: String,
    pub quantity: i32,
}

impl Patient {
    pub fn new(id: u32, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

impl Prescription {
    pub fn new(
        id: u32,
        patient_id: u32,
        medication: impl Into<String>,
        dosage: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self {
            id,
            patient_id,
            medication: medication.into(),
            dosage: dosage.into(),
            quantity,
        }
    }
}
