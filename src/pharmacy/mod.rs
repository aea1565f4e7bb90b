//! Patient registry and prescription lookup.

pub mod entity;
pub mod error;

pub use error::*;

use tracing::{debug, info, instrument, warn};

use crate::domain::{Patient, Prescription};
use crate::store_framework::{KeyedEntityStore, Stocked};

/// Front desk of a pharmacy: who the patients are and what they were prescribed.
#[derive(Debug, Default)]
pub struct PharmacyDesk {
    patients: KeyedEntityStore<Patient>,
    prescriptions: KeyedEntityStore<Prescription>,
}

impl PharmacyDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed sample patients and prescriptions used by the demo.
    pub fn sample() -> Result<Self, PharmacyError> {
        let mut desk = Self::new();
        desk.register_patient(Patient::new(1, "Maria Lopez", 34))?;
        desk.register_patient(Patient::new(2, "James Carter", 61))?;
        desk.register_patient(Patient::new(3, "Aiko Tanaka", 27))?;
        desk.issue_prescription(Prescription::new(10, 1, "Amoxicillin", "500mg twice daily", 20))?;
        desk.issue_prescription(Prescription::new(11, 2, "Lisinopril", "10mg once daily", 30))?;
        desk.issue_prescription(Prescription::new(12, 2, "Metformin", "850mg with meals", 60))?;
        desk.issue_prescription(Prescription::new(13, 3, "Cetirizine", "10mg as needed", 14))?;
        Ok(desk)
    }

    #[instrument(fields(patient_id = patient.id, name = %patient.name), skip(self, patient))]
    pub fn register_patient(&mut self, patient: Patient) -> Result<(), PharmacyError> {
        debug!("Registering patient");
        self.patients.insert(patient)?;
        Ok(())
    }

    #[instrument(
        fields(
            prescription_id = prescription.id,
            patient_id = prescription.patient_id,
            medication = %prescription.medication
        ),
        skip(self, prescription)
    )]
    pub fn issue_prescription(&mut self, prescription: Prescription) -> Result<(), PharmacyError> {
        if !self.patients.contains(&prescription.patient_id) {
            warn!("Prescription refers to an unknown patient");
            return Err(PharmacyError::UnknownPatient(prescription.patient_id));
        }
        self.prescriptions.insert(prescription)?;
        debug!("Prescription issued");
        Ok(())
    }

    pub fn patient(&self, id: u32) -> Result<&Patient, PharmacyError> {
        Ok(self.patients.get_by_id(&id)?)
    }

    pub fn prescription(&self, id: u32) -> Result<&Prescription, PharmacyError> {
        Ok(self.prescriptions.get_by_id(&id)?)
    }

    /// Patients ordered by id.
    pub fn patients(&self) -> Vec<Patient> {
        let mut patients = self.patients.list_all();
        patients.sort_by_key(|patient| patient.id);
        patients
    }

    /// Case-insensitive lookup by full name.
    pub fn find_patient_by_name(&self, name: &str) -> Option<&Patient> {
        let wanted = name.trim().to_lowercase();
        self.patients
            .iter()
            .find(|patient| patient.name.to_lowercase() == wanted)
    }

    /// Prescriptions issued to `patient_id`, ordered by id.
    pub fn prescriptions_for(&self, patient_id: u32) -> Result<Vec<&Prescription>, PharmacyError> {
        if !self.patients.contains(&patient_id) {
            return Err(PharmacyError::UnknownPatient(patient_id));
        }
        let mut found: Vec<&Prescription> = self
            .prescriptions
            .iter()
            .filter(|prescription| prescription.patient_id == patient_id)
            .collect();
        found.sort_by_key(|prescription| prescription.id);
        Ok(found)
    }

    /// Hands out `doses` from a prescription and returns what is left.
    #[instrument(skip(self))]
    pub fn dispense(&mut self, prescription_id: u32, doses: i32) -> Result<i32, PharmacyError> {
        if doses <= 0 {
            return Err(PharmacyError::InvalidDoses(doses));
        }
        let available = self.prescriptions.get_by_id(&prescription_id)?.quantity();
        if doses > available {
            warn!(available, "Not enough doses left");
            return Err(PharmacyError::InsufficientSupply {
                requested: doses,
                available,
            });
        }
        let remaining = available - doses;
        self.prescriptions.update_quantity(&prescription_id, remaining)?;
        info!(remaining, "Doses dispensed");
        Ok(remaining)
    }
}
