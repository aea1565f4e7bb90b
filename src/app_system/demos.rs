use std::io::Write;

use tracing::{error, info, info_span, warn, Instrument};

use crate::config::{Command, GradesArgs, InventoryLogArgs};
use crate::domain::{Cents, Electronic, InventoryRecord, Prescription, TransactionKind};
use crate::error::AppError;
use crate::grades;
use crate::inventory::Inventory;
use crate::inventory_log::InventoryLog;
use crate::ledger::Ledger;
use crate::pharmacy::PharmacyDesk;

/// Runs the demo selected on the command line, printing to `out`.
pub async fn run(command: Command, out: &mut impl Write) -> Result<(), AppError> {
    match command {
        Command::Inventory => info_span!("inventory_demo").in_scope(|| run_inventory(out)),
        Command::Pharmacy => info_span!("pharmacy_demo").in_scope(|| run_pharmacy(out)),
        Command::Grades(args) => {
            run_grades(&args, out)
                .instrument(info_span!("grades_demo"))
                .await
        }
        Command::Ledger => info_span!("ledger_demo").in_scope(|| run_ledger(out)),
        Command::InventoryLog(args) => {
            run_inventory_log(&args, out)
                .instrument(info_span!("inventory_log_demo"))
                .await
        }
    }
}

// =============================================================================
// INVENTORY
// =============================================================================

pub fn run_inventory(out: &mut impl Write) -> Result<(), AppError> {
    let mut inventory = Inventory::sample()?;
    info!("Sample inventory seeded");
    print_inventory(&inventory, out)?;

    // Failure paths are logged and the demo carries on.
    if let Err(e) = inventory.add_electronic(Electronic::new(1, "Tablet", "Apple", 12, 499.0, 5)) {
        warn!(error = %e, "Adding item failed");
    }
    if let Err(e) = inventory.electronic(42) {
        warn!(error = %e, "Lookup failed");
    }

    inventory.restock_electronic(1, 60)?;
    writeln!(out, "Laptop restocked to {}", inventory.electronic(1)?.quantity)?;
    if let Err(e) = inventory.restock_electronic(1, -5) {
        warn!(error = %e, "Restock rejected");
    }

    inventory.restock_grocery(101, 55)?;
    writeln!(out, "Milk restocked to {}", inventory.grocery(101)?.quantity)?;

    let removed = inventory.remove_grocery(102)?;
    writeln!(out, "Removed {}", removed.name)?;
    if let Err(e) = inventory.grocery(102) {
        warn!(error = %e, "Lookup after removal failed");
    }
    if let Err(e) = inventory.remove_electronic(42) {
        warn!(error = %e, "Removal failed");
    }

    writeln!(out)?;
    print_inventory(&inventory, out)?;
    writeln!(out, "Total stock value: {:.2}", inventory.total_value())?;
    writeln!(out, "Low stock (<10): {}", inventory.low_stock(10).join(", "))?;
    Ok(())
}

fn print_inventory(inventory: &Inventory, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Electronics:")?;
    for item in inventory.electronics() {
        writeln!(
            out,
            "  #{} {} ({}, {} month warranty) {:.2} x{}",
            item.id, item.name, item.brand, item.warranty_months, item.price, item.quantity
        )?;
    }
    writeln!(out, "Groceries:")?;
    for item in inventory.groceries() {
        writeln!(
            out,
            "  #{} {} (expires {}) {:.2} x{}",
            item.id, item.name, item.expiry_date, item.price, item.quantity
        )?;
    }
    Ok(())
}

// =============================================================================
// PHARMACY
// =============================================================================

pub fn run_pharmacy(out: &mut impl Write) -> Result<(), AppError> {
    let mut desk = PharmacyDesk::sample()?;
    info!("Sample patients seeded");

    for patient in desk.patients() {
        writeln!(out, "Patient #{} {} (age {})", patient.id, patient.name, patient.age)?;
        for prescription in desk.prescriptions_for(patient.id)? {
            writeln!(
                out,
                "  Rx #{} {} - {} ({} doses left)",
                prescription.id, prescription.medication, prescription.dosage, prescription.quantity
            )?;
        }
    }

    match desk.find_patient_by_name("james carter") {
        Some(patient) => writeln!(out, "Found patient by name: #{} {}", patient.id, patient.name)?,
        None => warn!("Patient lookup by name found nobody"),
    }

    let remaining = desk.dispense(11, 5)?;
    let patient = desk.patient(desk.prescription(11)?.patient_id)?;
    writeln!(out, "Dispensed 5 doses of Rx #11 to {}, {} left", patient.name, remaining)?;

    if let Err(e) = desk.dispense(13, 100) {
        warn!(error = %e, "Dispense rejected");
    }
    writeln!(out, "Rx #13 still has {} doses", desk.prescription(13)?.quantity)?;
    if let Err(e) = desk.issue_prescription(Prescription::new(20, 99, "Aspirin", "81mg daily", 30)) {
        warn!(error = %e, "Prescription rejected");
    }
    if let Err(e) = desk.prescriptions_for(99) {
        warn!(error = %e, "Prescription lookup failed");
    }
    Ok(())
}

// =============================================================================
// GRADES
// =============================================================================

pub async fn run_grades(args: &GradesArgs, out: &mut impl Write) -> Result<(), AppError> {
    let report = grades::load_report(&args.input).await?;
    write!(out, "{}", report.render())?;

    if let Some(output) = &args.output {
        if let Err(e) = grades::write_report(&report, output).await {
            error!(error = %e, "Grade report not saved");
        }
    }
    Ok(())
}

// =============================================================================
// LEDGER
// =============================================================================

pub fn run_ledger(out: &mut impl Write) -> Result<(), AppError> {
    let mut ledger = Ledger::sample()?;
    info!("Sample accounts opened");

    let batch = vec![
        TransactionKind::Deposit { account: 3, amount: 25_000 },
        TransactionKind::Withdrawal { account: 2, amount: 2_500 },
        TransactionKind::Transfer { from: 1, to: 2, amount: 15_000 },
        TransactionKind::Withdrawal { account: 3, amount: 90_000 },
        TransactionKind::Deposit { account: 7, amount: 1_000 },
        TransactionKind::Transfer { from: 2, to: 2, amount: 100 },
        TransactionKind::Deposit { account: 1, amount: -300 },
    ];
    let summary = ledger.process_batch(batch.clone());

    writeln!(out, "Applied transactions:")?;
    for record in ledger.history() {
        writeln!(out, "  #{} {}", record.id, record.kind)?;
    }
    writeln!(out, "Rejected transactions:")?;
    for (index, reason) in &summary.rejected {
        writeln!(out, "  {} ({})", batch[*index], reason)?;
    }
    writeln!(out, "Balances:")?;
    for account in ledger.accounts() {
        writeln!(out, "  #{} {}: {}", account.id, account.holder, Cents(account.balance))?;
    }
    Ok(())
}

// =============================================================================
// INVENTORY LOG
// =============================================================================

pub async fn run_inventory_log(args: &InventoryLogArgs, out: &mut impl Write) -> Result<(), AppError> {
    let mut log = InventoryLog::load(&args.file).await?;

    if log.is_empty() {
        log.add(InventoryRecord::new(1, "Printer Paper", 500, 4.99))?;
        log.add(InventoryRecord::new(2, "Toner", 12, 59.90))?;
        log.add(InventoryRecord::new(3, "Staples", 80, 2.25))?;
        info!("Started a new inventory log");
    } else {
        let records = log.records();

        let last_id = records.iter().map(|record| record.id).max().unwrap_or(0);
        match last_id.checked_add(1) {
            Some(id) => {
                log.add(InventoryRecord::new(id, format!("Restock batch {}", id), 10, 1.00))?;
                info!(id, "Appended to the inventory log");
            }
            None => warn!(last_id, "No id left for a new record, append skipped"),
        }

        if let Some(first) = records.first() {
            match first.quantity.checked_add(1) {
                Some(quantity) => {
                    log.set_quantity(first.id, quantity)?;
                    let bumped = log.get(first.id)?;
                    writeln!(out, "Bumped {} to {}", bumped.name, bumped.quantity)?;
                }
                None => warn!(id = first.id, "Quantity at its maximum, increment skipped"),
            }
        }

        // Sold-out lines are dropped before saving.
        let sold_out: Vec<u32> = records
            .iter()
            .filter(|record| record.quantity == 0)
            .map(|record| record.id)
            .collect();
        for id in sold_out {
            let removed = log.remove(id)?;
            info!(id, name = %removed.name, "Dropped sold-out record");
        }
    }

    if let Err(e) = log.save().await {
        error!(error = %e, "Inventory log not saved");
    }

    writeln!(out, "Inventory log {}:", log.path().display())?;
    for record in log.records() {
        writeln!(
            out,
            "  #{} {} x{} @ {:.2}",
            record.id, record.name, record.quantity, record.price
        )?;
    }
    Ok(())
}
