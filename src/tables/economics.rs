//! Health economics table definitions
//!
//! Payer plan periods and the cost table covering all billable events.

use crate::schema::field_def::{ColumnDef, ColumnType, TableDef};

/// `payer_plan_period` table definition
#[must_use]
pub fn payer_plan_period() -> TableDef {
    TableDef::new(
        "payer_plan_period",
        "Periods of continuous enrollment under a specific health plan benefit structure",
        vec![
            ColumnDef::new("payer_plan_period_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("person_id", ColumnType::Integer, false).references("person"),
            ColumnDef::new("payer_plan_period_start_date", ColumnType::Date, false),
            ColumnDef::new("payer_plan_period_end_date", ColumnType::Date, false),
            ColumnDef::new("payer_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("payer_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("payer_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("plan_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("plan_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("plan_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("sponsor_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("sponsor_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("sponsor_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("family_source_value", ColumnType::String, true).with_max_length(50),
            ColumnDef::new("stop_reason_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("stop_reason_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("stop_reason_source_concept_id", ColumnType::Integer, true)
                .references("concept"),
        ],
    )
}

/// `cost` table definition
#[must_use]
pub fn cost() -> TableDef {
    TableDef::new(
        "cost",
        "Cost of any medical event recorded in the clinical event tables",
        vec![
            ColumnDef::new("cost_id", ColumnType::Integer, false).primary_key(),
            ColumnDef::new("cost_event_id", ColumnType::Integer, false),
            ColumnDef::new("cost_domain_id", ColumnType::String, false)
                .with_max_length(20)
                .references("domain"),
            ColumnDef::new("cost_type_concept_id", ColumnType::Integer, false)
                .references("concept"),
            ColumnDef::new("currency_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("total_charge", ColumnType::Decimal, true),
            ColumnDef::new("total_cost", ColumnType::Decimal, true),
            ColumnDef::new("total_paid", ColumnType::Decimal, true),
            ColumnDef::new("paid_by_payer", ColumnType::Decimal, true),
            ColumnDef::new("paid_by_patient", ColumnType::Decimal, true),
            ColumnDef::new("paid_patient_copay", ColumnType::Decimal, true),
            ColumnDef::new("paid_patient_coinsurance", ColumnType::Decimal, true),
            ColumnDef::new("paid_patient_deductible", ColumnType::Decimal, true),
            ColumnDef::new("paid_by_primary", ColumnType::Decimal, true),
            ColumnDef::new("paid_ingredient_cost", ColumnType::Decimal, true),
            ColumnDef::new("paid_dispensing_fee", ColumnType::Decimal, true),
            ColumnDef::new("payer_plan_period_id", ColumnType::Integer, true),
            ColumnDef::new("amount_allowed", ColumnType::Decimal, true),
            ColumnDef::new("revenue_code_concept_id", ColumnType::Integer, true)
                .references("concept"),
            ColumnDef::new("revenue_code_source_value", ColumnType::String, true)
                .with_max_length(50),
            ColumnDef::new("drg_concept_id", ColumnType::Integer, true).references("concept"),
            ColumnDef::new("drg_source_value", ColumnType::String, true).with_max_length(3),
        ],
    )
}
