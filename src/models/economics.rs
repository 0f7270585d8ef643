//! Health economics record models

use crate::models::traits::CdmRecord;
use crate::schema::field_def::TableDef;
use crate::tables;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A period of continuous enrollment under a specific health plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayerPlanPeriod {
    pub payer_plan_period_id: i32,
    pub person_id: i32,
    pub payer_plan_period_start_date: NaiveDate,
    pub payer_plan_period_end_date: NaiveDate,
    pub payer_concept_id: Option<i32>,
    pub payer_source_value: Option<String>,
    pub payer_source_concept_id: Option<i32>,
    pub plan_concept_id: Option<i32>,
    pub plan_source_value: Option<String>,
    pub plan_source_concept_id: Option<i32>,
    pub sponsor_concept_id: Option<i32>,
    pub sponsor_source_value: Option<String>,
    pub sponsor_source_concept_id: Option<i32>,
    pub family_source_value: Option<String>,
    pub stop_reason_concept_id: Option<i32>,
    pub stop_reason_source_value: Option<String>,
    pub stop_reason_source_concept_id: Option<i32>,
}

impl CdmRecord for PayerPlanPeriod {
    fn table_name() -> &'static str {
        "payer_plan_period"
    }

    fn table_def() -> TableDef {
        tables::economics::payer_plan_period()
    }
}

/// The cost of a medical event recorded in one of the clinical tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub cost_id: i32,
    pub cost_event_id: i32,
    pub cost_domain_id: String,
    pub cost_type_concept_id: i32,
    pub currency_concept_id: Option<i32>,
    pub total_charge: Option<f64>,
    pub total_cost: Option<f64>,
    pub total_paid: Option<f64>,
    pub paid_by_payer: Option<f64>,
    pub paid_by_patient: Option<f64>,
    pub paid_patient_copay: Option<f64>,
    pub paid_patient_coinsurance: Option<f64>,
    pub paid_patient_deductible: Option<f64>,
    pub paid_by_primary: Option<f64>,
    pub paid_ingredient_cost: Option<f64>,
    pub paid_dispensing_fee: Option<f64>,
    pub payer_plan_period_id: Option<i32>,
    pub amount_allowed: Option<f64>,
    pub revenue_code_concept_id: Option<i32>,
    pub revenue_code_source_value: Option<String>,
    pub drg_concept_id: Option<i32>,
    pub drg_source_value: Option<String>,
}

impl CdmRecord for Cost {
    fn table_name() -> &'static str {
        "cost"
    }

    fn table_def() -> TableDef {
        tables::economics::cost()
    }
}
