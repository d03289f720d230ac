use crate::domain::model::OpportunityRecord;
use chrono::NaiveDate;

pub const DEADLINE_FORMAT: &str = "%d/%m/%Y";

pub fn parse_deadline(end_date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(end_date.trim(), DEADLINE_FORMAT).ok()
}

/// Earliest deadline first. Records without a usable deadline go last, and
/// ties keep their input order.
pub fn order_by_deadline(mut records: Vec<OpportunityRecord>) -> Vec<OpportunityRecord> {
    records.sort_by_key(|record| parse_deadline(&record.end_date).unwrap_or(NaiveDate::MAX));
    records
}
