//! Job record and its parts.

use crate::types::{HistoryCategory, JobType, TransportType};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// One synthetic service ticket.
///
/// Field order matches the wire shape consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub first_name: String,
    pub last_name: String,
    /// Always exactly 7 digits.
    pub account_number: u64,
    pub location: Location,
    /// One of the fixed appointment windows, e.g. `"8-12"`.
    pub appointment: String,
    pub email: String,
    /// Always exactly 10 digits.
    pub phone: u64,
    /// Newest first, in generation order.
    pub history: Vec<HistoryEntry>,
    pub job_type: JobType,
    pub transport_type: TransportType,
    /// The last entry is always the customer premises.
    pub facilities: Vec<Facility>,
    pub services: Services,
    /// Bonus starter creature, serialized as `null` when absent.
    #[serde(rename = "pokemon")]
    pub creature: Option<Creature>,
}

/// Customer location: a drawn state capital merged with the street address.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<u64>,
    pub street_address: String,
    pub state: String,
    pub city: String,
    pub lat: f64,
    pub long: f64,
}

/// A dated entry in the account's service history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    #[serde(rename = "title")]
    pub category: HistoryCategory,
    #[serde(serialize_with = "serialize_display_date")]
    pub date: NaiveDate,
    pub info: Vec<String>,
}

impl HistoryEntry {
    /// The date as shown on a ticket: `M/D/YYYY`, no zero padding.
    pub fn display_date(&self) -> String {
        format_display_date(&self.date)
    }
}

/// Format a date as `M/D/YYYY` with a 1-based month and no padding.
pub fn format_display_date(date: &NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

fn serialize_display_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_display_date(date))
}

/// One hop in the physical path from the exchange to the premises.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facility {
    pub heading: String,
    pub address: String,
    /// Absent on the premises entry.
    #[serde(flatten)]
    pub wiring: Option<Wiring>,
}

impl Facility {
    pub fn is_premises(&self) -> bool {
        self.wiring.is_none()
    }
}

/// Cable, pair and port assignment of a non-premises facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wiring {
    pub cable: u32,
    pub pair: u32,
    pub port: u32,
}

/// Equipment and product bundle on the account.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Services {
    /// Starts with the jack label.
    pub equipment: Vec<String>,
    /// Mbps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_speed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pots_number: Option<u64>,
    /// One or two numbers when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voip_numbers: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uverse_package: Option<String>,
}

/// A starter creature attached to some tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sprites {
    pub front_default: String,
}
