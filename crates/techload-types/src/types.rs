//! Closed category sets used by job records.

use serde::Serialize;
use std::fmt;

/// The kind of work a ticket was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JobType {
    Install,
    Repair,
    Helper,
    #[serde(rename = "POTS")]
    Pots,
    #[serde(rename = "BSW")]
    Bsw,
}

impl JobType {
    /// All job types, in draw order.
    pub const ALL: [JobType; 5] = [
        JobType::Install,
        JobType::Repair,
        JobType::Helper,
        JobType::Pots,
        JobType::Bsw,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobType::Install => "Install",
            JobType::Repair => "Repair",
            JobType::Helper => "Helper",
            JobType::Pots => "POTS",
            JobType::Bsw => "BSW",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How service reaches the premises.
///
/// The first four variants are copper-style deliveries, the last two are
/// fiber-to-the-premises. Speed tiers and equipment are keyed off substrings
/// of the label (`FTTP`, `XGS`, `IP`, `BP`), so labels must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransportType {
    #[serde(rename = "IP-CO")]
    IpCo,
    #[serde(rename = "IP-RT")]
    IpRt,
    #[serde(rename = "FTTN")]
    Fttn,
    #[serde(rename = "FTTN-BP")]
    FttnBp,
    #[serde(rename = "FTTP GPON")]
    FttpGpon,
    #[serde(rename = "FTTP XGS-PON")]
    FttpXgsPon,
}

impl TransportType {
    /// Copper-style transports, in draw order.
    pub const COPPER: [TransportType; 4] = [
        TransportType::IpCo,
        TransportType::IpRt,
        TransportType::Fttn,
        TransportType::FttnBp,
    ];

    /// Fiber-style transports, in draw order.
    pub const FIBER: [TransportType; 2] = [TransportType::FttpGpon, TransportType::FttpXgsPon];

    pub fn label(&self) -> &'static str {
        match self {
            TransportType::IpCo => "IP-CO",
            TransportType::IpRt => "IP-RT",
            TransportType::Fttn => "FTTN",
            TransportType::FttnBp => "FTTN-BP",
            TransportType::FttpGpon => "FTTP GPON",
            TransportType::FttpXgsPon => "FTTP XGS-PON",
        }
    }

    pub fn is_fiber(&self) -> bool {
        self.label().starts_with("FTTP")
    }

    /// Whether the label carries the given marker (`XGS`, `IP`, `BP`, ...).
    pub fn has_marker(&self, marker: &str) -> bool {
        self.label().contains(marker)
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category of a service history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HistoryCategory {
    Interaction,
    Dispatch,
    Case,
}

impl HistoryCategory {
    /// All categories, in draw order.
    pub const ALL: [HistoryCategory; 3] = [
        HistoryCategory::Interaction,
        HistoryCategory::Dispatch,
        HistoryCategory::Case,
    ];
}

impl fmt::Display for HistoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HistoryCategory::Interaction => "Interaction",
            HistoryCategory::Dispatch => "Dispatch",
            HistoryCategory::Case => "Case",
        };
        f.write_str(label)
    }
}
