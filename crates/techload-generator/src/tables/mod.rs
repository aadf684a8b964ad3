//! Fixed lookup tables.
//!
//! Every table is indexed by draws, so entries (duplicates included) and
//! their order are part of the output and must not be edited.

mod capitals;
mod names;

pub use capitals::STATE_CAPITALS;
pub use names::{FIRST_NAMES, LAST_NAMES};

/// A state and its capital city with coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capital {
    pub state: &'static str,
    pub city: &'static str,
    pub lat: f64,
    pub long: f64,
}

pub const STREET_NAMES: [&str; 23] = [
    "Main", "Church", "High", "Elm", "Park", "Walnut", "Washington", "2nd", "Chestnut", "Broad",
    "Maple", "Oak", "Maple", "Center", "Pine", "River", "Market", "Washington", "Water", "Union",
    "3rd", "South", "4th",
];

pub const STREET_TYPES: [&str; 7] = ["St", "Ln", "Ave", "Dr", "Blvd", "Park", "Rd"];

/// Single-letter location-type prefixes for facility addresses.
pub const FACILITY_PREFIXES: [&str; 4] = ["F", "S", "R", "B"];

pub const APPOINTMENT_WINDOWS: [&str; 8] =
    ["8-10", "10-12", "8-12", "8-8", "12-2", "2-4", "12-4", "4-8"];

// Email parts
pub const EMAIL_PREFIXES: [&str; 4] = ["the", "super", "dr", "smiling"];
pub const EMAIL_SUFFIXES: [&str; 3] = ["inc", "worldwide", "sports"];
pub const EMAIL_DOMAINS: [&str; 8] = [
    "gmail", "aol", "adelphia", "yahoo", "bell", "att", "microsoft", "outlook",
];
pub const EMAIL_TOP_LEVEL: [&str; 6] = ["com", "net", "gov", "co.uk", "org", "edu"];

// History: interactions are indexed together, title and note share one draw.
pub const INTERACTION_TITLES: [&str; 3] =
    ["Customer Called", "Customer Chatted", "Contacted Customer"];
pub const INTERACTION_NOTES: [&str; 3] = [
    "Customer wanted to check on status of bill.",
    "Customer wanted to upgrade speed profile. Informed of charges.",
    "Notified customer of outstanding account balance.",
];

pub const DISPATCH_STATUSES: [&str; 3] = ["COMPLETE", "RETURNED", "PENDING"];
pub const DISPATCH_TYPES: [&str; 6] = ["IEFS", "TFS", "LMNO", "MachOp", "MachOke", "MachAmp"];
pub const DISPATCH_NOTES: [&str; 3] = [
    "Worked on hsia. Probably wont be in service long but fingers crossed.",
    "Lots of work done but will come back later to completely complete work.",
    "Customer asked me if I always dressed like this. I said yes. I always do, I only have one uniform. I mean I have multiple uniforms, but they all look the same. I asked why they asked. They just said they were curious. I left.",
];

/// Tag written into dispatch notes when the key is empty.
pub const FALLBACK_TECH_TAG: &str = "tr99aa";

pub const CASE_NOTES: [&str; 3] = [
    "Customer wanted to verify if they did in fact have service with us. They do. Informed customer.",
    "Customer's internet is not working. Followed troubleshooting flow. Customer had cell phone upside down.",
    "Customer is wondering why this entry type would be any different than Interaction entries, but idk I just whipped this up so we will roll with it.",
];

// Facilities
pub const FIBER_FACILITY_HEADINGS: [&str; 3] = ["PFP", "CFST", "Prem"];
pub const PREMISES_HEADING: &str = "Prem";

// Services
pub const COPPER_JACK: &str = "AB Jack";
pub const FIBER_JACK: &str = "Slimline Jack";
pub const FIBER_PREMIUM_JACK: &str = "010 Jack";
pub const FIBER_GATEWAY: &str = "320";
pub const GATEWAY_MODELS: [&str; 4] = ["210", "5268", "599", "589"];
pub const UVERSE_PACKAGES: [&str; 3] = ["U100", "U200", "U300"];
pub const UVERSE_GATEWAYS: [&str; 3] = ["2262v2", "9001", "2200"];
pub const UVERSE_SET_TOP_BOXES: [&str; 3] = ["2500", "7005", "1200"];

pub const FIBER_SPEEDS: [u32; 4] = [1000, 500, 300, 100];
pub const FIBER_XGS_SPEEDS: [u32; 2] = [5000, 2000];
pub const IP_SPEEDS: [u32; 4] = [1, 2, 5, 10];
pub const VDSL_SPEEDS: [u32; 3] = [10, 15, 25];
pub const VDSL_BONDED_SPEEDS: [u32; 2] = [50, 100];

/// Starter creatures: `(id, name)`.
pub const STARTERS: [(u32, &str); 3] = [(1, "bulbasaur"), (4, "charmander"), (7, "squirtle")];
pub const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";
