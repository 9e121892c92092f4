#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Wire bodies for the igor machine-management API.
//!
//! The server owns the shape of every response, so only request bodies and the
//! error document are modelled here. Field names are part of the contract with
//! the server and must not be renamed.
use serde::{Deserialize, Serialize};

/// Desired chassis power state or power-restore policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateRequest {
    /// State keyword understood by the BMC (`on`, `cycle`, `always-off`, ...).
    pub state: String,
}

/// New SEL clock value, formatted `YYYY-MM-DD hh:mm:ss`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelTimeRequest {
    /// Clock value forwarded verbatim.
    pub time: String,
}

/// Reference to a single sensor by its display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SensorRef {
    /// Sensor name, e.g. `Ambient Temp`.
    pub id: String,
}

/// Lookup of several sensors in a single request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SensorLookupRequest {
    /// Sensors to describe, in the order the operator listed them.
    pub sensors: Vec<SensorRef>,
}

impl SensorLookupRequest {
    /// Build a lookup from sensor names.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sensors: names
                .into_iter()
                .map(|name| SensorRef { id: name.into() })
                .collect(),
        }
    }
}

/// Threshold update for a single sensor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThresholdRequest {
    /// Threshold selector (`unr`, `ucr`, `unc`, `lower`, `upper`, ...).
    pub threshold: String,
    /// One value for a single threshold, three for `lower`/`upper`.
    pub values: Vec<f64>,
}

/// LAN channel parameter update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanSetRequest {
    /// `ipmitool lan set` command name.
    pub command: String,
    /// Parameter passed to the command.
    pub param: String,
}

/// LAN alert destination parameter update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanAlertSetRequest {
    /// Alert destination index on the channel.
    pub dest: u8,
    /// `ipmitool lan alert set` command name.
    pub command: String,
    /// Parameter passed to the command.
    pub param: String,
}

/// Reference to a single SEL record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordRef {
    /// SEL record identifier.
    pub id: u32,
}

/// Fetch of several SEL records by identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelRecordsRequest {
    /// Records to fetch; unknown identifiers are skipped by the server.
    pub records: Vec<RecordRef>,
}

impl SelRecordsRequest {
    /// Build a fetch request from record identifiers.
    #[must_use]
    pub fn from_ids(ids: &[u32]) -> Self {
        Self {
            records: ids.iter().map(|&id| RecordRef { id }).collect(),
        }
    }
}

/// Error document returned alongside non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable explanation, e.g. `Invalid channel: 0`.
    pub message: String,
}
