//! Sensor records extracted from a normalized sensor listing

use std::fmt;

use crate::table::{Record, Table};
use crate::{DeleterError, Result};

/// Column labels PRTG uses for the requested `probe,group,device,name,objid,type`
pub mod columns {
    pub const PROBE: &str = "Probe";
    pub const GROUP: &str = "Group";
    pub const DEVICE: &str = "Device";
    pub const NAME: &str = "Object";
    pub const ID: &str = "ID";
    pub const TYPE: &str = "Type";

    pub const ALL: [&str; 6] = [PROBE, GROUP, DEVICE, NAME, ID, TYPE];
}

/// A monitored sensor as listed by PRTG at fetch time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorRecord {
    pub probe: String,
    pub group: String,
    pub device: String,
    pub name: String,
    pub id: u64,
    pub sensor_type: String,
}

impl SensorRecord {
    pub fn from_record(record: &Record) -> Result<Self> {
        let field = |label: &str| -> Result<String> {
            record
                .get(label)
                .map(str::to_string)
                .ok_or_else(|| DeleterError::Parse(format!("missing column '{}'", label)))
        };

        let raw_id = field(columns::ID)?;
        let id = raw_id.trim().parse::<u64>().map_err(|_| {
            DeleterError::Parse(format!("sensor ID '{}' is not a number", raw_id))
        })?;

        Ok(Self {
            probe: field(columns::PROBE)?,
            group: field(columns::GROUP)?,
            device: field(columns::DEVICE)?,
            name: field(columns::NAME)?,
            id,
            sensor_type: field(columns::TYPE)?,
        })
    }
}

impl fmt::Display for SensorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Probe: {}] [Group: {}] [Device: {}] [Sensor Name: {}] [Sensor ID: {}]",
            self.probe, self.group, self.device, self.name, self.id
        )
    }
}

/// Convert every row of a normalized listing into a sensor record.
///
/// The header must carry all sensor columns even when there are no rows, so
/// an error page served in place of the listing is not mistaken for one.
pub fn sensors_from_table(table: &Table) -> Result<Vec<SensorRecord>> {
    for label in columns::ALL {
        if !table.headers().iter().any(|header| header == label) {
            return Err(DeleterError::Parse(format!("missing column '{}'", label)));
        }
    }

    table
        .records()
        .iter()
        .map(SensorRecord::from_record)
        .collect()
}
