//! Endpoint paths for machine-management resources.
//!
//! Every path has the shape `/machines/{hostname}/{resource}`. Optional
//! channel and record refinements switch between the collection endpoint and
//! the single-item endpoint; they never fall back to a default value.

use std::fmt::Write as _;

use crate::value::bool_token;

/// Resource addressed under a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resource<'a> {
    Chassis,
    ChassisPower,
    ChassisPolicy,
    Sensors,
    Sensor(&'a str),
    Lan { channel: Option<u8> },
    LanAlert { channel: Option<u8> },
    Sel,
    SelTime,
    SelRecords { extended: Option<bool> },
    SelRecord(u32),
}

/// Build the request path for `resource` on `hostname`.
#[must_use]
pub(crate) fn resolve(hostname: &str, resource: Resource<'_>) -> String {
    let mut path = format!("/machines/{}", urlencoding::encode(hostname));
    match resource {
        Resource::Chassis => path.push_str("/chassis"),
        Resource::ChassisPower => path.push_str("/chassis/power"),
        Resource::ChassisPolicy => path.push_str("/chassis/policy"),
        Resource::Sensors => path.push_str("/sensors"),
        Resource::Sensor(name) => {
            path.push_str("/sensors/");
            path.push_str(&urlencoding::encode(name));
        }
        Resource::Lan { channel } => push_lan(&mut path, channel),
        Resource::LanAlert { channel } => {
            push_lan(&mut path, channel);
            path.push_str("/alert");
        }
        Resource::Sel => path.push_str("/sel"),
        Resource::SelTime => path.push_str("/sel/time"),
        Resource::SelRecords { extended } => {
            path.push_str("/sel/records");
            if let Some(flag) = extended {
                path.push_str("?extended=");
                path.push_str(bool_token(flag));
            }
        }
        Resource::SelRecord(id) => {
            let _ = write!(path, "/sel/records/{id}");
        }
    }
    path
}

fn push_lan(path: &mut String, channel: Option<u8>) {
    path.push_str("/lan");
    if let Some(channel) = channel {
        let _ = write!(path, "/{channel}");
    }
}
