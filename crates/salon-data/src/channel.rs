//! # IPC Channel Vocabulary
//!
//! The fixed set of channel names agreed with the host process. Both sides
//! refer to channels through [`Channel`] so a typo cannot silently route to
//! nowhere.
//!
//! ## Naming
//! `<entity>:<operation>`, camelCase operation, e.g. `appointment:getAllByCustomerId`.

use std::fmt;
use std::str::FromStr;

/// A named IPC channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    CustomerGetAll,
    CustomerGetById,
    CustomerCreate,
    CustomerUpdate,
    CustomerDelete,
    AppointmentGetAll,
    AppointmentGetAllByCustomerId,
    AppointmentGetById,
    AppointmentCreate,
    AppointmentUpdate,
    AppointmentDelete,
    StaffGetAll,
    ServiceGetAll,
}

impl Channel {
    /// Every channel, in declaration order.
    pub const ALL: [Channel; 13] = [
        Channel::CustomerGetAll,
        Channel::CustomerGetById,
        Channel::CustomerCreate,
        Channel::CustomerUpdate,
        Channel::CustomerDelete,
        Channel::AppointmentGetAll,
        Channel::AppointmentGetAllByCustomerId,
        Channel::AppointmentGetById,
        Channel::AppointmentCreate,
        Channel::AppointmentUpdate,
        Channel::AppointmentDelete,
        Channel::StaffGetAll,
        Channel::ServiceGetAll,
    ];

    /// Returns the wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::CustomerGetAll => "customer:getAll",
            Channel::CustomerGetById => "customer:getById",
            Channel::CustomerCreate => "customer:create",
            Channel::CustomerUpdate => "customer:update",
            Channel::CustomerDelete => "customer:delete",
            Channel::AppointmentGetAll => "appointment:getAll",
            Channel::AppointmentGetAllByCustomerId => "appointment:getAllByCustomerId",
            Channel::AppointmentGetById => "appointment:getById",
            Channel::AppointmentCreate => "appointment:create",
            Channel::AppointmentUpdate => "appointment:update",
            Channel::AppointmentDelete => "appointment:delete",
            Channel::StaffGetAll => "staff:getAll",
            Channel::ServiceGetAll => "service:getAll",
        }
    }
}

impl AsRef<str> for Channel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown channel: {}", s))
    }
}
