//! Closed option sets that travel as numeric codes on the wire
//!
//! Each enum serializes to its code and only deserializes from one of its
//! declared codes; anything else is a decoding error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a service request originated (`srsource`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ServiceRequestSource {
    Android,
    IPhone,
    Other,
    Default,
}

impl ServiceRequestSource {
    pub const ALL: [ServiceRequestSource; 4] = [
        ServiceRequestSource::Android,
        ServiceRequestSource::IPhone,
        ServiceRequestSource::Other,
        ServiceRequestSource::Default,
    ];

    pub const fn code(self) -> u32 {
        match self {
            Self::Android => 614_110_000,
            Self::IPhone => 614_110_001,
            Self::Other => 614_110_002,
            Self::Default => 614_110_003,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::IPhone => "iphone",
            Self::Other => "other",
            Self::Default => "default",
        }
    }
}

impl From<ServiceRequestSource> for u32 {
    fn from(value: ServiceRequestSource) -> Self {
        value.code()
    }
}

impl TryFrom<u32> for ServiceRequestSource {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == value)
            .ok_or_else(|| format!("unknown ServiceRequestSource code: {value}"))
    }
}

impl fmt::Display for ServiceRequestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When the reported problem occurs (`whattimeofdaydoestheproblemoccur`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeOfDay {
    /// 9 AM to 12 PM
    Morning,
    /// 12 PM to 5 PM
    Afternoon,
    /// 5 PM to 9 PM
    Evening,
    /// 9 PM to 12 AM
    Night,
    /// 12 AM to 9 AM
    Overnight,
    AllTheTime,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 6] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
        TimeOfDay::Overnight,
        TimeOfDay::AllTheTime,
    ];

    pub const fn code(self) -> u32 {
        match self {
            Self::Morning => 614_110_000,
            Self::Afternoon => 614_110_001,
            Self::Evening => 614_110_002,
            Self::Night => 614_110_003,
            Self::Overnight => 614_110_004,
            Self::AllTheTime => 614_110_005,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "09:00-12:00",
            Self::Afternoon => "12:00-17:00",
            Self::Evening => "17:00-21:00",
            Self::Night => "21:00-00:00",
            Self::Overnight => "00:00-09:00",
            Self::AllTheTime => "all the time",
        }
    }
}

impl From<TimeOfDay> for u32 {
    fn from(value: TimeOfDay) -> Self {
        value.code()
    }
}

impl TryFrom<u32> for TimeOfDay {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == value)
            .ok_or_else(|| format!("unknown TimeOfDay code: {value}"))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle state of a service request, as reported by the lookup endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ServiceRequestStatus {
    Open,
    InProgress,
    Cancelled,
    Closed,
}

impl ServiceRequestStatus {
    pub const ALL: [ServiceRequestStatus; 4] = [
        ServiceRequestStatus::Open,
        ServiceRequestStatus::InProgress,
        ServiceRequestStatus::Cancelled,
        ServiceRequestStatus::Closed,
    ];

    pub const fn code(self) -> u32 {
        match self {
            Self::Open => 614_110_000,
            Self::InProgress => 614_110_001,
            Self::Cancelled => 614_110_002,
            Self::Closed => 614_110_003,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in progress",
            Self::Cancelled => "cancelled",
            Self::Closed => "closed",
        }
    }

    /// No further updates are expected once a request reaches this state
    pub fn is_final(self) -> bool {
        matches!(self, Self::Cancelled | Self::Closed)
    }
}

impl From<ServiceRequestStatus> for u32 {
    fn from(value: ServiceRequestStatus) -> Self {
        value.code()
    }
}

impl TryFrom<u32> for ServiceRequestStatus {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == value)
            .ok_or_else(|| format!("unknown ServiceRequestStatus code: {value}"))
    }
}

impl fmt::Display for ServiceRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
