//! DNS record related type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A resource record within a zone.
///
/// The parent zone name is not part of the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DomainRecord {
    pub record_id: String,
    /// Host label (`www`, `@`, ...)
    pub rr: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
    /// Registrar literal, `ENABLE` or `DISABLE`
    pub status: String,
    pub locked: bool,
    pub line: String,
    pub priority: i64,
    pub ttl: i64,
}

/// Record status predicate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RecordStatus {
    Enable,
    Disable,
}

impl RecordStatus {
    /// The literal the registrar accepts as a filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enable => "Enable",
            Self::Disable => "Disable",
        }
    }

    /// Whether a record's reported status matches. The registrar reports
    /// `ENABLE` / `DISABLE`, so the comparison ignores case.
    #[must_use]
    pub fn matches(self, reported: &str) -> bool {
        reported.eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = CoreError;

    /// Accepts exactly `Enable` or `Disable`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Enable" => Ok(Self::Enable),
            "Disable" => Ok(Self::Disable),
            other => Err(CoreError::ValidationError(format!(
                "status must be Enable or Disable, got '{other}'"
            ))),
        }
    }
}

/// Options for listing endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Page size used while walking the remote pages. `None` takes the
    /// endpoint default.
    pub page_size: Option<u32>,
}

impl ListOptions {
    #[must_use]
    pub const fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: Some(page_size),
        }
    }
}

/// Options for [`DnsService::search`](crate::services::DnsService::search).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Zone to search (required)
    pub domain_name: String,
    /// Keep only the record with this ID
    pub record_id: Option<String>,
    /// Host label; without it the search returns nothing
    pub rr: Option<String>,
    /// Exact record type, sent to the registrar
    pub record_type: Option<String>,
    /// Keep only records in this status
    pub status: Option<RecordStatus>,
    pub page_size: Option<u32>,
}

impl SearchOptions {
    #[must_use]
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rr(mut self, rr: impl Into<String>) -> Self {
        self.rr = Some(rr.into());
        self
    }

    #[must_use]
    pub fn with_record_id(mut self, record_id: impl Into<String>) -> Self {
        self.record_id = Some(record_id.into());
        self
    }

    #[must_use]
    pub fn with_record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    #[must_use]
    pub const fn with_status(mut self, status: RecordStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}
