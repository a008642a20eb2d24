use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Pagination parameters for the zone listing.
///
/// Pages are 1-indexed. The default is `page = 1, page_size = 20`, matching the
/// registrar's own default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

/// One page of a remote listing.
///
/// `total_count` is the registrar-declared size of the whole result set, not
/// the length of `items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page, in registrar order.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response, computing [`has_more`](Self::has_more).
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u32) -> Self {
        let has_more = u64::from(page) * u64::from(page_size) < u64::from(total_count);
        Self {
            items,
            page,
            page_size,
            total_count,
            has_more,
        }
    }
}

// ============ Record queries ============

/// A single page request against a zone's record set.
///
/// `record_type` and `status` are sent to the registrar, which filters natively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPageQuery {
    /// Zone name, e.g. `example.com`.
    pub domain_name: String,
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of records per page.
    pub page_size: u32,
    /// Exact record type filter (`A`, `CNAME`, ...).
    pub record_type: Option<String>,
    /// Record status filter, `Enable` or `Disable`.
    pub status: Option<String>,
}

impl RecordPageQuery {
    pub fn new(domain_name: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            domain_name: domain_name.into(),
            page,
            page_size,
            record_type: None,
            status: None,
        }
    }

    #[must_use]
    pub fn with_record_type(mut self, record_type: Option<String>) -> Self {
        self.record_type = record_type;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = status;
        self
    }
}

/// Lookup of every record published under one fully-qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDomainQuery {
    /// Fully-qualified label, e.g. `www.example.com`.
    pub sub_domain: String,
    /// Maximum number of records returned.
    pub page_size: u32,
    /// Exact record type filter.
    pub record_type: Option<String>,
}

// ============ Native entities ============

/// A zone exactly as the registrar reports it.
///
/// Every field is optional because the registrar omits fields freely; callers
/// project this into their own stable shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteDomain {
    #[serde(rename = "DomainId")]
    pub domain_id: Option<String>,
    #[serde(rename = "DomainName")]
    pub domain_name: Option<String>,
    /// ASCII-compatible encoding of an internationalized name.
    #[serde(rename = "PunyCode")]
    pub puny_code: Option<String>,
    /// Whether the domain is also registered through Aliyun.
    #[serde(rename = "AliDomain")]
    pub ali_domain: Option<bool>,
    #[serde(rename = "RecordCount")]
    pub record_count: Option<u64>,
}

/// A resource record exactly as the registrar reports it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteRecord {
    #[serde(rename = "RecordId")]
    pub record_id: Option<String>,
    /// Host label within the zone (`www`, `@`, ...).
    #[serde(rename = "RR")]
    pub rr: Option<String>,
    #[serde(rename = "Type")]
    pub record_type: Option<String>,
    #[serde(rename = "Value")]
    pub value: Option<String>,
    /// `ENABLE` or `DISABLE`.
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "Locked")]
    pub locked: Option<bool>,
    /// Resolution line, `default` unless smart routing is configured.
    #[serde(rename = "Line")]
    pub line: Option<String>,
    #[serde(rename = "Priority")]
    pub priority: Option<i64>,
    #[serde(rename = "TTL")]
    pub ttl: Option<i64>,
    /// Owning zone. Only the single-record lookup reports it.
    #[serde(rename = "DomainName")]
    pub domain_name: Option<String>,
}
