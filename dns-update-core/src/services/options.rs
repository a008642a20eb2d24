//! Page-size resolution and validation

use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Query endpoints that carry their own page-size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListDomains,
    /// Whole-zone record listing
    ListRecords,
    Search,
    ByHostLabel,
    ByType,
    ByStatus,
}

impl Endpoint {
    pub const ALL: [Self; 6] = [
        Self::ListDomains,
        Self::ListRecords,
        Self::Search,
        Self::ByHostLabel,
        Self::ByType,
        Self::ByStatus,
    ];

    const fn index(self) -> usize {
        match self {
            Self::ListDomains => 0,
            Self::ListRecords => 1,
            Self::Search => 2,
            Self::ByHostLabel => 3,
            Self::ByType => 4,
            Self::ByStatus => 5,
        }
    }

    /// Key used in configuration files.
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::ListDomains => "list_domains",
            Self::ListRecords => "list_records",
            Self::Search => "search",
            Self::ByHostLabel => "by_rr",
            Self::ByType => "by_type",
            Self::ByStatus => "by_status",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Inclusive page-size range `1..=max` plus the value used when none is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeBounds {
    pub default: u32,
    pub max: u32,
}

impl PageSizeBounds {
    #[must_use]
    pub const fn new(default: u32, max: u32) -> Self {
        Self { default, max }
    }

    fn check(self, endpoint: Endpoint) -> CoreResult<Self> {
        if self.max == 0 || self.default == 0 || self.default > self.max {
            return Err(CoreError::ValidationError(format!(
                "invalid page size bounds for {endpoint}: default {} must lie in 1..={}",
                self.default, self.max
            )));
        }
        Ok(self)
    }
}

/// Per-endpoint page-size bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeTable {
    bounds: [PageSizeBounds; 6],
}

impl Default for PageSizeTable {
    fn default() -> Self {
        let mut bounds = [PageSizeBounds::new(20, 500); 6];
        bounds[Endpoint::ListDomains.index()] = PageSizeBounds::new(20, 100);
        bounds[Endpoint::ListRecords.index()] = PageSizeBounds::new(5000, 5000);
        Self { bounds }
    }
}

impl PageSizeTable {
    #[must_use]
    pub const fn bounds(&self, endpoint: Endpoint) -> PageSizeBounds {
        self.bounds[endpoint.index()]
    }

    /// Replace one endpoint's bounds. Rejects a zero maximum or a default
    /// outside `1..=max`.
    pub fn with_bounds(mut self, endpoint: Endpoint, bounds: PageSizeBounds) -> CoreResult<Self> {
        self.bounds[endpoint.index()] = bounds.check(endpoint)?;
        Ok(self)
    }

    /// Resolve a caller-supplied page size.
    ///
    /// `None` yields the endpoint default; any present value, `0` included,
    /// must lie in `1..=max`.
    pub fn resolve(&self, endpoint: Endpoint, requested: Option<u32>) -> CoreResult<u32> {
        let bounds = self.bounds(endpoint);
        match requested {
            None => Ok(bounds.default),
            Some(size) if (1..=bounds.max).contains(&size) => Ok(size),
            Some(_) => Err(CoreError::ValidationError(format!(
                "page_size must be between 1 and {}",
                bounds.max
            ))),
        }
    }

    /// [`resolve`](Self::resolve) for an unparsed query-string value.
    pub fn resolve_raw(&self, endpoint: Endpoint, raw: Option<&str>) -> CoreResult<u32> {
        self.resolve(endpoint, parse_page_size(raw)?)
    }
}

/// Parse a raw `page_size` query value. Absent or blank input is `None`.
pub fn parse_page_size(raw: Option<&str>) -> CoreResult<Option<u32>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| CoreError::ValidationError("page_size must be a valid integer".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_per_endpoint() {
        let table = PageSizeTable::default();
        assert_eq!(table.resolve(Endpoint::ListDomains, None).unwrap(), 20);
        assert_eq!(table.resolve(Endpoint::ListRecords, None).unwrap(), 5000);
        for endpoint in [
            Endpoint::Search,
            Endpoint::ByHostLabel,
            Endpoint::ByType,
            Endpoint::ByStatus,
        ] {
            assert_eq!(table.resolve(endpoint, None).unwrap(), 20);
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let table = PageSizeTable::default();
        assert_eq!(table.resolve(Endpoint::Search, Some(1)).unwrap(), 1);
        assert_eq!(table.resolve(Endpoint::Search, Some(500)).unwrap(), 500);
        assert_eq!(table.resolve(Endpoint::ListRecords, Some(5000)).unwrap(), 5000);
        assert_eq!(table.resolve(Endpoint::ListDomains, Some(100)).unwrap(), 100);
    }

    #[test]
    fn zero_and_oversize_rejected() {
        let table = PageSizeTable::default();
        for (endpoint, size) in [
            (Endpoint::Search, 0),
            (Endpoint::ByType, 501),
            (Endpoint::ListRecords, 5001),
            (Endpoint::ListDomains, 101),
        ] {
            let err = table.resolve(endpoint, Some(size)).unwrap_err();
            assert!(matches!(err, CoreError::ValidationError(_)), "{endpoint} {size}");
        }

        let err = table.resolve(Endpoint::ByStatus, Some(501)).unwrap_err();
        assert!(err.to_string().contains("between 1 and 500"));
    }

    #[test]
    fn raw_values() {
        let table = PageSizeTable::default();
        assert_eq!(table.resolve_raw(Endpoint::Search, None).unwrap(), 20);
        assert_eq!(table.resolve_raw(Endpoint::Search, Some("")).unwrap(), 20);
        assert_eq!(table.resolve_raw(Endpoint::Search, Some(" 50 ")).unwrap(), 50);
        for bad in ["abc", "-1", "1.5", "0"] {
            assert!(matches!(
                table.resolve_raw(Endpoint::Search, Some(bad)),
                Err(CoreError::ValidationError(_))
            ));
        }
    }

    #[test]
    fn overrides_are_checked() {
        let table = PageSizeTable::default()
            .with_bounds(Endpoint::ByType, PageSizeBounds::new(50, 200))
            .unwrap();
        assert_eq!(table.resolve(Endpoint::ByType, None).unwrap(), 50);
        assert!(table.resolve(Endpoint::ByType, Some(201)).is_err());
        assert_eq!(table.resolve(Endpoint::ByStatus, Some(500)).unwrap(), 500);

        assert!(
            PageSizeTable::default()
                .with_bounds(Endpoint::Search, PageSizeBounds::new(0, 10))
                .is_err()
        );
        assert!(
            PageSizeTable::default()
                .with_bounds(Endpoint::Search, PageSizeBounds::new(20, 10))
                .is_err()
        );
    }
}
