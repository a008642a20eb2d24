//! Registrar entities → service types

use dns_update_provider::{RemoteDomain, RemoteRecord};

use crate::types::{Domain, DomainRecord};

impl From<RemoteDomain> for Domain {
    fn from(d: RemoteDomain) -> Self {
        Self {
            domain_name: d.domain_name.unwrap_or_default(),
            domain_id: d.domain_id.unwrap_or_default(),
            puny_code: d.puny_code.unwrap_or_default(),
            ali_domain: d.ali_domain.unwrap_or_default(),
        }
    }
}

impl From<RemoteRecord> for DomainRecord {
    fn from(r: RemoteRecord) -> Self {
        Self {
            record_id: r.record_id.unwrap_or_default(),
            rr: r.rr.unwrap_or_default(),
            record_type: r.record_type.unwrap_or_default(),
            value: r.value.unwrap_or_default(),
            status: r.status.unwrap_or_default(),
            locked: r.locked.unwrap_or_default(),
            line: r.line.unwrap_or_default(),
            priority: r.priority.unwrap_or_default(),
            ttl: r.ttl.unwrap_or_default(),
        }
    }
}

pub(crate) fn project_all<S, T: From<S>>(items: Vec<S>) -> Vec<T> {
    items.into_iter().map(T::from).collect()
}
