//! Domain name related type definitions

use serde::{Deserialize, Serialize};

/// A zone hosted under the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Domain {
    /// Zone name
    pub domain_name: String,
    /// Registrar-assigned zone ID
    pub domain_id: String,
    /// ASCII-compatible form of an internationalized name
    pub puny_code: String,
    /// Whether the name is also registered through Aliyun
    pub ali_domain: bool,
}
