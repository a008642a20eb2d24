//! 阿里云 DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{DnsProvider, ErrorContext};
use crate::types::{
    PaginatedResponse, PaginationParams, RecordPageQuery, RemoteDomain, RemoteRecord,
    SubDomainQuery,
};

use super::types::{
    DescribeDomainRecordInfoRequest, DescribeDomainRecordsRequest, DescribeDomainsRequest,
    DescribeSubDomainRecordsRequest,
};
use super::{
    AliyunProvider, DescribeDomainRecordsResponse, DescribeDomainsResponse,
    DescribeSubDomainRecordsResponse,
};

#[async_trait]
impl DnsProvider for AliyunProvider {
    fn id(&self) -> &'static str {
        "aliyun"
    }

    async fn validate_credentials(&self) -> Result<bool> {
        let req = DescribeDomainsRequest {
            page_number: 1,
            page_size: 1,
        };

        match self
            .request::<DescribeDomainsResponse, _>("DescribeDomains", &req, ErrorContext::default())
            .await
        {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn list_domains(
        &self,
        params: &PaginationParams,
    ) -> Result<PaginatedResponse<RemoteDomain>> {
        let req = DescribeDomainsRequest {
            page_number: params.page,
            page_size: params.page_size,
        };

        let response: DescribeDomainsResponse = self
            .request("DescribeDomains", &req, ErrorContext::default())
            .await?;

        let total_count = response.total_count.unwrap_or(0);
        let domains = response
            .domains
            .and_then(|d| d.domain)
            .unwrap_or_default();

        Ok(PaginatedResponse::new(
            domains,
            params.page,
            params.page_size,
            total_count,
        ))
    }

    async fn list_records(
        &self,
        query: &RecordPageQuery,
    ) -> Result<PaginatedResponse<RemoteRecord>> {
        let req = DescribeDomainRecordsRequest {
            domain_name: query.domain_name.clone(),
            page_number: query.page,
            page_size: query.page_size,
            record_type: query.record_type.clone().filter(|t| !t.is_empty()),
            status: query.status.clone().filter(|s| !s.is_empty()),
        };

        let response: DescribeDomainRecordsResponse = self
            .request(
                "DescribeDomainRecords",
                &req,
                ErrorContext::for_domain(&query.domain_name),
            )
            .await?;

        let total_count = response.total_count.unwrap_or(0);
        Ok(PaginatedResponse::new(
            response.into_records(),
            query.page,
            query.page_size,
            total_count,
        ))
    }

    async fn list_sub_domain_records(&self, query: &SubDomainQuery) -> Result<Vec<RemoteRecord>> {
        let req = DescribeSubDomainRecordsRequest {
            sub_domain: query.sub_domain.clone(),
            page_number: 1,
            page_size: query.page_size,
            record_type: query.record_type.clone().filter(|t| !t.is_empty()),
        };

        let response: DescribeSubDomainRecordsResponse = self
            .request(
                "DescribeSubDomainRecords",
                &req,
                ErrorContext::for_domain(&query.sub_domain),
            )
            .await?;

        Ok(response.into_records())
    }

    async fn get_record(&self, record_id: &str) -> Result<RemoteRecord> {
        let req = DescribeDomainRecordInfoRequest {
            record_id: record_id.to_string(),
        };

        // DescribeDomainRecordInfo returns the record fields at the top level.
        self.request(
            "DescribeDomainRecordInfo",
            &req,
            ErrorContext::for_record(record_id),
        )
        .await
    }
}
