use async_trait::async_trait;

use crate::errors::ExinResult;

/// Delegated single-number extraction for regulatory text the regex
/// cascade could not resolve.
///
/// The collaborator is constrained to answer with a bare percentage or
/// "NA"; the extractor accepts only a well-formed leading number.
#[async_trait]
pub trait ITariffOracle: Send + Sync {
    /// Ask for the most relevant export-duty percent in `reference`.
    async fn extract_percent(
        &self,
        reference: &str,
        product: &str,
        country: Option<&str>,
    ) -> ExinResult<String>;
}
