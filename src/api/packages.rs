//! Super Offer Package Endpoints

use super::{get_json, post_json, put_json, ApiError};
use crate::models::{
    AuditEntry, AuditTrailResponse, PackageDraft, PackageListResponse, PriceCalcRequest,
    PriceCalcResponse, SuperOfferPackage, VersionEntry, VersionHistoryResponse,
};

pub async fn list_packages() -> Result<Vec<SuperOfferPackage>, ApiError> {
    let resp: PackageListResponse = get_json("super-packages").await?;
    Ok(resp.packages)
}

pub async fn get_package(id: &str) -> Result<SuperOfferPackage, ApiError> {
    get_json(&format!("super-packages/{}", id)).await
}

pub async fn create_package(draft: &PackageDraft) -> Result<SuperOfferPackage, ApiError> {
    post_json("super-packages", draft).await
}

pub async fn update_package(id: &str, draft: &PackageDraft) -> Result<SuperOfferPackage, ApiError> {
    put_json(&format!("super-packages/{}", id), draft).await
}

/// Tiered price for a party/stay combination; may come back ON_REQUEST
pub async fn calculate_price(request: &PriceCalcRequest) -> Result<PriceCalcResponse, ApiError> {
    post_json("super-packages/calculate-price", request).await
}

pub async fn package_version_history(id: &str) -> Result<Vec<VersionEntry>, ApiError> {
    let resp: VersionHistoryResponse =
        get_json(&format!("super-packages/{}/version-history", id)).await?;
    Ok(resp.versions)
}

pub async fn package_audit_trail(id: &str) -> Result<Vec<AuditEntry>, ApiError> {
    let resp: AuditTrailResponse = get_json(&format!("super-packages/{}/audit-trail", id)).await?;
    Ok(resp.entries)
}

/// Restores the package to an earlier snapshot and returns the new head
pub async fn restore_package_version(id: &str, version: u32) -> Result<SuperOfferPackage, ApiError> {
    post_json(&format!("super-packages/{}/versions/{}", id, version), &()).await
}
