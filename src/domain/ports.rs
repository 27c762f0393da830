use crate::domain::model::{CalculationRecord, Domain, Identity, Reading};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 將原始輸入轉成數字總和的計分規則，每個領域各一個
pub trait Calculator: Send + Sync {
    fn domain(&self) -> Domain;

    /// 未化簡的總和；不符合計分規則的字元貢獻 0
    fn score(&self, input: &str) -> u64;
}

pub trait CallerVerifier: Send + Sync {
    /// `authorization` 為原始的 Authorization 標頭值
    fn verify_caller(&self, authorization: Option<&str>) -> Result<Identity>;
}

#[async_trait]
pub trait CalculationRecorder: Send + Sync {
    async fn record_calculation(&self, identity: &Identity, reading: &Reading) -> Result<()>;
    async fn history(&self, identity: &Identity) -> Result<Vec<CalculationRecord>>;
}
