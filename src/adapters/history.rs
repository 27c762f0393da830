use crate::domain::model::{CalculationRecord, Identity, Reading};
use crate::domain::ports::CalculationRecorder;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

pub const DEFAULT_MAX_RECORDS_PER_CALLER: usize = 100;

/// 行程內的計算歷史，依呼叫者分開保存，超過上限時丟棄最舊的紀錄
#[derive(Debug)]
pub struct InMemoryHistory {
    records: RwLock<HashMap<String, VecDeque<CalculationRecord>>>,
    next_id: AtomicU64,
    max_records_per_caller: usize,
}

impl InMemoryHistory {
    pub fn new(max_records_per_caller: usize) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            max_records_per_caller,
        }
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RECORDS_PER_CALLER)
    }
}

#[async_trait]
impl CalculationRecorder for InMemoryHistory {
    async fn record_calculation(&self, identity: &Identity, reading: &Reading) -> Result<()> {
        let record = CalculationRecord {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            subject: identity.subject.clone(),
            domain: reading.domain,
            input: reading.input.clone(),
            destiny_number: reading.destiny_number,
            interpretation: reading.interpretation.to_string(),
            created_at: Utc::now(),
        };

        let mut records = self.records.write().await;
        let entries = records.entry(identity.subject.clone()).or_default();
        entries.push_back(record);
        while entries.len() > self.max_records_per_caller {
            entries.pop_front();
        }

        tracing::debug!(
            subject = %identity.subject,
            stored = entries.len(),
            "Recorded calculation"
        );
        Ok(())
    }

    async fn history(&self, identity: &Identity) -> Result<Vec<CalculationRecord>> {
        let records = self.records.read().await;
        Ok(records
            .get(&identity.subject)
            .map(|entries| entries.iter().rev().cloned().collect())
            .unwrap_or_default())
    }
}

/// 停用歷史紀錄時使用
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecorder;

#[async_trait]
impl CalculationRecorder for NoopRecorder {
    async fn record_calculation(&self, _identity: &Identity, _reading: &Reading) -> Result<()> {
        Ok(())
    }

    async fn history(&self, _identity: &Identity) -> Result<Vec<CalculationRecord>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::NumerologyEngine;

    #[tokio::test]
    async fn test_history_is_per_caller_and_newest_first() {
        let history = InMemoryHistory::default();
        let engine = NumerologyEngine::new();
        let alice = Identity::new("alice");
        let bob = Identity::new("bob");

        history
            .record_calculation(&alice, &engine.compute_name("Alice"))
            .await
            .unwrap();
        history
            .record_calculation(&alice, &engine.compute_mobile("9876543210"))
            .await
            .unwrap();
        history
            .record_calculation(&bob, &engine.compute_vehicle("KA01AB1234"))
            .await
            .unwrap();

        let records = history.history(&alice).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].input, "9876543210");
        assert_eq!(records[1].input, "Alice");
        assert!(records[0].id > records[1].id);

        assert_eq!(history.history(&bob).await.unwrap().len(), 1);
        assert!(history
            .history(&Identity::new("carol"))
            .await
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_history_drops_oldest_beyond_limit() {
        tokio_test::block_on(async {
            let history = InMemoryHistory::new(2);
            let engine = NumerologyEngine::new();
            let caller = Identity::new("42");

            for name in ["One", "Two", "Three"] {
                history
                    .record_calculation(&caller, &engine.compute_name(name))
                    .await
                    .unwrap();
            }

            let inputs: Vec<String> = history
                .history(&caller)
                .await
                .unwrap()
                .into_iter()
                .map(|r| r.input)
                .collect();
            assert_eq!(inputs, vec!["Three".to_string(), "Two".to_string()]);
        });
    }

    #[tokio::test]
    async fn test_noop_recorder_keeps_nothing() {
        let recorder = NoopRecorder;
        let caller = Identity::new("42");
        recorder
            .record_calculation(&caller, &NumerologyEngine::new().compute_name("A"))
            .await
            .unwrap();
        assert!(recorder.history(&caller).await.unwrap().is_empty());
    }
}
