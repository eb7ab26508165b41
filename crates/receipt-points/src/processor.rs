//! The receipt processor: submit receipts and look up their points.
//!
//! Brings together the structural validator, the points engine and a
//! [`Store`] behind the two operations the HTTP layer exposes.

use receipt_points_core::{score_receipt, Points, Receipt, ReceiptId, ReceiptValidator};
use receipt_points_store::{InsertResult, Store};
use tracing::{debug, error, info, warn};

use crate::error::{Result, ServiceError};

/// Configuration for the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Whether to validate receipts against the schema on submit.
    pub validate_on_submit: bool,
    /// How many identifiers to try before giving up on an insert.
    pub max_id_attempts: u32,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            validate_on_submit: true,
            max_id_attempts: 3,
        }
    }
}

/// Submits receipts and serves their points.
pub struct ReceiptProcessor<S: Store> {
    /// The storage backend.
    store: S,
    /// Compiled structural contract.
    validator: ReceiptValidator,
    /// Configuration.
    config: ProcessorConfig,
}

impl<S: Store> ReceiptProcessor<S> {
    /// Create a new processor.
    pub fn new(store: S, validator: ReceiptValidator, config: ProcessorConfig) -> Self {
        Self {
            store,
            validator,
            config,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the configuration.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Store a receipt under a fresh identifier and return the identifier.
    ///
    /// Identical documents submitted twice get two identifiers.
    pub async fn submit(&self, receipt: &Receipt) -> Result<ReceiptId> {
        if self.config.validate_on_submit {
            self.validator.validate(receipt)?;
        }

        for _ in 0..self.config.max_id_attempts {
            let id = ReceiptId::generate();
            match self.store.insert_receipt(&id, receipt).await? {
                InsertResult::Inserted => {
                    info!(%id, retailer = %receipt.retailer, items = receipt.items.len(), "receipt processed");
                    return Ok(id);
                }
                InsertResult::AlreadyExists => {
                    warn!(%id, "generated receipt id collided, retrying");
                }
            }
        }

        Err(ServiceError::IdsExhausted(self.config.max_id_attempts))
    }

    /// Look up points for an identifier given as text.
    ///
    /// Malformed identifiers are reported as `NotFound`, same as unknown ones.
    pub async fn get_points(&self, id: &str) -> Result<Points> {
        let id: ReceiptId = id
            .parse()
            .map_err(|_| ServiceError::NotFound(id.to_string()))?;
        self.get_points_by_id(&id).await
    }

    /// Look up points for an identifier.
    ///
    /// The first lookup scores the receipt and caches the result; later
    /// lookups return the cached value.
    pub async fn get_points_by_id(&self, id: &ReceiptId) -> Result<Points> {
        let record = self
            .store
            .get_record(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;

        if let Some(points) = record.points {
            debug!(%id, points, "points served from cache");
            return Ok(points);
        }

        let points = score_receipt(&record.receipt)
            .and_then(|breakdown| {
                let points = breakdown.total()?;
                debug!(%id, ?breakdown, points, "receipt scored");
                Ok(points)
            })
            .map_err(|source| {
                error!(%id, error = %source, "failed to score stored receipt");
                ServiceError::Computation { id: *id, source }
            })?;

        Ok(self.store.cache_points(id, points).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::{ReceiptBuilder, ValidationError};
    use receipt_points_store::MemoryStore;

    fn processor() -> ReceiptProcessor<MemoryStore> {
        ReceiptProcessor::new(
            MemoryStore::new(),
            ReceiptValidator::default(),
            ProcessorConfig::default(),
        )
    }

    fn simple_receipt() -> Receipt {
        ReceiptBuilder::new("Target")
            .date("2022-01-02")
            .time("13:13")
            .item("Pepsi - 12-oz", "1.25")
            .total("1.25")
            .build()
    }

    #[tokio::test]
    async fn test_submit_then_points() {
        let processor = processor();
        let id = processor.submit(&simple_receipt()).await.unwrap();

        assert_eq!(processor.get_points_by_id(&id).await.unwrap(), 31);
        assert_eq!(processor.get_points(&id.to_string()).await.unwrap(), 31);
    }

    #[tokio::test]
    async fn test_points_are_cached() {
        let processor = processor();
        let id = processor.submit(&simple_receipt()).await.unwrap();

        let first = processor.get_points_by_id(&id).await.unwrap();
        let record = processor.store().get_record(&id).await.unwrap().unwrap();
        assert_eq!(record.points, Some(first));

        let second = processor.get_points_by_id(&id).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_cached_value_is_returned_without_rescoring() {
        let processor = processor();
        let id = processor.submit(&simple_receipt()).await.unwrap();
        processor.store().cache_points(&id, 1234).await.unwrap();

        assert_eq!(processor.get_points_by_id(&id).await.unwrap(), 1234);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_lookups_agree() {
        let processor = std::sync::Arc::new(processor());
        let id = processor.submit(&simple_receipt()).await.unwrap();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let processor = processor.clone();
                tokio::spawn(async move { processor.get_points_by_id(&id).await.unwrap() })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap(), 31);
        }
        let record = processor.store().get_record(&id).await.unwrap().unwrap();
        assert_eq!(record.points, Some(31));
    }

    #[tokio::test]
    async fn test_same_document_gets_distinct_ids() {
        let processor = processor();
        let receipt = simple_receipt();

        let a = processor.submit(&receipt).await.unwrap();
        let b = processor.submit(&receipt).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(processor.store().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_ids_are_not_found() {
        let processor = processor();

        for id in ["DEADBEEF", "", "not-a-uuid"] {
            assert!(matches!(
                processor.get_points(id).await,
                Err(ServiceError::NotFound(_))
            ));
        }

        let never_submitted = ReceiptId::generate();
        assert!(matches!(
            processor.get_points(&never_submitted.to_string()).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_receipt_is_rejected() {
        let processor = processor();
        let mut receipt = simple_receipt();
        receipt.items.clear();

        assert!(matches!(
            processor.submit(&receipt).await,
            Err(ServiceError::Validation(ValidationError::TooFewItems { .. }))
        ));
        assert_eq!(processor.store().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unvalidated_garbage_is_a_computation_error() {
        let processor = ReceiptProcessor::new(
            MemoryStore::new(),
            ReceiptValidator::default(),
            ProcessorConfig {
                validate_on_submit: false,
                ..ProcessorConfig::default()
            },
        );
        let receipt = ReceiptBuilder::new("Target").total("not money").build();
        let id = processor.submit(&receipt).await.unwrap();

        assert!(matches!(
            processor.get_points_by_id(&id).await,
            Err(ServiceError::Computation { .. })
        ));
        let record = processor.store().get_record(&id).await.unwrap().unwrap();
        assert_eq!(record.points, None);
    }

    #[tokio::test]
    async fn test_zero_attempts_exhausts() {
        let processor = ReceiptProcessor::new(
            MemoryStore::new(),
            ReceiptValidator::default(),
            ProcessorConfig {
                max_id_attempts: 0,
                ..ProcessorConfig::default()
            },
        );

        assert!(matches!(
            processor.submit(&simple_receipt()).await,
            Err(ServiceError::IdsExhausted(0))
        ));
    }
}
