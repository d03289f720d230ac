use crate::core::{OpportunityRecord, Pipeline};
use crate::utils::error::{OpportunityError, Result};
use std::time::Instant;
use tokio::sync::Mutex;

/// Runs a pipeline one invocation at a time.
///
/// A call made while another is still in flight fails with
/// [`OpportunityError::Busy`] instead of queueing.
pub struct SearchEngine<P: Pipeline> {
    pipeline: P,
    in_flight: Mutex<()>,
}

impl<P: Pipeline> SearchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            in_flight: Mutex::new(()),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<Vec<OpportunityRecord>> {
        let _guard = self.in_flight.try_lock().map_err(|_| OpportunityError::Busy)?;
        let started = Instant::now();

        tracing::info!("Searching for open opportunities...");

        // Extract
        let fragments = self.pipeline.extract().await?;
        tracing::info!("Found {} open entries", fragments.len());

        // Filter + parse
        let records = self.pipeline.transform(fragments).await?;
        tracing::info!("{} entries matched the filters", records.len());

        // Order
        let ordered = self.pipeline.order(records).await?;
        tracing::debug!("Search finished in {:?}", started.elapsed());

        Ok(ordered)
    }
}
