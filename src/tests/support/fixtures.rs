use std::sync::Arc;

use crate::modules::portfolio::adapter::outgoing::MemoryKeyValueStore;
use crate::modules::portfolio::application::domain::entities::PortfolioData;
use crate::modules::portfolio::application::store::PortfolioStore;
use crate::tests::support::stubs::FailingKeyValueStore;

/// Smallest byte string the upload policy recognizes as a PNG.
pub const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];

pub fn memory_store(data: PortfolioData) -> Arc<PortfolioStore> {
    Arc::new(PortfolioStore::with_data(
        Arc::new(MemoryKeyValueStore::new()),
        data,
    ))
}

/// Reads succeed with the default content; every write fails.
pub fn failing_store() -> Arc<PortfolioStore> {
    Arc::new(PortfolioStore::with_data(
        Arc::new(FailingKeyValueStore),
        PortfolioData::default(),
    ))
}
