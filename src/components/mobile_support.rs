use crate::processor::stub_processor;

stub_processor!(
    /// Offline-mode synchronisation hook.
    OfflineSync,
    "offline_sync"
);

stub_processor!(MobileGateway, "mobile_gateway");
