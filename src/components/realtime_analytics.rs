use crate::processor::stub_processor;

stub_processor!(
    /// Websocket fan-out point. No transport is attached.
    WebsocketServer,
    "websocket_server"
);

stub_processor!(
    /// Real-time aggregation point. Returns each payload as received.
    DataAggregator,
    "data_aggregator"
);
