/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports only: the seams the scan core uses to reach the
/// REST API, the console and the report destination. The CLI drives the use
/// case directly, so no inbound port layer is needed.
pub mod outbound;
