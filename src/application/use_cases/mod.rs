mod scan_alerts;

pub use scan_alerts::ScanAlertsUseCase;
