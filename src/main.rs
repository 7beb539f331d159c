use ado_alert_report::adapters::outbound::console::StderrProgressReporter;
use ado_alert_report::adapters::outbound::formatters::CsvFormatter;
use ado_alert_report::adapters::outbound::network::{DevOpsClient, RestClient};
use ado_alert_report::adapters::outbound::sink::detect_sink;
use ado_alert_report::application::dto::ScanRequest;
use ado_alert_report::application::use_cases::ScanAlertsUseCase;
use ado_alert_report::cli::Args;
use ado_alert_report::config::AppConfig;
use ado_alert_report::ports::outbound::{ReportFormatter, ReportSink};
use ado_alert_report::shared::error::ExitCode;
use ado_alert_report::shared::security::sanitize_report_file_name;
use ado_alert_report::shared::Result;
use std::process;

fn main() {
    // clap exits with code 2 on its own for argument errors.
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Resolve configuration once, before any network activity. A missing
    // credential fails here.
    let config = AppConfig::resolve(&args)?;

    // Create adapters (Dependency Injection)
    let rest = RestClient::new(config.credential.clone())?;
    let api = DevOpsClient::new(&config.organization_url, rest);
    let progress = StderrProgressReporter::new();
    let sink: Box<dyn ReportSink> = detect_sink();

    // The API client implements all four data-source ports.
    let use_case = ScanAlertsUseCase::new(api.clone(), api.clone(), api.clone(), api, progress);

    let request = ScanRequest::new(
        config.scope,
        config.organization_url.clone(),
        config.project.clone(),
        config.repository.clone(),
    );

    let report = use_case.execute(&request)?;

    if report.is_empty() {
        // Nothing resolved is a normal outcome, not an error.
        eprintln!("ℹ️  No alerts found - no report was written.");
        sink.complete();
        return Ok(());
    }

    let formatter = if config.spreadsheet_links {
        CsvFormatter::with_spreadsheet_links()
    } else {
        CsvFormatter::new()
    };
    let content = formatter.format(report.rows())?;

    let file_name = sanitize_report_file_name(&config.report_file_name)?;
    let path = sink.write(&file_name, &content)?;
    sink.announce(&path);
    sink.complete();

    Ok(())
}
