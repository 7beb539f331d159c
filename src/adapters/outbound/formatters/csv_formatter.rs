use crate::alert_reporting::domain::ReportRow;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// CsvFormatter adapter for serializing report rows (RFC 4180)
///
/// Two variants share one implementation: the plain CSV report, and the
/// spreadsheet variant where repository and branch cells carry `=HYPERLINK`
/// formulas so they open the web UI when the file lands in Excel.
pub struct CsvFormatter {
    spreadsheet_links: bool,
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self {
            spreadsheet_links: false,
        }
    }

    pub fn with_spreadsheet_links() -> Self {
        Self {
            spreadsheet_links: true,
        }
    }

    fn link_cell(&self, url: &str, label: &str) -> String {
        if self.spreadsheet_links {
            hyperlink_formula(url, label)
        } else {
            label.to_string()
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, rows: &[ReportRow]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(vec![]);

        writer.write_record(ReportRow::HEADERS)?;

        for row in rows {
            writer.write_record(&[
                row.project.clone(),
                self.link_cell(&row.repository_url, &row.repository),
                row.repository_url.clone(),
                self.link_cell(&row.branch_url, &row.branch),
                row.branch_url.clone(),
                row.critical.to_string(),
                row.high.to_string(),
                row.medium.to_string(),
                row.low.to_string(),
                row.enabled_display(),
                row.alert_data.to_string(),
                row.last_committer.clone(),
                row.last_commit_date.clone(),
            ])?;
        }

        let bytes = writer.into_inner()?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Excel-style HYPERLINK formula. Embedded double quotes are doubled, the
/// quoting scheme spreadsheet formulas use.
fn hyperlink_formula(url: &str, label: &str) -> String {
    format!(
        "=HYPERLINK(\"{}\",\"{}\")",
        url.replace('"', "\"\""),
        label.replace('"', "\"\"")
    )
}
