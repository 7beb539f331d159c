mod local_dir_sink;
mod pipeline_sink;

pub use local_dir_sink::LocalDirSink;
pub use pipeline_sink::PipelineSink;

use crate::ports::outbound::ReportSink;

/// Selects the report sink for the current execution environment.
///
/// Returns the pipeline sink when the process runs inside an Azure Pipelines
/// job with an artifact staging directory, and the working-directory sink
/// everywhere else. Called once at startup; nothing downstream inspects the
/// environment again.
pub fn detect_sink() -> Box<dyn ReportSink> {
    match PipelineSink::from_env() {
        Some(sink) => Box::new(sink),
        None => Box::new(LocalDirSink::current_dir()),
    }
}
