/// Alert reporting core - pure domain types for the branch-level scan
///
/// Nothing in this module performs I/O. Network access and report output
/// happen behind the outbound ports; these types only describe scan scope,
/// resolved targets and the rows of the final report.
pub mod domain;
