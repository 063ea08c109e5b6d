//! A renderer-facing projection of the report, decoupled from the wire types.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    pub path: String,
    pub line: Option<u32>,
    pub col: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub check_id: String,
    pub code: String,
    pub message: String,
    pub location: Option<RenderableLocation>,
    pub help: Option<String>,
}

impl RenderableFinding {
    /// Scope label for summary lines: the file path, or `STRUCTURE` for
    /// repo-level findings.
    pub fn scope(&self) -> &str {
        self.location
            .as_ref()
            .map(|l| l.path.as_str())
            .unwrap_or("STRUCTURE")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableData {
    pub files_scanned: u32,
    pub findings_total: u32,
    pub findings_emitted: u32,
    pub truncated_reason: Option<String>,
    /// Discovery-ordered scanned paths; drives the per-file section.
    pub scanned_files: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}
