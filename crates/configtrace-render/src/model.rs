#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Github,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub group_by_user_code: bool,
    pub show_failures: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDocumentation {
    pub id: String,
    pub anchor: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableProblem {
    /// Rendered provenance chain.
    pub trace: String,
    /// Rendered structured message.
    pub message: String,
    pub user_code: String,
    pub documentation: Option<RenderableDocumentation>,
    /// Exception and stack trace text, one entry per block.
    pub failures: Vec<String>,
    pub fingerprint: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub problems: Vec<RenderableProblem>,
    pub problems_total: u32,
    pub truncated_reason: Option<String>,
}
