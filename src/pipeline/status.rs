use crate::report::{AvailableDependency, Dependency};

/// Reasons are clipped to this many lines in generated comments.
const REASON_LINE_LIMIT: usize = 4;

/// Coarse update status, used by the check workflow to group output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Exceeded,
    Rejected,
    Outdated,
    UpToDate,
}

impl StatusKind {
    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Exceeded => "exceeded",
            StatusKind::Rejected => "rejected",
            StatusKind::Outdated => "outdated",
            StatusKind::UpToDate => "up-to-date",
        }
    }
}

struct StatusRule {
    kind: StatusKind,
    applies: fn(&Dependency) -> bool,
    format: fn(&Dependency) -> String,
}

/// Annotation rules in priority order; the first rule that applies wins.
/// Anything no rule claims is up to date.
const RULES: &[StatusRule] = &[
    StatusRule {
        kind: StatusKind::Exceeded,
        applies: has_latest,
        format: format_exceeded,
    },
    StatusRule {
        kind: StatusKind::Rejected,
        applies: has_reason,
        format: format_rejected,
    },
    StatusRule {
        kind: StatusKind::Outdated,
        applies: has_available,
        format: format_available,
    },
];

const UP_TO_DATE: StatusRule = StatusRule {
    kind: StatusKind::UpToDate,
    applies: |_| true,
    format: |_| "up-to-date".to_string(),
};

/// Human-readable status comment for one dependency. Pure documentation
/// text; never feeds naming or values.
pub fn annotate(dependency: &Dependency) -> String {
    (rule_for(dependency).format)(dependency)
}

/// Status category for one dependency, following the same priority order as
/// `annotate`.
pub fn classify(dependency: &Dependency) -> StatusKind {
    rule_for(dependency).kind
}

fn rule_for(dependency: &Dependency) -> &'static StatusRule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(dependency))
        .unwrap_or(&UP_TO_DATE)
}

fn has_latest(dependency: &Dependency) -> bool {
    non_blank(&dependency.latest).is_some()
}

fn has_reason(dependency: &Dependency) -> bool {
    non_blank(&dependency.reason).is_some()
}

fn has_available(dependency: &Dependency) -> bool {
    dependency.available.is_some()
}

fn format_exceeded(dependency: &Dependency) -> String {
    format!(
        "exceeds the version found: {}",
        non_blank(&dependency.latest).unwrap_or_default()
    )
}

fn format_rejected(dependency: &Dependency) -> String {
    let reason = dependency.reason.as_deref().unwrap_or_default();
    let lines: Vec<&str> = reason.lines().collect();

    let mut annotation = String::from("error: ");
    annotation.push_str(&lines[..lines.len().min(REASON_LINE_LIMIT)].join("\n"));
    if lines.len() > REASON_LINE_LIMIT {
        annotation.push_str("\n(...)");
    }
    annotation
}

fn format_available(dependency: &Dependency) -> String {
    describe_available(&dependency.available.clone().unwrap_or_default())
}

fn describe_available(available: &AvailableDependency) -> String {
    if let Some(release) = non_blank(&available.release) {
        format!("available: release={release}")
    } else if let Some(milestone) = non_blank(&available.milestone) {
        format!("available: milestone={milestone}")
    } else if let Some(integration) = non_blank(&available.integration) {
        format!("available: integration={integration}")
    } else {
        format!("available: {available:?}")
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
