use serde_json::{Value, json};

use crate::answers::OptionValue;
use crate::progress::Progress;
use crate::spec::question::QuestionSpec;
use crate::summary::Summary;

pub const SUMMARY_TITLE: &str = "SELF-HELP LEGAL CLINIC — ONTARIO WILLS (STUDENT GUIDE)";
pub const DISCLAIMER: &str = "Reminder: Educational only — not legal advice.";

/// Plain-text export of a summary: path, checklist, risks, storage, then the disclaimer.
pub fn render_text(summary: &Summary) -> String {
    let mut lines = vec![
        SUMMARY_TITLE.to_string(),
        String::new(),
        "RECOMMENDED PATH".to_string(),
        format!("- {}", summary.route.headline),
    ];
    lines.extend(summary.route.advice.iter().map(|line| format!("  • {line}")));

    push_section(&mut lines, "EXECUTION CHECKLIST", &summary.checklist);
    push_section(&mut lines, "RISK FLAGS", &summary.risks);
    push_section(&mut lines, "STORAGE PLAN", &summary.storage);

    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());
    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.extend(items.iter().map(|item| format!("- {item}")));
}

/// Render the summary as a structured JSON value.
pub fn render_json(summary: &Summary, progress: Option<&Progress>) -> Value {
    let flags = summary
        .route
        .flags
        .iter()
        .map(|flag| flag.as_str())
        .collect::<Vec<_>>();
    let status = if progress.is_some() {
        "complete"
    } else {
        "derived"
    };
    let mut value = json!({
        "status": status,
        "route": {
            "kind": summary.route.kind.as_str(),
            "headline": summary.route.headline,
            "advice": summary.route.advice,
            "flags": flags,
        },
        "checklist": summary.checklist,
        "risks": summary.risks,
        "storage": summary.storage,
        "disclaimer": DISCLAIMER,
    });
    if let Some(progress) = progress {
        value["progress"] = json!({
            "position": progress.position,
            "total": progress.total,
            "percent": progress.percent,
        });
    }
    value
}

/// Render one question as a prompt block for text frontends.
pub fn render_question_text(
    question: &QuestionSpec,
    selected: Option<&OptionValue>,
    progress: &Progress,
) -> String {
    let mut lines = vec![format!(
        "Question {} of {} ({}%)",
        progress.position, progress.total, progress.percent
    )];
    lines.push(question.title.clone());
    if !question.subtitle.is_empty() {
        lines.push(question.subtitle.clone());
    }
    for (idx, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(&option.value) {
            "(*)"
        } else {
            "( )"
        };
        lines.push(format!("  {marker} {}. {}", idx + 1, option.label));
        if !option.hint.is_empty() {
            lines.push(format!("        {}", option.hint));
        }
    }
    lines.join("\n")
}
