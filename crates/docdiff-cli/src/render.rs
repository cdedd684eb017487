use colored::Colorize;
use docdiff_diff::{ChangeKind, ValueDiff};
use docdiff_types::Value;

/// Render a diff as one line per leaf difference plus a summary line.
pub fn render_text(diff: &ValueDiff) -> String {
    if diff.is_empty() {
        return "No differences.\n".to_string();
    }

    let mut out = String::new();
    for leaf in diff.leaves() {
        let path = if leaf.path.is_empty() {
            "(root)".to_string()
        } else {
            leaf.path.clone()
        };
        let line = match leaf.kind {
            ChangeKind::Deleted => format!("- {}: {}", path, show(leaf.old)).red(),
            ChangeKind::Added => format!("+ {}: {}", path, show(leaf.new)).green(),
            ChangeKind::Updated => {
                format!("~ {}: {} → {}", path, show(leaf.old), show(leaf.new)).yellow()
            }
        };
        out.push_str(&line.to_string());
        out.push('\n');
    }

    let stats = diff.stats();
    out.push_str(&format!(
        "\n{} added, {} deleted, {} updated\n",
        stats.additions.to_string().bold(),
        stats.deletions.to_string().bold(),
        stats.updates.to_string().bold(),
    ));
    out
}

/// Render a diff as pretty-printed JSON.
pub fn render_json(diff: &ValueDiff) -> serde_json::Result<String> {
    serde_json::to_string_pretty(diff)
}

fn show(value: Option<&Value>) -> String {
    value.map(Value::to_string).unwrap_or_default()
}
