//! Render the model as terminal text

use std::fmt::Write;

use crate::model::{AppModel, ViewPhase};
use crate::preview::output_to_text;

const RULE: &str = "────────────────────────────────────────────────────────────";
const UPPER_SPACE_LINES: usize = 4;

/// Render the whole screen for the current model
pub fn render(model: &AppModel) -> String {
    let mut out = String::new();
    match model.phase() {
        ViewPhase::Empty => render_empty(&mut out),
        ViewPhase::Editing => render_editing(model, &mut out),
    }
    if !model.ui.status_message.is_empty() {
        // String writes are infallible
        let _ = writeln!(out, "» {}", model.ui.status_message);
    }
    out
}

fn render_empty(out: &mut String) {
    out.push_str("No dataset loaded.\n");
    out.push_str("Upload dataset: open <path-to-json>\n");
}

fn render_editing(model: &AppModel, out: &mut String) {
    let Some(record) = model.editor.working.as_ref() else {
        return;
    };

    if model.ui.upper_space {
        out.push_str(&"\n".repeat(UPPER_SPACE_LINES));
    }

    let prev = if model.can_go_prev() { "[Prev]" } else { " Prev " };
    let next = if model.can_go_next() { "[Next]" } else { " Next " };
    let deleted = model.editor.is_deleted();
    let status = if deleted {
        "DELETED".to_string()
    } else {
        record.curation_status.to_string()
    };
    let weight = record.p.as_ref().map(|p| p.to_string()).unwrap_or_default();

    // String writes are infallible
    let _ = writeln!(
        out,
        "{}  [Export]  Data Index: {} / {}  Curation Status: {}  Curation Message: {}  p: {}  {}",
        prev,
        model.editor.index,
        model.record_count().saturating_sub(1),
        status,
        quoted(&record.curation_message),
        weight,
        next
    );
    out.push_str(RULE);
    out.push('\n');

    out.push_str("Instruction:\n");
    push_indented(out, &record.instruction);
    out.push_str("Output:\n");
    push_indented(out, &record.output);
    out.push_str(RULE);
    out.push('\n');

    let toggle = if deleted {
        "[Recover]"
    } else {
        "[Delete]"
    };
    let spacing = if model.ui.upper_space { "[⬆]" } else { "[⬇]" };
    let dirty = if model.editor.is_changed {
        "  * unsaved changes"
    } else {
        ""
    };
    // String writes are infallible
    let _ = writeln!(out, "{}  {}  [Save and Next]  [Save]{}", toggle, spacing, dirty);

    if model.config.show_preview {
        out.push_str(RULE);
        out.push('\n');
        push_indented(out, &output_to_text(&record.output));
    }
}

fn quoted(text: &str) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", text)
    }
}

fn push_indented(out: &mut String, text: &str) {
    if text.is_empty() {
        out.push_str("  \n");
        return;
    }
    for line in text.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
}
