//! Line-oriented input handling
//!
//! Maps typed commands onto messages. Free text values accept `\n` and `\t`
//! escapes so multi-line instructions and outputs can be entered on one line.

use std::path::PathBuf;

use crate::messages::{AppMsg, CurationMsg, FieldMsg, Msg, NavMsg, UiMsg};

/// What a typed line asks for
#[derive(Debug, Clone)]
pub enum Input {
    /// Feed a message to the runtime
    Message(Msg),
    /// Re-render the current record
    Show,
    /// Print the command list
    Help,
    /// Leave the program
    Quit,
    /// Blank line
    Nothing,
}

pub const HELP: &str = "\
Commands:
  open <path>             upload a dataset (replaces the stored one)
  prev | p                previous record
  next | n                next record
  goto <index>            jump to a record
  set instruction <text>  edit the instruction
  set output <text>       edit the output
  set status <int>        edit the curation status (0, 1, -1)
  set message <text>      edit the curation message
  set p <value>           edit the weight
  save | s                save (approves unless deleted)
  save-next | sn          save and go to the next record
  delete | del            soft-delete the record
  recover                 undo a soft delete
  export                  write dataset-curated-<timestamp>.json
  preview                 open the output in the browser
  space                   toggle extra spacing
  reload                  re-read the store, dropping unsaved edits
  show                    redraw
  help                    this list
  quit | q                exit
Text values accept \\n and \\t escapes.";

/// Parse one typed line
pub fn parse_line(line: &str) -> Result<Input, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Nothing);
    }
    let (command, rest) = split_word(line);

    let msg: Msg = match command {
        "quit" | "q" | "exit" => return Ok(Input::Quit),
        "help" | "h" | "?" => return Ok(Input::Help),
        "show" | "ls" => return Ok(Input::Show),
        "open" | "upload" => {
            if rest.is_empty() {
                return Err("usage: open <path>".to_string());
            }
            AppMsg::LoadFile(PathBuf::from(rest)).into()
        }
        "prev" | "p" => NavMsg::Prev.into(),
        "next" | "n" => NavMsg::Next.into(),
        "goto" | "g" => {
            let index = rest
                .parse::<usize>()
                .map_err(|_| format!("invalid index {:?}", rest))?;
            NavMsg::GoTo(index).into()
        }
        "set" => parse_set(rest)?.into(),
        "save" | "s" => CurationMsg::Save { advance: false }.into(),
        "save-next" | "sn" => CurationMsg::Save { advance: true }.into(),
        "delete" | "del" => CurationMsg::Delete.into(),
        "recover" => CurationMsg::Recover.into(),
        "export" => AppMsg::Export.into(),
        "preview" => AppMsg::OpenPreview.into(),
        "space" => UiMsg::ToggleUpperSpace.into(),
        "reload" => AppMsg::ReloadStore.into(),
        other => return Err(format!("unknown command {:?} (try help)", other)),
    };
    Ok(Input::Message(msg))
}

fn parse_set(rest: &str) -> Result<FieldMsg, String> {
    let (field, value) = split_word(rest);
    let value = unescape(value);
    let msg = match field {
        "instruction" => FieldMsg::SetInstruction(value),
        "output" => FieldMsg::SetOutput(value),
        "status" | "curationStatus" => {
            let status = value
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("status must be an integer, got {:?}", value))?;
            FieldMsg::SetCurationStatus(status)
        }
        "message" | "curationMessage" => FieldMsg::SetCurationMessage(value),
        "p" => FieldMsg::SetP(value),
        "" => return Err("usage: set <field> <value>".to_string()),
        other => return Err(format!("unknown field {:?}", other)),
    };
    Ok(msg)
}

/// Split off the first whitespace-delimited word
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
