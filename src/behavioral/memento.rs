//! Behavioral pattern: Memento
//! Example: a text editor with undo
//!
//! `Snapshot` is opaque outside this module: only the editor can read the
//! text it captured.

use std::fmt;

use crate::console::Console;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditor {
    text: String,
}

impl TextEditor {
    pub fn new(text: impl Into<String>) -> Self {
        TextEditor { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn save(&self) -> Snapshot {
        Snapshot {
            text: self.text.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.text.clone_from(&snapshot.text);
    }
}

impl fmt::Display for TextEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The caretaker: stores snapshots without looking inside them.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let mut editor = TextEditor::new("Initial text.");
    let mut history = History::new();

    history.push(editor.save());
    console.line(format!("Current state: {editor}"))?;

    editor.set_text("Changed text.");
    console.line(format!("Modified state: {editor}"))?;
    history.push(editor.save());

    editor.set_text("Another text.");
    console.line(format!("Modified again: {editor}"))?;

    if let Some(snapshot) = history.get(1) {
        editor.restore(snapshot);
    }
    console.line(format!("State after restore (undo): {editor}"))?;

    if let Some(snapshot) = history.get(0) {
        editor.restore(snapshot);
    }
    console.line(format!("State after restoring the initial one: {editor}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_second_of_three() {
        let mut editor = TextEditor::new("one");
        let mut history = History::new();

        history.push(editor.save());
        editor.set_text("two");
        history.push(editor.save());
        editor.set_text("three");
        history.push(editor.save());

        editor.restore(history.get(1).unwrap());
        assert_eq!(editor.text(), "two");
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_edits() {
        let mut editor = TextEditor::new("draft");
        let snapshot = editor.save();
        editor.set_text("final");
        editor.restore(&snapshot);
        assert_eq!(editor.text(), "draft");
    }

    #[test]
    fn test_out_of_range() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.get(0).is_none());
    }

    #[test]
    fn test_narration() {
        let expected = "\
Current state: Initial text.
Modified state: Changed text.
Modified again: Another text.
State after restore (undo): Changed text.
State after restoring the initial one: Initial text.
";
        assert_eq!(Console::capture(run).unwrap(), expected);
    }
}
