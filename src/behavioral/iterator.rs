//! Behavioral pattern: Iterator
//! Example: walking a task list without exposing its storage
//!
//! `TaskCursor` is the explicit, bidirectional GoF iterator. The list also
//! plugs into std's `Iterator` so `for task in &list` works.

use std::fmt;
use std::slice;

use crate::console::Console;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
}

impl Task {
    pub fn new(description: impl Into<String>, done: bool) -> Self {
        Task {
            description: description.into(),
            done,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { "Done" } else { "Pending" };
        write!(f, "{} - {}", self.description, status)
    }
}

#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn cursor(&self) -> TaskCursor<'_> {
        TaskCursor {
            tasks: &self.tasks,
            index: 0,
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.iter().filter(|task| !task.done)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Position-based cursor that can move both ways.
pub struct TaskCursor<'a> {
    tasks: &'a [Task],
    index: usize,
}

impl<'a> TaskCursor<'a> {
    /// `None` only when the list is empty.
    pub fn current(&self) -> Option<&'a Task> {
        self.tasks.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.tasks.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Moves forward; returns `false` (and stays put) at the last task.
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves back; returns `false` (and stays put) at the first task.
    pub fn retreat(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let mut list = TaskList::new();
    list.add(Task::new("Study design patterns", false));
    list.add(Task::new("Write code", true));
    list.add(Task::new("Review documentation", false));

    let mut cursor = list.cursor();

    console.line("Iterating over the tasks:")?;
    loop {
        if let Some(task) = cursor.current() {
            console.line(task)?;
        }
        if !cursor.advance() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add(Task::new("a", false));
        list.add(Task::new("b", true));
        list.add(Task::new("c", false));
        list
    }

    #[test]
    fn test_cursor_moves_both_ways() {
        let list = sample();
        let mut cursor = list.cursor();

        assert!(!cursor.has_previous());
        assert!(!cursor.retreat());
        assert_eq!(cursor.current().unwrap().description, "a");

        assert!(cursor.advance());
        assert!(cursor.advance());
        assert!(!cursor.has_next());
        assert!(!cursor.advance());
        assert_eq!(cursor.current().unwrap().description, "c");

        assert!(cursor.retreat());
        assert_eq!(cursor.current().unwrap().description, "b");
    }

    #[test]
    fn test_empty_list() {
        let list = TaskList::new();
        let mut cursor = list.cursor();
        assert!(cursor.current().is_none());
        assert!(!cursor.advance());
        assert!(!cursor.has_previous());
    }

    #[test]
    fn test_std_iteration() {
        let list = sample();
        let names: Vec<_> = (&list).into_iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(list.pending().count(), 2);
    }

    #[test]
    fn test_narration() {
        let expected = "\
Iterating over the tasks:
Study design patterns - Pending
Write code - Done
Review documentation - Pending
";
        assert_eq!(Console::capture(run).unwrap(), expected);
    }
}
