//! Front-end boundary
//!
//! A [`Session`] wires the task list to its store and exposes the one
//! entry point front ends call per submitted line. Expected failures
//! (unknown command, malformed fields, bad index) come back as response
//! text, never as panics or errors; the only way out of the loop is the
//! exit flag on the returned [`Outcome`].

use crate::command::{classify, execute, Outcome};
use crate::domain::TaskList;
use crate::storage::TaskStore;

/// One interactive user's task list bound to its store
pub struct Session {
    tasks: TaskList,
    store: TaskStore,
    load_warning: Option<String>,
}

impl Session {
    /// Opens a session against the given store.
    ///
    /// A missing store yields an empty list; an unreadable one degrades to
    /// an empty list as well, with a warning kept for the front end to show
    /// once. Startup never fails on bad storage.
    pub fn open(store: TaskStore) -> Self {
        let (tasks, load_warning) = match store.load() {
            Ok(tasks) => (TaskList::from_tasks(tasks), None),
            Err(err) => (
                TaskList::new(),
                Some(format!("Could not load saved tasks: {:#}", err)),
            ),
        };
        Self {
            tasks,
            store,
            load_warning,
        }
    }

    /// Takes the load warning, if storage was unreadable at open
    pub fn take_load_warning(&mut self) -> Option<String> {
        self.load_warning.take()
    }

    /// Greeting for front ends to show before the first command
    pub fn greeting(&self) -> String {
        if self.tasks.is_empty() {
            "Hello! What can I track for you today?".to_string()
        } else {
            format!(
                "Hello! {} on the docket. What's next?",
                self.tasks.count_label()
            )
        }
    }

    /// Executes one raw input line and returns the response.
    ///
    /// This is the single entry point shared by the console loop and any
    /// request/response front end.
    pub fn execute(&mut self, line: &str) -> Outcome {
        match classify(line) {
            Ok(kind) => execute(kind, &mut self.tasks, &self.store, line),
            Err(err) => Outcome::reply(err.to_string()),
        }
    }

    /// Read-only view of the current tasks
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn open_session(dir: &TempDir) -> Session {
        Session::open(TaskStore::new(dir.path().join("tasks.jsonl")))
    }

    #[test]
    fn starts_empty_without_a_store_file() {
        let dir = TempDir::new().unwrap();
        let mut session = open_session(&dir);

        assert!(session.tasks().is_empty());
        assert!(session.take_load_warning().is_none());
    }

    #[test]
    fn tasks_survive_across_sessions() {
        let dir = TempDir::new().unwrap();

        {
            let mut session = open_session(&dir);
            session.execute("todo read book");
            session.execute("deadline submit report /by friday");
            session.execute("mark 1");
        }

        let session = open_session(&dir);
        assert_eq!(session.tasks().len(), 2);

        let tasks = session.tasks().tasks();
        assert_eq!(tasks[0].description, "read book");
        assert!(tasks[0].done);
        assert_eq!(tasks[1].description, "submit report");
        assert!(!tasks[1].done);
    }

    #[test]
    fn unknown_command_becomes_response_text() {
        let dir = TempDir::new().unwrap();
        let mut session = open_session(&dir);

        let outcome = session.execute("frobnicate 3");
        assert!(outcome.message.contains("I don't know that command"));
        assert!(!outcome.exit);
    }

    #[test]
    fn corrupt_lines_are_dropped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.jsonl");
        fs::write(
            &path,
            "{\"kind\":\"todo\",\"description\":\"read book\"}\nnot json at all\n",
        )
        .unwrap();

        let mut session = Session::open(TaskStore::new(path));
        assert_eq!(session.tasks().len(), 1);
        assert!(session.take_load_warning().is_none());
    }

    #[test]
    fn greeting_mentions_loaded_tasks() {
        let dir = TempDir::new().unwrap();

        let mut session = open_session(&dir);
        assert!(session.greeting().contains("What can I track"));
        session.execute("todo read book");
        drop(session);

        let session = open_session(&dir);
        assert!(session.greeting().contains("1 task on the docket"));
    }

    #[test]
    fn bye_exits_without_touching_storage() {
        let dir = TempDir::new().unwrap();
        let mut session = open_session(&dir);

        let outcome = session.execute("bye");
        assert!(outcome.exit);
        assert!(!dir.path().join("tasks.jsonl").exists());
    }
}
