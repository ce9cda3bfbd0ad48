//! JSONL storage for tasks
//!
//! The whole list is persisted as one JSON object per line, in list
//! order — line order is what gives tasks their user-visible index.
//! Every save is a full snapshot; there are no incremental writes.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::{Task, TaskList};

/// Store for task data in JSONL format
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Creates a task store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every task from the store, preserving line order.
    ///
    /// A missing file yields an empty list. Lines that fail to parse are
    /// skipped so one corrupt record never takes the rest down.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open task store: {}", self.path.display()))?;

        // Shared lock for reading; released when the file is dropped.
        FileExt::lock_shared(&file).context("Failed to acquire read lock on task store")?;

        let reader = BufReader::new(&file);
        let mut tasks = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<Task>(&line) {
                Ok(task) => tasks.push(task),
                Err(_) => continue,
            }
        }

        Ok(tasks)
    }

    /// Writes the full list as a snapshot, in order (temp file + rename)
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            FileExt::lock_exclusive(&file)
                .context("Failed to acquire write lock on task store")?;

            let mut writer = BufWriter::new(&file);

            for task in tasks {
                let line = serde_json::to_string(task).context("Failed to serialize task")?;
                writeln!(writer, "{}", line).context("Failed to write task")?;
            }

            writer.flush().context("Failed to flush task store")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskKind;
    use tempfile::TempDir;

    fn sample_list() -> TaskList {
        let mut list = TaskList::new();
        list.add(Task::todo("read book"));
        list.add(Task::deadline("submit report", "friday"));
        list.add(Task::event("team sync", "2pm", "3pm"));
        list
    }

    #[test]
    fn load_missing_file_yields_empty() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.jsonl"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.jsonl"));

        let mut list = sample_list();
        list.mark_done(2).unwrap();
        store.save(&list).unwrap();

        let loaded = TaskList::from_tasks(store.load().unwrap());
        assert_eq!(loaded, list);
    }

    #[test]
    fn load_preserves_insertion_order() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.jsonl"));

        store.save(&sample_list()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].description, "read book");
        assert_eq!(loaded[1].description, "submit report");
        assert_eq!(loaded[2].description, "team sync");
        assert_eq!(
            loaded[1].kind,
            TaskKind::Deadline {
                by: "friday".into()
            }
        );
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.jsonl"));

        let mut list = sample_list();
        store.save(&list).unwrap();

        list.remove(1).unwrap();
        store.save(&list).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].description, "submit report");
    }

    #[test]
    fn corrupt_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.jsonl");
        fs::write(
            &path,
            concat!(
                "{\"kind\":\"todo\",\"description\":\"read book\"}\n",
                "garbage line\n",
                "\n",
                "{\"kind\":\"deadline\",\"by\":\"friday\",\"description\":\"submit report\"}\n",
            ),
        )
        .unwrap();

        let store = TaskStore::new(path);
        let loaded = store.load().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].description, "read book");
        assert_eq!(loaded[1].description, "submit report");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path().join("nested").join("dir").join("tasks.jsonl"));

        store.save(&sample_list()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn atomic_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.jsonl"));

        store.save(&sample_list()).unwrap();

        let temp_path = store.path().with_extension("jsonl.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn save_empty_list_truncates_the_store() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::new(dir.path().join("tasks.jsonl"));

        store.save(&sample_list()).unwrap();
        store.save(&TaskList::new()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }
}
