//! Task file discovery.
//!
//! Heuristic runs write their assignments to
//! `<data_dir>/<search_type>/tasks_<search_type>_<run>.csv`; charts go to
//! the `plot/` directory next to them.

use std::io;
use std::path::{Path, PathBuf};

use glob::{glob, Pattern};

use crate::error::{Error, Result};

/// Task files for a search type, sorted by path.
///
/// Matches `tasks_<search_type>_*.csv` directly inside
/// `<data_dir>/<search_type>`. Glob metacharacters in either input are
/// taken literally.
///
/// # Errors
/// `FileAccess` if the search type directory is missing or an entry
/// cannot be read; `Pattern` if the search pattern cannot be built.
pub fn discover_task_files(data_dir: impl AsRef<Path>, search_type: &str) -> Result<Vec<PathBuf>> {
    let dir = data_dir.as_ref().join(search_type);
    if !dir.is_dir() {
        return Err(Error::file_access(
            &dir,
            io::Error::new(io::ErrorKind::NotFound, "search type directory not found"),
        ));
    }

    let pattern = format!(
        "{}/tasks_{}_*.csv",
        Pattern::escape(&dir.to_string_lossy()),
        Pattern::escape(search_type)
    );
    let entries = glob(&pattern).map_err(|source| Error::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| { let p = e.path().to_path_buf(); Error::file_access(p, e.into_error()) })?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output directory for charts of a search type.
pub fn plot_dir(data_dir: impl AsRef<Path>, search_type: &str) -> PathBuf {
    data_dir.as_ref().join(search_type).join("plot")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("u-makespan-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let data = scratch_dir("discover");
        let dir = data.join("bestImp");
        fs::create_dir_all(dir.join("plot")).unwrap();
        for name in [
            "tasks_bestImp_m20_exec1.csv",
            "tasks_bestImp_m10_exec1.csv",
            "tasks_other_m10_exec1.csv",
            "tasks_bestImp_notes.txt",
            "resultados.csv",
        ] {
            fs::write(dir.join(name), "Machine,TaskProcessingTime\n").unwrap();
        }

        let files = discover_task_files(&data, "bestImp").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["tasks_bestImp_m10_exec1.csv", "tasks_bestImp_m20_exec1.csv"]
        );

        fs::remove_dir_all(&data).unwrap();
    }

    #[test]
    fn test_discover_literal_search_type() {
        let data = scratch_dir("discover-literal");
        let dir = data.join("run[1]");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("tasks_run[1]_exec1.csv"), "Machine,TaskProcessingTime\n").unwrap();
        fs::write(dir.join("tasks_run1_exec1.csv"), "Machine,TaskProcessingTime\n").unwrap();
        fs::create_dir_all(dir.join("tasks_run[1]_dir.csv")).unwrap();

        let files = discover_task_files(&data, "run[1]").unwrap();
        assert_eq!(files, vec![dir.join("tasks_run[1]_exec1.csv")]);

        fs::remove_dir_all(&data).unwrap();
    }

    #[test]
    fn test_discover_missing_dir() {
        let err = discover_task_files("/nonexistent", "bestImp").unwrap_err();
        assert!(matches!(err, Error::FileAccess { .. }));
    }

    #[test]
    fn test_plot_dir() {
        assert_eq!(
            plot_dir("data", "bestImp"),
            PathBuf::from("data/bestImp/plot")
        );
    }
}
