use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::config::render_job::RenderJob;

#[derive(Debug, Error)]
pub enum JobFileError {
    #[error("failed to read job file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid job file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses a JSON array of render jobs.
pub fn parse_jobs(json: &str) -> Result<Vec<RenderJob>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_jobs(path: &Path) -> Result<Vec<RenderJob>, JobFileError> {
    let json = std::fs::read_to_string(path).map_err(|source| JobFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_jobs(&json).map_err(|source| JobFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::recurrence::Recurrence;

    #[test]
    fn test_parse_list_of_jobs() {
        let jobs = parse_jobs(
            r#"[
                {"job": 1, "recurrence": "mandelbrot", "zoom": 2.0},
                {"recurrence": "exotic", "c": {"real": 0.0, "imag": 1.0}}
            ]"#,
        )
        .unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].job, Some(1));
        assert_eq!(jobs[0].view.zoom, 2.0);
        assert_eq!(jobs[1].job, None);
        assert_eq!(jobs[1].config.recurrence, Recurrence::Exotic);
    }

    #[test]
    fn test_unknown_recurrence_is_a_parse_error() {
        assert!(parse_jobs(r#"[{"recurrence": "burning_ship"}]"#).is_err());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_jobs(&dir.path().join("jobs.json"));

        assert!(matches!(result, Err(JobFileError::Read { .. })));
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = load_jobs(&path);

        assert!(matches!(result, Err(JobFileError::Parse { .. })));
    }
}
