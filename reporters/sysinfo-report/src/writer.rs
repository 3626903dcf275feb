//! Report file naming and writing

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const FILE_NAME_PREFIX: &str = "system_info_";
pub const FILE_NAME_SUFFIX: &str = ".txt";

/// Failure to persist the report
///
/// The display text is the status line printed for the user.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Ошибка при создании файла: {source}")]
    Create { path: PathBuf, source: io::Error },

    /// The file exists but may hold only part of the report
    #[error("Ошибка при записи в файл: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl ReportError {
    pub fn path(&self) -> &Path {
        match self {
            ReportError::Create { path, .. } | ReportError::Write { path, .. } => path,
        }
    }
}

/// Build the report file name for a hostname
///
/// Spaces become underscores; nothing else is touched.
pub fn report_file_name(hostname: &str) -> String {
    format!(
        "{}{}{}",
        FILE_NAME_PREFIX,
        hostname.replace(' ', "_"),
        FILE_NAME_SUFFIX
    )
}

/// Create or truncate `path` and write the report into it
///
/// No temp-file-and-rename: a failed write can leave a partial file.
pub fn write_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| ReportError::Create {
            path: path.to_path_buf(),
            source,
        })?;

    file.write_all(contents.as_bytes())
        .map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_replaces_every_space() {
        assert_eq!(report_file_name("my host"), "system_info_my_host.txt");
        assert_eq!(report_file_name(" a  b "), "system_info__a__b_.txt");
    }

    #[test]
    fn test_file_name_keeps_other_characters() {
        assert_eq!(report_file_name("web-01.local"), "system_info_web-01.local.txt");
        assert_eq!(report_file_name("Рабочий\tПК"), "system_info_Рабочий\tПК.txt");
        assert_eq!(report_file_name(""), "system_info_.txt");
    }

    #[test]
    fn test_create_error_message() {
        let err = ReportError::Create {
            path: PathBuf::from("x.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Ошибка при создании файла: denied");
        assert_eq!(err.path(), Path::new("x.txt"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_device_is_write_error() {
        // /dev/full opens fine but every write fails with ENOSPC
        let path = Path::new("/dev/full");
        let err = write_report(path, "Имя пользователя: root\n").unwrap_err();

        assert!(matches!(err, ReportError::Write { .. }));
        assert!(err.to_string().starts_with("Ошибка при записи в файл: "));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn test_write_error_message() {
        let err = ReportError::Write {
            path: PathBuf::from("x.txt"),
            source: io::Error::new(io::ErrorKind::WriteZero, "disk full"),
        };
        assert_eq!(err.to_string(), "Ошибка при записи в файл: disk full");
    }
}
