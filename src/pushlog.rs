use crate::error::Result;
use crate::model::PushRecord;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const PUSH_LOG_FILE: &str = "push_log.txt";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The log lives next to the working tree, not inside `.git`.
pub fn push_log_path(repo_workdir: &Path) -> PathBuf {
    repo_workdir.join(PUSH_LOG_FILE)
}

/// Read the push log into a short-id to push-time map.
///
/// A missing file means no pushes yet. Lines that do not split into exactly
/// two `;` fields, or whose timestamp does not parse, are skipped. Duplicate
/// ids keep the last occurrence.
pub fn read_push_log(path: &Path) -> Result<BTreeMap<String, NaiveDateTime>> {
    let mut pushes = BTreeMap::new();
    if !path.exists() {
        return Ok(pushes);
    }

    let contents = fs::read_to_string(path)?;
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() != 2 {
            log::warn!("skipping malformed push log line: {line}");
            continue;
        }

        match NaiveDateTime::parse_from_str(fields[1], TIMESTAMP_FORMAT) {
            Ok(pushed_at) => {
                pushes.insert(fields[0].to_string(), pushed_at);
            }
            Err(e) => log::warn!("skipping push log line with bad timestamp ({e}): {line}"),
        }
    }

    Ok(pushes)
}

/// Append one record. The log is append-only; existing lines are never
/// rewritten.
pub fn append_push_record(path: &Path, record: &PushRecord) -> Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(
        file,
        "{};{}",
        record.commit_id,
        record.pushed_at.format(TIMESTAMP_FORMAT)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn stamp(ymd: (i32, u32, u32), hms: (u32, u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2)
            .unwrap()
            .and_hms_opt(hms.0, hms.1, hms.2)
            .unwrap()
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();

        let pushes = read_push_log(&dir.path().join(PUSH_LOG_FILE)).unwrap();

        assert!(pushes.is_empty());
    }

    #[test]
    fn append_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let path = push_log_path(dir.path());

        let first = PushRecord {
            commit_id: "abc1234".to_string(),
            pushed_at: stamp((2024, 2, 1), (9, 30, 0)),
        };
        let second = PushRecord {
            commit_id: "def5678".to_string(),
            pushed_at: stamp((2024, 2, 2), (18, 0, 5)),
        };
        append_push_record(&path, &first).unwrap();
        append_push_record(&path, &second).unwrap();

        let pushes = read_push_log(&path).unwrap();

        assert_eq!(pushes.len(), 2);
        assert_eq!(pushes["abc1234"], first.pushed_at);
        assert_eq!(pushes["def5678"], second.pushed_at);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = push_log_path(dir.path());
        fs::write(
            &path,
            "abc\n\
             a;b;c\n\
             abc1234;2024-02-01 09:30:00\n\
             def5678;not a date\n",
        )
        .unwrap();

        let pushes = read_push_log(&path).unwrap();

        assert_eq!(pushes.len(), 1);
        assert!(pushes.contains_key("abc1234"));
    }

    #[test]
    fn file_with_no_valid_lines_yields_empty_map() {
        let dir = tempdir().unwrap();
        let path = push_log_path(dir.path());
        fs::write(&path, "abc\nxyz\n").unwrap();

        assert!(read_push_log(&path).unwrap().is_empty());
    }

    #[test]
    fn duplicate_ids_keep_the_last_record() {
        let dir = tempdir().unwrap();
        let path = push_log_path(dir.path());
        fs::write(
            &path,
            "abc1234;2024-02-01 09:30:00\nabc1234;2024-02-03 11:00:00\n",
        )
        .unwrap();

        let pushes = read_push_log(&path).unwrap();

        assert_eq!(pushes.len(), 1);
        assert_eq!(pushes["abc1234"], stamp((2024, 2, 3), (11, 0, 0)));
    }
}
