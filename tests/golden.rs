//! Golden tests for carcols
//!
//! Run the binary against the checked-in `sample_mods` tree and compare the
//! written reports byte for byte.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Tree holding "[emergency]" and "[Vehicles]"
fn sample_mods() -> PathBuf {
    fixtures_dir().join("sample_mods")
}

fn carcols_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("carcols"))
}

fn rule(ch: &str, width: usize) -> String {
    ch.repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Uses the default roots, resolved from the working directory
    fn run_default_roots(out: &std::path::Path) -> std::process::Output {
        let mut cmd = carcols_cmd();
        cmd.current_dir(sample_mods())
            .arg("--out-dir")
            .arg(out)
            .arg("--no-color")
            .env_remove("CARCOLS_OUT_DIR");
        cmd.output().expect("failed to execute")
    }

    #[test]
    fn golden_grouped_report() {
        let out = tempdir().unwrap();
        let output = run_default_roots(out.path());
        assert!(output.status.success());

        let report = fs::read_to_string(out.path().join("carcols_ids.txt")).unwrap();
        let expected = format!(
            "Carcols.meta ID Values Extraction Report\n{eq}\n\n\
             Folder: lspd\n{dash}\nID: 7\nID: 20\nID: 101\n\n\
             Folder: sport\n{dash}\nID: 2\nID: 101\n\n\
             {eq}\nTotal folders processed: 2\nTotal ID values found: 5\n",
            eq = rule("=", 50),
            dash = rule("-", 30),
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn golden_simple_report() {
        let out = tempdir().unwrap();
        run_default_roots(out.path());

        let report = fs::read_to_string(out.path().join("carcols_ids_simple.txt")).unwrap();
        assert_eq!(
            report,
            "2 | sport\n7 | lspd\n20 | lspd\n101 | lspd\n101 | sport\n"
        );
    }

    #[test]
    fn golden_duplicates_report() {
        let out = tempdir().unwrap();
        run_default_roots(out.path());

        let report = fs::read_to_string(out.path().join("duplicate_ids.txt")).unwrap();
        let expected = format!(
            "DUPLICATE ID VALUES REPORT\n{eq}\n\n\
             ID: 101 (found 2 times)\n{dash}\n\
             \x20 Folder: lspd\n\x20 Path: lspd/carcols.meta\n\
             \x20 Folder: sport\n\x20 Path: sport/CARCOLS.META\n\n\
             {eq}\nTotal duplicate IDs: 1\nTotal duplicate instances: 2\n",
            eq = rule("=", 50),
            dash = rule("-", 30),
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn golden_text_listing() {
        let out = tempdir().unwrap();
        let output = run_default_roots(out.path());
        let stdout = String::from_utf8_lossy(&output.stdout);

        let listing: Vec<&str> = stdout
            .lines()
            .filter(|l| l.starts_with("Directory: "))
            .collect();
        assert_eq!(
            listing,
            vec![
                "Directory: [emergency] | Folder: lspd | ID: 101",
                "Directory: [emergency] | Folder: lspd | ID: 20",
                "Directory: [emergency] | Folder: lspd | ID: 7",
                "Directory: [Vehicles] | Folder: sport | ID: 101",
                "Directory: [Vehicles] | Folder: sport | ID: 2",
            ]
        );
        assert!(stdout.contains("Total ID values extracted: 5"));
        assert!(stdout.contains("Found 1 duplicate IDs with 2 total instances"));
    }

    #[test]
    fn golden_jsonl_records() {
        let mut cmd = carcols_cmd();
        cmd.current_dir(sample_mods())
            .arg("--format")
            .arg("jsonl")
            .arg("--no-write");

        let output = cmd.output().expect("failed to execute");
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        let items: Vec<Value> = stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("valid jsonl line"))
            .collect();

        assert_eq!(items.len(), 5);
        for item in &items {
            assert_eq!(item.get("kind").and_then(|v| v.as_str()), Some("id"));
            assert!(item.get("folder").is_some());
            assert!(item.get("relative_path").is_some());
            assert!(item.get("root").is_some());
        }

        let ids: Vec<&str> = items
            .iter()
            .filter_map(|v| v.get("id_value").and_then(|v| v.as_str()))
            .collect();
        assert_eq!(ids, vec!["101", "20", "7", "101", "2"]);
    }
}
