//! End-to-end checks of both binaries: exit codes, status lines, and files on disk.

use std::fs;
use std::path::Path;

use anyhow::Result;
use predicates::prelude::*;
use tempfile::TempDir;

const TARGET: &str = "lib/features/predictions/predictions_page.dart";

const PAGE: &str = "      final service = ApiFootballService(client);
      if (seen.add((f as dynamic).id)) out.add(f);
      CassandraScope.of(context).setCachedPredictionMatches(matches);
";

fn command(bin: &str, root: &Path) -> Result<assert_cmd::Command> {
    let mut cmd = assert_cmd::Command::cargo_bin(bin)?;
    cmd.env_remove("CASSANDRA_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--root").arg(root);
    Ok(cmd)
}

fn flutter_project() -> Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("pubspec.yaml"), "name: cassandra\n")?;
    let target = dir.path().join(TARGET);
    fs::create_dir_all(target.parent().expect("target has a parent"))?;
    fs::write(target, PAGE)?;
    Ok(dir)
}

#[test]
fn patch_fixtures_applies_then_reports_already_applied() -> Result<()> {
    let project = flutter_project()?;

    command("patch_fixtures", project.path())?
        .assert()
        .success()
        .stdout("OK: patch_01 applied -> predictions_page.dart\n");

    let patched = fs::read_to_string(project.path().join(TARGET))?;
    assert_eq!(
        patched,
        "      final service = ApiFootballService(client);\n      final scope = CassandraScope.of(context);\n      if (seen.add(f.fixtureId)) out.add(f);\n      scope.setCachedPredictionMatches(matches);\n"
    );

    command("patch_fixtures", project.path())?
        .assert()
        .success()
        .stdout("OK: patch_01 already applied (no changes).\n");
    assert_eq!(fs::read_to_string(project.path().join(TARGET))?, patched);

    let backup = project
        .path()
        .join("_backup/predictions_page.dart.before_patch_01.bak");
    assert_eq!(fs::read_to_string(backup)?, patched);
    Ok(())
}

#[test]
fn patch_fixtures_without_pubspec_exits_1() -> Result<()> {
    let project = flutter_project()?;
    fs::remove_file(project.path().join("pubspec.yaml"))?;

    command("patch_fixtures", project.path())?
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("ERROR: pubspec.yaml not found in"));

    assert!(!project.path().join("_backup").exists());
    assert_eq!(fs::read_to_string(project.path().join(TARGET))?, PAGE);
    Ok(())
}

#[test]
fn patch_fixtures_without_target_exits_1() -> Result<()> {
    let project = flutter_project()?;
    fs::remove_file(project.path().join(TARGET))?;

    command("patch_fixtures", project.path())?
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: file not found:"))
        .stdout(predicate::str::contains("predictions_page.dart"));
    Ok(())
}

#[test]
fn patch_fixtures_dry_run_prints_diff_only() -> Result<()> {
    let project = flutter_project()?;

    command("patch_fixtures", project.path())?
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("+      final scope = CassandraScope.of(context);"))
        .stdout(predicate::str::ends_with("OK: patch_01 would be applied (dry run).\n"));

    assert_eq!(fs::read_to_string(project.path().join(TARGET))?, PAGE);
    assert!(!project.path().join("_backup").exists());
    Ok(())
}

#[test]
fn update_docs_appends_once_per_document() -> Result<()> {
    let project = TempDir::new()?;
    fs::create_dir(project.path().join("docs"))?;
    fs::write(project.path().join("docs/PROJECT_STATE.md"), "# Stato\n\n\n")?;
    fs::write(project.path().join("TASKS.md"), "# Tasks")?;

    command("update_docs", project.path())?
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: updated "))
        .stdout(predicate::str::contains("PROJECT_STATE.md"))
        .stdout(predicate::str::contains("TASKS.md"));

    let tasks = fs::read_to_string(project.path().join("TASKS.md"))?;
    assert!(tasks.starts_with("# Tasks\n\n## Aggiornamento 2026-01-15\nDone\n"));
    assert!(tasks.ends_with("se riappaiono.\n"));

    command("update_docs", project.path())?
        .assert()
        .success()
        .stdout(
            "OK: PROJECT_STATE already up to date (marker present).\n\
             OK: TASKS already up to date (marker present).\n",
        );
    assert_eq!(fs::read_to_string(project.path().join("TASKS.md"))?, tasks);
    Ok(())
}

#[test]
fn update_docs_with_missing_docs_exits_1_without_writes() -> Result<()> {
    let project = TempDir::new()?;
    fs::write(project.path().join("PROJECT_STATE.md"), "# Stato\n")?;

    command("update_docs", project.path())?
        .assert()
        .code(1)
        .stdout("ERROR: docs files not found: docs/TASKS.md / TASKS.md\n");

    assert_eq!(
        fs::read_to_string(project.path().join("PROJECT_STATE.md"))?,
        "# Stato\n"
    );
    Ok(())
}

#[test]
fn update_docs_accepts_a_custom_date() -> Result<()> {
    let project = TempDir::new()?;
    fs::write(project.path().join("PROJECT_STATE.md"), "## Sessione 2026-01-15 — Recuperi/Fixtures\n")?;
    fs::write(project.path().join("TASKS.md"), "# Tasks\n")?;

    command("update_docs", project.path())?
        .args(["--date", "2026-02-01"])
        .assert()
        .success();

    let state = fs::read_to_string(project.path().join("PROJECT_STATE.md"))?;
    assert!(state.contains("## Sessione 2026-02-01 — Recuperi/Fixtures"));

    command("update_docs", project.path())?
        .args(["--date", "01/02/2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
    Ok(())
}
