use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        // No waiting on the simulated export delay
        fs::write(
            dir.path().join("config.json"),
            r#"{ "export_delay_ms": 0, "default_row_count": 20 }"#,
        )
        .unwrap();
        Self { dir }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("stockroom").unwrap();
        cmd.env("STOCKROOM_DATA_DIR", self.dir.path());
        cmd
    }

    fn audit_log(&self) -> String {
        fs::read_to_string(self.dir.path().join("audit.log")).unwrap_or_default()
    }
}

#[test]
fn report_list_shows_catalog() {
    let env = TestEnv::new();
    env.cmd()
        .args(["report", "list"])
        .assert()
        .success()
        .stdout(contains("inventory-summary"))
        .stdout(contains("sales-analysis"));
}

#[test]
fn report_filters_for_one_report() {
    let env = TestEnv::new();
    env.cmd()
        .args(["report", "filters", "purchase-orders"])
        .assert()
        .success()
        .stdout(contains("orderStatus"))
        .stdout(contains("movementType").not());
}

#[test]
fn report_show_search_finds_row() {
    let env = TestEnv::new();
    env.cmd()
        .args(["report", "show", "stock-movement", "--seed", "7", "--search", "MOV-0003"])
        .assert()
        .success()
        .stdout(contains("Stock Movement"))
        .stdout(contains("MOV-0003"))
        .stdout(contains("MOV-0004").not());
}

#[test]
fn report_show_unknown_key_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["report", "show", "payroll"])
        .assert()
        .failure()
        .stderr(contains("Report not found: payroll"));
}

#[test]
fn report_show_rejects_unknown_sort_column() {
    let env = TestEnv::new();
    env.cmd()
        .args(["report", "show", "inventory-summary", "--sort", "Colour"])
        .assert()
        .failure()
        .stderr(contains("not a column"));
}

#[test]
fn preset_save_list_delete() {
    let env = TestEnv::new();

    env.cmd()
        .args([
            "preset",
            "save",
            "Electronics Watch",
            "--filter",
            "category=Electronics",
            "--shared",
        ])
        .assert()
        .success()
        .stdout(contains("Preset Saved"));

    env.cmd()
        .args(["preset", "list"])
        .assert()
        .success()
        .stdout(contains("Electronics Watch"))
        .stdout(contains("shared"));

    env.cmd()
        .args(["preset", "save", "electronics watch", "--filter", "category=Hardware"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    env.cmd()
        .args(["preset", "delete", "Electronics Watch"])
        .assert()
        .success()
        .stdout(contains("--yes"));

    env.cmd()
        .args(["preset", "delete", "Electronics Watch", "--yes"])
        .assert()
        .success()
        .stdout(contains("Preset Deleted"));

    env.cmd()
        .args(["preset", "list"])
        .assert()
        .success()
        .stdout(contains("No presets saved."));

    let log = env.audit_log();
    assert!(log.contains("\"operation\":\"create\""));
    assert!(log.contains("\"operation\":\"delete\""));
}

#[test]
fn preset_save_without_filters_warns() {
    let env = TestEnv::new();
    env.cmd()
        .args(["preset", "save", "Monthly Report"])
        .assert()
        .failure()
        .stdout(contains("no filters to save"));
}

#[test]
fn preset_save_short_name_fails_validation() {
    let env = TestEnv::new();
    env.cmd()
        .args(["preset", "save", "ab", "--filter", "vendor=Apex Traders"])
        .assert()
        .failure()
        .stderr(contains("Validation Error"))
        .stderr(contains("at least 3 characters"));
}

#[test]
fn simulated_pdf_export_completes() {
    let env = TestEnv::new();
    env.cmd()
        .args(["report", "export", "low-stock-alert", "--format", "pdf"])
        .assert()
        .success()
        .stdout(contains("Export Started"))
        .stdout(contains("low_stock_alert_"))
        .stdout(contains(".pdf"))
        .stdout(contains("Export Complete"));

    assert!(env.audit_log().contains("\"operation\":\"export\""));
}

#[test]
fn csv_export_writes_file() {
    let env = TestEnv::new();
    let out_dir = env.dir.path().join("out");

    env.cmd()
        .args(["report", "export", "purchase-orders", "--format", "csv"])
        .args(["--filename", "orders", "--filter", "orderStatus=Pending"])
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(contains("Export Complete"));

    let contents = fs::read_to_string(out_dir.join("orders.csv")).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("# Report: Purchase Orders"));
    assert_eq!(lines.next(), Some("# Filter: Order Status: Pending"));
    assert!(lines.next().unwrap().starts_with("PO Number,Order Date"));
    assert_eq!(lines.count(), 20);
}

#[test]
fn csv_export_rejects_path_in_filename() {
    let env = TestEnv::new();
    let out_dir = env.dir.path().join("out");

    env.cmd()
        .args(["report", "export", "purchase-orders", "--format", "csv"])
        .args(["--filename", "../escaped"])
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .failure()
        .stderr(contains("Export Failed"))
        .stderr(contains("Invalid export file name"));

    assert!(!env.dir.path().join("escaped.csv").exists());
}

#[test]
fn excel_export_to_directory_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["report", "export", "sales-analysis", "--out-dir"])
        .arg(env.dir.path().join("out"))
        .assert()
        .failure()
        .stderr(contains("Export Failed"));
}

#[test]
fn config_shows_paths() {
    let env = TestEnv::new();
    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(contains("presets.json"))
        .stdout(contains("Export delay:     0 ms"));
}
