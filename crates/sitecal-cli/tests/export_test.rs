use sitecal_testing::TestWorld;
use std::fs;
use std::path::{Path, PathBuf};

const BOM: char = '\u{feff}';

fn exported_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
        .unwrap_or_default();
    files.sort();
    files
}

fn read_without_bom(path: &Path) -> String {
    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with(BOM), "missing BOM in {}", path.display());
    content.trim_start_matches(BOM).to_string()
}

fn parse_csv(text: &str, delimiter: u8) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(String::from)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (headers, rows)
}

#[test]
fn test_csv_job_export_flattens_lookups() {
    let world = TestWorld::new().with_sample_jobs();
    let out = world.out_dir();

    let json = world
        .run_json(&["export", "--output-dir", out.to_str().unwrap()])
        .expect("export should succeed");
    assert_eq!(json["content"]["files"][0]["mime_type"], "text/csv;charset=utf-8");

    let files = exported_files(&out);
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("案件データ_"), "unexpected name {}", name);
    assert!(name.ends_with(".csv"));

    let (headers, rows) = parse_csv(&read_without_bom(&files[0]), b',');
    assert_eq!(
        headers,
        vec![
            "id", "siteName", "staffName", "date", "workContent", "contractor",
            "estimateNumber", "workPeriod", "notes", "createdAt"
        ]
    );
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][2], "田中太郎 / 佐藤花子");
    assert_eq!(rows[0][3], "2024-01-15");
    assert_eq!(rows[0][5], "株式会社建設太郎");
    assert_eq!(rows[0][6], "EST-2024-001");
    assert_eq!(rows[0][7], "2024-01-15〜2024-01-20");
    assert_eq!(rows[0][8], "足場あり");
    // Dangling staff ids and missing lookups render empty
    assert_eq!(rows[2][2], "田中太郎");
    assert_eq!(rows[2][5], "");
}

#[test]
fn test_no_notes_and_staff_filter() {
    let world = TestWorld::new().with_sample_jobs();
    let out = world.out_dir();

    world
        .run_json(&[
            "export", "--no-notes", "--staff", "1", "--output-dir", out.to_str().unwrap(),
        ])
        .unwrap();

    let (_, rows) = parse_csv(&read_without_bom(&exported_files(&out)[0]), b',');
    let ids: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["1001", "1003"]);
    assert!(rows.iter().all(|r| r[8].is_empty()));
}

#[test]
fn test_tsv_uses_tabs_and_extension() {
    let world = TestWorld::new().with_sample_jobs();
    let out = world.out_dir();

    world
        .run_json(&["export", "--style", "excel", "--output-dir", out.to_str().unwrap()])
        .unwrap();

    let files = exported_files(&out);
    assert!(files[0].to_string_lossy().ends_with(".tsv"));
    let text = read_without_bom(&files[0]);
    let header = text.lines().next().unwrap();
    assert_eq!(header.split('\t').count(), 10);
    assert!(!header.contains(','));
}

#[test]
fn test_filemaker_layout_uses_configured_offset() {
    let world = TestWorld::new().with_sample_jobs();
    fs::write(world.data_dir().join("config.toml"), "utc_offset_minutes = 540\n").unwrap();
    let out = world.out_dir();

    world
        .run_json(&["export", "--filemaker", "--output-dir", out.to_str().unwrap()])
        .unwrap();

    let files = exported_files(&out);
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("案件データ_FileMaker形式_"), "unexpected name {}", name);

    let (headers, rows) = parse_csv(&read_without_bom(&files[0]), b',');
    assert_eq!(headers[0], "受注番号");
    assert_eq!(headers[9], "登録日時");
    assert_eq!(rows[0][0], "1001");
    assert_eq!(rows[0][2], "2024-01-15");
    assert_eq!(rows[0][9], "2024/1/10 9:30:00");
}

#[test]
fn test_both_datasets_as_json() {
    let world = TestWorld::new().with_sample_jobs().with_sample_staff();
    let out = world.out_dir();

    let json = world
        .run_json(&[
            "export", "--dataset", "both", "--style", "json", "--filemaker", "--output-dir",
            out.to_str().unwrap(),
        ])
        .unwrap();
    assert_eq!(json["content"]["files"].as_array().unwrap().len(), 2);

    let files = exported_files(&out);
    let staff_file = files
        .iter()
        .find(|p| p.to_string_lossy().contains("担当者データ_"))
        .expect("staff export written");
    // FileMaker naming never applies to the staff dataset
    assert!(!staff_file.to_string_lossy().contains("FileMaker"));

    let staff: serde_json::Value = serde_json::from_str(&read_without_bom(staff_file)).unwrap();
    let staff = staff.as_array().unwrap();
    assert_eq!(staff.len(), 2);
    assert_eq!(staff[0]["name"], "田中太郎");
    assert!(staff[1].get("position").is_none());
}

#[test]
fn test_empty_selection_fails_without_writing() {
    let world = TestWorld::new().with_sample_jobs();
    let out = world.out_dir();

    let result = world
        .run(&[
            "export", "--dataset", "both", "--from", "2024-01-16", "--output-dir",
            out.to_str().unwrap(),
        ])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr.contains("No data to export (案件データ)"));
    assert!(exported_files(&out).is_empty());
}

#[test]
fn test_date_range_is_inclusive_on_work_start() {
    let world = TestWorld::new().with_sample_jobs();
    let out = world.out_dir();

    world
        .run_json(&[
            "export", "--from", "2024-01-15", "--to", "2024-01-15", "--output-dir",
            out.to_str().unwrap(),
        ])
        .unwrap();

    let (_, rows) = parse_csv(&read_without_bom(&exported_files(&out)[0]), b',');
    assert_eq!(rows.len(), 3);
}
