use sitecal_testing::TestWorld;
use sitecal_testing::assertions::day_cell;

#[test]
fn test_default_roster_until_first_save() {
    let world = TestWorld::new();

    let json = world.run_json(&["staff", "list"]).unwrap();
    let members = json["content"]["members"].as_array().unwrap();
    assert_eq!(members.len(), 5);
    assert_eq!(members[0]["name"], "田中太郎");
    assert_eq!(members[0]["hex"], "#3b82f6");
    assert!(world.read_collection("staff").unwrap().is_null());
}

#[test]
fn test_add_appends_and_persists() {
    let world = TestWorld::new();

    let json = world
        .run_json(&[
            "staff", "add", "--name", "新人", "--color", "bg-red-500", "--position", "見習い",
        ])
        .unwrap();
    assert_eq!(json["badge"]["level"], "success");
    assert_eq!(json["content"]["name"], "新人");

    let stored = world.read_collection("staff").unwrap();
    let members = stored.as_array().unwrap();
    assert_eq!(members.len(), 6);
    assert_eq!(members[5]["position"], "見習い");
}

#[test]
fn test_add_validates_name_and_color() {
    let world = TestWorld::new();

    let bad_color = world
        .run(&["staff", "add", "--name", "X", "--color", "purple"])
        .unwrap();
    assert!(!bad_color.success());
    assert!(bad_color.stderr.contains("Unknown color"));

    let no_name = world.run(&["staff", "add", "--name", " "]).unwrap();
    assert!(!no_name.success());
    assert!(no_name.stderr.contains("名前を入力してください"));
}

#[test]
fn test_edit_clears_optional_field() {
    let world = TestWorld::new().with_sample_staff();

    let json = world
        .run_json(&["staff", "edit", "1", "--position", "", "--color", "#ff0000"])
        .unwrap();
    assert!(json["content"]["position"].is_null());
    assert_eq!(json["content"]["hex"], "#ff0000");
    assert_eq!(json["content"]["name"], "田中太郎");
}

#[test]
fn test_remove_warns_about_assigned_jobs_and_drops_bands() {
    let world = TestWorld::new().with_sample_jobs().with_sample_staff();

    let json = world.run_json(&["staff", "remove", "2"]).unwrap();
    assert_eq!(json["badge"]["level"], "warning");
    assert_eq!(json["content"]["assigned_jobs"], 1);

    // The job keeps the id; the calendar just stops drawing that member
    let stored = world.read_collection("projects").unwrap();
    assert_eq!(stored[0]["selectedStaff"], serde_json::json!(["1", "2"]));

    let calendar = world
        .run_json(&["calendar", "--year", "2024", "--month", "1"])
        .unwrap();
    let bands = day_cell(&calendar, 15).unwrap()["entries"][0]["bands"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(bands.len(), 1);
    // Both ids were assigned, so the name suffix stays
    assert_eq!(bands[0]["label"], "A現場 (田中太郎)");
}

#[test]
fn test_remove_unknown_id_fails() {
    let world = TestWorld::new();
    let result = world.run(&["staff", "remove", "nobody"]).unwrap();
    assert!(!result.success());
}

#[test]
fn test_colors_lists_palette() {
    let world = TestWorld::new();
    let json = world.run_json(&["staff", "colors"]).unwrap();
    let swatches = json["content"]["swatches"].as_array().unwrap();
    assert_eq!(swatches.len(), 10);
    assert_eq!(swatches[0]["value"], "bg-blue-500");
}
