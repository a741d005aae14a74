use std::{
    path::{Path, PathBuf},
    process::Command,
};

fn write_credits_doc(dir: &Path) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join("credits.json");
    let doc = serde_json::json!({
        "title": "My Film",
        "final_message": "Thank you for watching",
        "columns": ["Section", "Role", "Name"],
        "rows": [
            ["Cast", "Lead", "Alice"],
            ["Cast", "Support", "Bob"],
            ["Crew", "Director", "Carol"]
        ]
    });
    std::fs::write(&path, serde_json::to_vec_pretty(&doc).unwrap()).unwrap();
    path
}

#[test]
fn cli_build_prints_grouped_entries() {
    let dir = PathBuf::from("target").join("cli_smoke_build");
    let doc_path = write_credits_doc(&dir);

    let out = Command::new(env!("CARGO_BIN_EXE_endroll"))
        .args(["build", "--in"])
        .arg(&doc_path)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let table: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let entries = table["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["kind"], "section");
    assert_eq!(entries[0]["title"], "Cast");
    assert_eq!(entries[1]["kind"], "line");
    assert_eq!(table["final_message"], "Thank you for watching");
}

#[test]
fn cli_plan_emits_stop_at_message_plan() {
    let dir = PathBuf::from("target").join("cli_smoke_plan");
    let doc_path = write_credits_doc(&dir);

    let out = Command::new(env!("CARGO_BIN_EXE_endroll"))
        .args(["plan", "--in"])
        .arg(&doc_path)
        .args([
            "--viewport-height",
            "1000",
            "--content-height",
            "4000",
            "--message-top",
            "3000",
            "--message-height",
            "100",
            "--seconds-per-screen",
            "2",
        ])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let plan: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(plan["end_offset_px"], -2550.0);
    assert_eq!(plan["ease_point_percent"], 90.0);
    assert_eq!(plan["timing"], "EaseOut");
}

#[test]
fn cli_plan_css_output_contains_keyframes() {
    let dir = PathBuf::from("target").join("cli_smoke_css");
    let doc_path = write_credits_doc(&dir);

    let out = Command::new(env!("CARGO_BIN_EXE_endroll"))
        .args(["plan", "--in"])
        .arg(&doc_path)
        .args([
            "--viewport-height",
            "1000",
            "--content-height",
            "4000",
            "--message-top",
            "3000",
            "--message-height",
            "100",
            "--css",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());

    let css = String::from_utf8(out.stdout).unwrap();
    assert!(css.contains("@keyframes credits-scroll"));
    assert!(css.contains("translateY(-2550.00px)"));
    assert!(css.contains("ease-out forwards"));
}

#[test]
fn cli_plan_rejects_lone_message_flag() {
    let dir = PathBuf::from("target").join("cli_smoke_bad_flags");
    let doc_path = write_credits_doc(&dir);

    let out = Command::new(env!("CARGO_BIN_EXE_endroll"))
        .args(["plan", "--in"])
        .arg(&doc_path)
        .args(["--viewport-height", "1000", "--content-height", "4000"])
        .args(["--message-top", "3000"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}
