use anyhow::Result;
use insta::assert_snapshot;
use serde_json::json;

use crate::{CliTest, run_expecting};

#[test]
fn test_extract_en_only_mods() -> Result<()> {
    let test = CliTest::new()?;
    test.write_archive(
        "mods/a.jar",
        &[
            ("assets/shared/lang/en_us.json", r#"{"x":"1","from_a":"A"}"#),
            ("assets/translated/lang/en_us.json", r#"{"k":"v"}"#),
            ("assets/translated/lang/zh_cn.json", r#"{"k":"v"}"#),
        ],
    )?;
    test.write_archive(
        "mods/b.jar",
        &[("assets/shared/lang/en_us.json", r#"{"x":"2"}"#)],
    )?;
    run_expecting(&mut test.scan_command(), 0)?;

    let stdout = run_expecting(&mut test.extract_command(), 0)?;
    assert!(stdout.contains("Extracted 2 of 2 en_us-only mods"));

    // b.jar sorts after a.jar, so its value wins.
    assert_eq!(
        test.read_json("out/en-only-merged.json")?,
        json!({ "shared": { "x": "2", "from_a": "A" } })
    );
    assert_eq!(
        test.read_json("out/en-only-per-mod/shared.json")?,
        json!({ "x": "2" })
    );
    assert!(!test.root().join("out/en-only-per-mod/translated.json").exists());

    assert_snapshot!(test.read_file("out/en-only-stats.csv")?, @r"
    modid,jar,keyCount
    shared,a.jar,2
    shared,b.jar,1
    ");
    assert_snapshot!(test.read_file("out/en-only-errors.csv")?, @"jar,modid,reason,detail");
    assert_snapshot!(test.read_file("out/todo-en-only.csv")?, @r"
    jar,modid
    a.jar,shared
    b.jar,shared
    ");

    Ok(())
}

#[test]
fn test_extract_missing_archive_is_recorded() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir(test.root().join("mods"))?;
    test.write_file(
        "out/lang-report.json",
        r#"[{"jar":"gone.jar","modid":"gone","en_us":true,"zh_cn":false,"zh_tw":false}]"#,
    )?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 error recorded"));
    let errors = test.read_file("out/en-only-errors.csv")?;
    assert!(errors.starts_with("jar,modid,reason,detail\ngone.jar,gone,missing_archive,"));
    assert!(errors.contains("gone.jar"));
    Ok(())
}

#[test]
fn test_extract_bad_json_preserves_raw_text() -> Result<()> {
    let test = CliTest::new()?;
    let raw = "{\n  \"item.broken\": \"Broken\",\n  trailing garbage\n";
    test.write_archive("mods/broken.jar", &[("assets/broken/lang/en_us.json", raw)])?;
    run_expecting(&mut test.scan_command(), 0)?;

    run_expecting(&mut test.extract_command(), 0)?;

    assert_eq!(test.read_file("out/en-only-raw/broken.en_us.raw.txt")?, raw);
    let errors = test.read_file("out/en-only-errors.csv")?;
    assert!(errors.contains("broken.jar,broken,bad_json,"));
    assert_eq!(test.read_json("out/en-only-merged.json")?, json!({}));
    Ok(())
}

#[test]
fn test_extract_missing_report_fails() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir(test.root().join("mods"))?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read report"));
    Ok(())
}

#[test]
fn test_extract_write_failure_is_recorded() -> Result<()> {
    let test = CliTest::new()?;
    test.write_archive(
        "mods/a.jar",
        &[
            ("assets/blocked/lang/en_us.json", r#"{"k":"v"}"#),
            ("assets/ok/lang/en_us.json", r#"{"k":"w"}"#),
        ],
    )?;
    run_expecting(&mut test.scan_command(), 0)?;
    std::fs::create_dir_all(test.root().join("out/en-only-per-mod/blocked.json"))?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 error recorded"));
    let errors = test.read_file("out/en-only-errors.csv")?;
    assert!(errors.contains("a.jar,blocked,write_failed,"));
    assert_eq!(test.read_json("out/en-only-per-mod/ok.json")?, json!({ "k": "w" }));
    assert!(test.root().join("out/en-only-merged.json").exists());
    assert!(test.root().join("out/todo-en-only.csv").exists());
    Ok(())
}
