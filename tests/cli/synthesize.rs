use anyhow::Result;
use serde_json::json;

use crate::{CliTest, run_expecting};

fn setup_mod1(test: &CliTest) -> Result<()> {
    test.write_archive(
        "mods/mod1.jar",
        &[
            ("assets/mod1/lang/en_us.json", r#"{"item.foo":"Bicycle"}"#),
            (
                "assets/mod1/lang/zh_cn.json",
                r#"{"item.foo":"自行车","item.count":3,"item.tags":["a"]}"#,
            ),
        ],
    )?;
    run_expecting(&mut test.scan_command(), 0)?;
    Ok(())
}

#[test]
fn test_synthesize_generates_zh_tw() -> Result<()> {
    let test = CliTest::new()?;
    setup_mod1(&test)?;

    let report = test.read_json("out/lang-report.json")?;
    assert_eq!(report[0]["zh_cn"], true);
    assert_eq!(report[0]["zh_tw"], false);

    let stdout = run_expecting(test.synthesize_command().args(["--mode", "tw"]), 0)?;
    assert!(stdout.contains("converted 1, skipped existing 0, failed 0"));

    let zh_tw = test.read_json("pack/assets/mod1/lang/zh_tw.json")?;
    assert_eq!(zh_tw["item.foo"], "自行車");
    assert_eq!(zh_tw["item.count"], 3);
    assert_eq!(zh_tw["item.tags"], json!(["a"]));
    assert_eq!(zh_tw.as_object().unwrap().len(), 3);

    Ok(())
}

#[test]
fn test_synthesize_default_mode_converts_values() -> Result<()> {
    let test = CliTest::new()?;
    setup_mod1(&test)?;

    let stdout = run_expecting(&mut test.synthesize_command(), 0)?;
    assert!(stdout.contains("(twp)"));

    let zh_tw = test.read_json("pack/assets/mod1/lang/zh_tw.json")?;
    let value = zh_tw["item.foo"].as_str().unwrap();
    assert!(!value.is_empty());
    assert_ne!(value, "自行车");
    Ok(())
}

#[test]
fn test_synthesize_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    setup_mod1(&test)?;

    run_expecting(&mut test.synthesize_command(), 0)?;
    let first = test.read_file("pack/assets/mod1/lang/zh_tw.json")?;

    let stdout = run_expecting(&mut test.synthesize_command(), 0)?;
    assert!(stdout.contains("converted 0, skipped existing 1, failed 0"));
    assert_eq!(test.read_file("pack/assets/mod1/lang/zh_tw.json")?, first);
    Ok(())
}

#[test]
fn test_synthesize_keeps_curated_translation() -> Result<()> {
    let test = CliTest::new()?;
    setup_mod1(&test)?;
    test.write_file("pack/assets/mod1/lang/zh_tw.json", r#"{"item.foo":"腳踏車"}"#)?;

    let stdout = run_expecting(&mut test.synthesize_command(), 0)?;

    assert!(stdout.contains("skipped existing 1"));
    assert_eq!(
        test.read_file("pack/assets/mod1/lang/zh_tw.json")?,
        r#"{"item.foo":"腳踏車"}"#
    );
    Ok(())
}

#[test]
fn test_synthesize_missing_archive_still_succeeds() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir(test.root().join("mods"))?;
    test.write_file(
        "out/lang-report.json",
        r#"[
            {"jar":"gone.jar","modid":"gone","en_us":true,"zh_cn":true,"zh_tw":false},
            {"jar":"gone.jar","modid":"english","en_us":true,"zh_cn":false,"zh_tw":false}
        ]"#,
    )?;

    let output = test.synthesize_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("failed 1"));
    let errors = test.read_file("out/zh_tw-errors.csv")?;
    assert!(errors.contains("gone.jar,gone,missing_archive,"));
    assert_eq!(
        test.read_file("out/todo-en-only.csv")?,
        "jar,modid\ngone.jar,english\n"
    );
    assert!(!test.root().join("pack/assets/gone").exists());
    Ok(())
}

#[test]
fn test_synthesize_rejects_unknown_mode() -> Result<()> {
    let test = CliTest::new()?;
    setup_mod1(&test)?;

    let output = test.synthesize_command().args(["--mode", "hk"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.root().join("pack").exists());
    Ok(())
}
