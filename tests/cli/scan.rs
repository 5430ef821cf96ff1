use anyhow::Result;
use insta::assert_snapshot;
use serde_json::json;

use crate::{CliTest, run_expecting};

fn setup_mods(test: &CliTest) -> Result<()> {
    test.write_archive(
        "mods/alpha.jar",
        &[
            ("assets/alpha/lang/en_us.json", r#"{"item.alpha":"Alpha"}"#),
            ("assets/alpha/lang/zh_cn.json", r#"{"item.alpha":"阿尔法"}"#),
        ],
    )?;
    test.write_archive(
        "mods/beta.jar",
        &[
            ("assets/beta/lang/en_us.json", r#"{"item.beta":"Beta"}"#),
            ("assets/beta_addon/lang/en_us.json", "{}"),
            ("assets/beta_addon/lang/zh_tw.json", "{}"),
        ],
    )?;
    test.write_archive("mods/library.jar", &[("META-INF/MANIFEST.MF", "")])?;
    test.write_file("mods/corrupt.jar", "this is not a zip")?;
    test.write_file("mods/readme.txt", "ignored")?;
    Ok(())
}

#[test]
fn test_scan_writes_report() -> Result<()> {
    let test = CliTest::new()?;
    setup_mods(&test)?;

    let stdout = run_expecting(&mut test.scan_command(), 0)?;
    assert!(stdout.contains("Scanned 4 archives: 4 rows, 1 with zh_cn, 1 with zh_tw, 1 only en_us"));

    let report = test.read_json("out/lang-report.json")?;
    let rows = report.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[0],
        json!({
            "jar": "alpha.jar",
            "modid": "alpha",
            "en_us": true,
            "zh_cn": true,
            "zh_tw": false
        })
    );
    assert_eq!(rows[3]["jar"], "corrupt.jar");
    assert_eq!(rows[3]["modid"], "(error)");
    assert!(rows[3]["error"].is_string());
    assert!(!rows.iter().any(|r| r["jar"] == "library.jar"));

    assert_snapshot!(test.read_file("out/lang-report.csv")?, @r"
    jar,modid,en_us,zh_cn,zh_tw
    alpha.jar,alpha,1,1,0
    beta.jar,beta,1,0,0
    beta.jar,beta_addon,1,0,1
    corrupt.jar,(error),0,0,0
    ");

    assert_eq!(
        test.read_json("out/summary.json")?,
        json!({ "totalRows": 4, "hasZhCn": 1, "hasZhTw": 1, "onlyEn": 1 })
    );

    Ok(())
}

#[test]
fn test_scan_empty_dir() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir(test.root().join("mods"))?;

    run_expecting(&mut test.scan_command(), 0)?;

    assert_eq!(test.read_json("out/lang-report.json")?, json!([]));
    Ok(())
}

#[test]
fn test_scan_missing_mods_dir_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Mods directory not found"));
    Ok(())
}

#[test]
fn test_scan_without_mods_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("scan").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--mods <DIR>"));
    assert!(stderr.contains("Usage"));
    Ok(())
}

#[test]
fn test_scan_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".modlangrc.json",
        r#"{ "archiveExtension": "zip", "ignores": ["skip-*"], "outDir": "reports" }"#,
    )?;
    test.write_archive("mods/keep.zip", &[("assets/keep/lang/en_us.json", "{}")])?;
    test.write_archive("mods/skip-me.zip", &[("assets/skip/lang/en_us.json", "{}")])?;
    test.write_archive("mods/other.jar", &[("assets/other/lang/en_us.json", "{}")])?;

    run_expecting(test.command().args(["scan", "--mods", "mods"]), 0)?;

    let report = test.read_json("reports/lang-report.json")?;
    let modids: Vec<&str> = report
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["modid"].as_str().unwrap())
        .collect();
    assert_eq!(modids, vec!["keep"]);
    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".modlangrc.json", r#"{ "ignores": ["[broken"] }"#)?;
    std::fs::create_dir(test.root().join("mods"))?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ignores"));
    Ok(())
}
