use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run_expecting};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let stdout = run_expecting(test.command().arg("init"), 0)?;
    assert!(stdout.contains("Created .modlangrc.json"));

    let content = test.read_file(".modlangrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["archiveExtension"], "jar");
    assert_eq!(parsed["outDir"], "out");
    assert_eq!(parsed["mode"], "twp");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".modlangrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
    assert_eq!(test.read_file(".modlangrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    run_expecting(test.command().arg("init"), 0)?;
    test.write_archive("mods/a.jar", &[("assets/a/lang/en_us.json", "{}")])?;

    run_expecting(test.command().args(["scan", "--mods", "mods"]), 0)?;

    assert!(test.root().join("out/lang-report.json").exists());
    Ok(())
}
