use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .locovrc.json

    ----- stderr -----
    ");

    assert_snapshot!(test.read_file(".locovrc.json")?, @r#"
    {
      "localesDir": "./locales",
      "referenceLocale": "en",
      "extensions": [
        "yaml",
        "yml"
      ],
      "ignores": [],
      "detailThreshold": 50.0
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locovrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .locovrc.json already exists
    ");
    assert_eq!(test.read_file(".locovrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").status()?;

    test.write_file("locales/en.yaml", "hello: Hello\n")?;
    test.write_file("locales/fr.yaml", "hello: Bonjour\n")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Reference: en.yaml (1 key)

    Locale coverage:
    --------------------------------------------------
    fr.yaml         100.0% (missing 0 keys)
    --------------------------------------------------

    ✓ Checked 2 locale files - no issues found

    ----- stderr -----
    ");

    Ok(())
}
