use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const CONTENT: &str = "\
# settings page
settings:
  title: \"Settings\"
  empty: {}
  about: |
    first line
    second line
'quoted key': value
menu:
";

#[test]
fn test_keys_lists_leaf_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.yaml", CONTENT)?;

    assert_cmd_snapshot!(test.keys_command().arg("en.yaml"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    settings.title
    settings.empty
    settings.about
    quoted key
    menu

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_keys_with_values() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.yaml", CONTENT)?;

    assert_cmd_snapshot!(test.keys_command().args(["en.yaml", "--values"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    settings.title = "Settings"
    settings.empty = {}
    settings.about = "first line\nsecond line"
    quoted key = "value"
    menu = {}

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_keys_dotted_collision_listed_once() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.yaml", "a.b: flat\na:\n  b: nested\n")?;

    assert_cmd_snapshot!(test.keys_command().arg("en.yaml"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    a.b

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_keys_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.keys_command().arg("nope.yaml"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to read nope.yaml: No such file or directory (os error 2)
    ");

    Ok(())
}
