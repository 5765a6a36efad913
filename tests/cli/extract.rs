use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const FTL_CONFIG: &str = r#"
locales = ["de", "fr"]

[[paths]]
reference = "en-US/**/*.ftl"
l10n = "{l10n_base}/{locale}/**/*.ftl"
"#;

fn greeting_project() -> Result<CliTest> {
    let test = CliTest::with_config(FTL_CONFIG)?;
    test.write_file("en-US/greeting.ftl", "hello = Hello\nbye = Goodbye\n")?;
    test.write_file("fr/greeting.ftl", "hello = Bonjour\nbye = Au revoir\n")?;
    test.write_file("de/greeting.ftl", "hello = Hallo\n")?;
    Ok(test)
}

#[test]
fn test_complete_and_partial_locales() -> Result<()> {
    let test = greeting_project()?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.output_files()?, vec!["greeting.json"]);
    assert_snapshot!(test.read_file("out/greeting.json")?, @r#"
    {
      "translations": {
        "en-US": {
          "bye": "Goodbye",
          "hello": "Hello"
        },
        "fr": {
          "bye": "Au revoir",
          "hello": "Bonjour"
        }
      },
      "complete_locales": [
        "en-US",
        "fr"
      ]
    }
    "#);

    Ok(())
}

#[test]
fn test_progress_output() -> Result<()> {
    let test = greeting_project()?;

    let output = test.extract_command().output()?;
    let out = stdout(&output);

    assert!(out.contains("Extracting strings for locale: de."));
    assert!(out.contains("  1 string extracted from 1 file"));
    assert!(out.contains("Extracting strings for locale: fr."));
    assert!(out.contains("  2 strings extracted from 1 file"));
    assert!(out.contains("Wrote 1 of 1 experiment (1 reference file)"));
    assert!(out.contains("greeting -> en-US, fr"));

    Ok(())
}

#[test]
fn test_reference_only_experiment_not_written() -> Result<()> {
    let test = greeting_project()?;
    test.write_file("en-US/untranslated.ftl", "title = Only English\n")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    assert_eq!(test.output_files()?, vec!["greeting.json"]);

    Ok(())
}

#[test]
fn test_nothing_complete() -> Result<()> {
    let test = CliTest::with_config(FTL_CONFIG)?;
    test.write_file("en-US/greeting.ftl", "hello = Hello\nbye = Goodbye\n")?;
    test.write_file("fr/greeting.ftl", "hello = Bonjour\n")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    assert!(test.output_files()?.is_empty());
    assert!(stdout(&output).contains("nothing written"));

    Ok(())
}

#[test]
fn test_missing_localized_file_does_not_abort() -> Result<()> {
    let test = greeting_project()?;
    test.write_file("en-US/menu.ftl", "open = Open\n")?;
    test.write_file("de/menu.ftl", "open = Öffnen\n")?;
    // fr has no menu.ftl

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.output_files()?, vec!["greeting.json", "menu.json"]);
    assert_snapshot!(test.read_file("out/menu.json")?, @r#"
    {
      "translations": {
        "de": {
          "open": "Öffnen"
        },
        "en-US": {
          "open": "Open"
        }
      },
      "complete_locales": [
        "de",
        "en-US"
      ]
    }
    "#);

    Ok(())
}

#[test]
fn test_obsolete_strings_dropped() -> Result<()> {
    let test = CliTest::with_config(FTL_CONFIG)?;
    test.write_file("en-US/greeting.ftl", "hello = Hello\n")?;
    test.write_file("fr/greeting.ftl", "hello = Bonjour\nremoved = Supprimé\n")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let content = test.read_file("out/greeting.json")?;
    assert!(!content.contains("removed"));
    assert!(content.contains("Bonjour"));

    Ok(())
}

#[test]
fn test_same_base_name_merges_into_one_experiment() -> Result<()> {
    let test = CliTest::with_config(FTL_CONFIG)?;
    test.write_file("en-US/a/shared.ftl", "one = One\n")?;
    test.write_file("en-US/b/shared.ftl", "two = Two\n")?;
    test.write_file("fr/a/shared.ftl", "one = Un\n")?;
    test.write_file("fr/b/shared.ftl", "two = Deux\n")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    assert_eq!(test.output_files()?, vec!["shared.json"]);
    let content = test.read_file("out/shared.json")?;
    assert!(content.contains(r#""one": "Un""#));
    assert!(content.contains(r#""two": "Deux""#));

    Ok(())
}

#[test]
fn test_runs_are_byte_identical() -> Result<()> {
    let test = greeting_project()?;

    assert!(test.extract_command().output()?.status.success());
    let first = test.read_file("out/greeting.json")?;

    assert!(test.extract_command().output()?.status.success());
    let second = test.read_file("out/greeting.json")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_custom_reference_locale() -> Result<()> {
    let test = CliTest::with_config(
        r#"
locales = ["en", "fr"]

[[paths]]
reference = "de/*.ftl"
l10n = "{locale}/*.ftl"
"#,
    )?;
    test.write_file("de/app.ftl", "title = Titel\n")?;
    test.write_file("en/app.ftl", "title = Title\n")?;

    let output = test
        .command()
        .args(["--toml", "l10n.toml", "--ref", "de", "--dest", "out"])
        .output()?;
    assert!(output.status.success());

    let content = test.read_file("out/app.json")?;
    assert!(content.contains(r#""de": {"#));
    assert!(content.contains(r#""en": {"#));
    assert!(!content.contains(r#""fr""#));

    Ok(())
}

#[test]
fn test_no_locales() -> Result<()> {
    let test = CliTest::with_config(
        r#"
[[paths]]
reference = "en-US/*.ftl"
l10n = "{locale}/*.ftl"
"#,
    )?;
    test.write_file("en-US/app.ftl", "title = Title\n")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("No locales defined in the project configuration."));
    assert!(test.output_files()?.is_empty());

    Ok(())
}

#[test]
fn test_missing_destination() -> Result<()> {
    let test = greeting_project()?;

    let output = test
        .command()
        .args(["--toml", "l10n.toml", "--dest", "missing"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Destination directory"));
    assert!(!test.root().join("missing").exists());

    Ok(())
}

#[test]
fn test_missing_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["--toml", "nope.toml", "--dest", "."])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Project configuration not found"));

    Ok(())
}

#[test]
fn test_required_arguments() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--toml", "l10n.toml"]).output()?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--dest"));

    Ok(())
}

#[test]
fn test_verbose_logs_skipped_files() -> Result<()> {
    let test = greeting_project()?;
    test.write_file("en-US/menu.ftl", "open = Open\n")?;

    let output = test
        .command()
        .args(["--toml", "l10n.toml", "--dest", "out", "-v"])
        .output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("File not available in localization"));

    Ok(())
}
