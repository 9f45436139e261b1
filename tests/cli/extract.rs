use anyhow::Result;

use crate::{CliTest, finish};

#[test]
fn test_extract_writes_template_only() -> Result<()> {
    let test = CliTest::plugin()?;

    let out = finish(test.extract_command())?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stderr.contains("Found 2 translatable strings."));
    assert!(test.exists("languages/thinkpixel-search-rag.pot"));
    assert!(!out.stderr.contains("Skipping translation"));

    Ok(())
}

#[test]
fn test_extract_is_repeatable() -> Result<()> {
    let test = CliTest::plugin()?;

    finish(test.extract_command())?;
    let strip_date = |s: String| -> String {
        s.lines()
            .filter(|l| !l.starts_with("\"POT-Creation-Date"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let first = strip_date(test.read_file("languages/thinkpixel-search-rag.pot")?);
    finish(test.extract_command())?;
    let second = strip_date(test.read_file("languages/thinkpixel-search-rag.pot")?);
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_extract_with_custom_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".l10nrc.json",
        r#"{
            "pluginSlug": "shop",
            "sourceRoot": "plugin",
            "versionFile": "plugin/.bumpversion.cfg",
            "ignores": ["vendor/**"],
            "domainToken": "'shop'",
            "outputDir": "i18n"
        }"#,
    )?;
    test.write_file("plugin/.bumpversion.cfg", crate::VERSION_FILE)?;
    test.write_file(
        "plugin/cart.php",
        "<?php __('Cart', 'shop'); __('Checkout', Strings::Domain);",
    )?;
    test.write_file("plugin/vendor/lib.php", "<?php __('Vendored', 'shop');")?;

    let out = finish(test.extract_command())?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("1 file ignored"));

    let pot = test.read_file("i18n/shop.pot")?;
    assert!(pot.contains("msgid \"Cart\""));
    assert!(!pot.contains("Checkout"));
    assert!(!pot.contains("Vendored"));

    Ok(())
}

#[test]
fn test_extract_cli_paths_override_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/.bumpversion.cfg", crate::VERSION_FILE)?;
    test.write_file("src/plugin.php", "<?php _e('Hi', Strings::Domain);")?;

    let mut cmd = test.extract_command();
    cmd.args([
        "--source-root",
        "src",
        "--version-file",
        "src/.bumpversion.cfg",
        "--pot-file",
        "out/template.pot",
    ]);
    let out = finish(cmd)?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(test.read_file("out/template.pot")?.contains("msgid \"Hi\""));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".l10nrc.json", r#"{ "languages": [] }"#)?;

    let out = finish(test.extract_command())?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("'languages' must list at least one target language"));

    Ok(())
}
