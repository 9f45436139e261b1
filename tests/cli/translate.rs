use anyhow::Result;

use crate::{CliTest, finish};

#[test]
fn test_translate_without_template_fails() -> Result<()> {
    let test = CliTest::plugin()?;

    let out = finish(test.translate_command())?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("template catalog not found"));

    Ok(())
}

#[test]
fn test_translate_existing_template_without_key_is_skipped() -> Result<()> {
    let test = CliTest::plugin()?;
    finish(test.extract_command())?;

    let out = finish(test.translate_command())?;
    assert_eq!(out.code, Some(1), "stderr: {}", out.stderr);
    assert!(out.stderr.contains("Loaded 2 strings"));
    assert!(!test.exists("languages/thinkpixel-search-rag-fr.po"));

    Ok(())
}

#[test]
fn test_translate_rejects_invalid_language() -> Result<()> {
    let test = CliTest::plugin()?;
    finish(test.extract_command())?;

    let mut cmd = test.translate_command();
    cmd.args(["--languages", "fr,../x"]);
    let out = finish(cmd)?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Unsupported target language"));

    Ok(())
}
