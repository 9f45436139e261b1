use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, TranslationServer, finish};

const POT: &str = "languages/thinkpixel-search-rag.pot";

#[test]
fn test_run_without_api_key_writes_template_and_skips() -> Result<()> {
    let test = CliTest::plugin()?;

    let mut cmd = test.run_command();
    cmd.args(["--output-dir", "languages"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ Extracted 2 strings from 2 files (version 1.1.2)
      --> languages/thinkpixel-search-rag.pot
    ⚠ Translation skipped: no API key (set OPENAI_API_KEY or pass --api-key)

    ----- stderr -----
     INFO Extracting localizable strings...
     INFO Found 2 translatable strings.
     INFO POT file saved to languages/thinkpixel-search-rag.pot
     WARN OpenAI API key not found. Skipping translation.
    ");

    let pot = test.read_file(POT)?;
    assert!(pot.contains("\"Project-Id-Version: 1.1.2\\n\""));
    assert!(pot.contains("#. a.php\nmsgid \"Hello World\"\nmsgstr \"\"\n"));
    assert!(pot.contains("#. templates/settings.php\nmsgid \"Save settings\"\n"));
    assert_eq!(pot.matches("msgid \"Hello World\"").count(), 1);
    assert!(!pot.contains("Bye"));

    for lang in ["fr", "es", "de"] {
        assert!(!test.exists(&format!("languages/thinkpixel-search-rag-{lang}.po")));
        assert!(!test.exists(&format!("languages/thinkpixel-search-rag-{lang}.mo")));
    }

    Ok(())
}

#[test]
fn test_run_with_blank_api_key_is_skipped() -> Result<()> {
    let test = CliTest::plugin()?;

    let mut cmd = test.run_command();
    cmd.env("OPENAI_API_KEY", "");
    let out = finish(cmd)?;
    assert_eq!(out.code, Some(1), "stderr: {}", out.stderr);
    assert!(test.exists(POT));

    Ok(())
}

#[test]
fn test_run_translates_every_language() -> Result<()> {
    let test = CliTest::plugin()?;
    let server = TranslationServer::start()?;

    let mut cmd = test.run_command();
    cmd.env("OPENAI_API_KEY", "sk-test");
    cmd.args(["--api-base", server.api_base(), "--delay-secs", "0"]);
    let out = finish(cmd)?;

    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Translated 2 strings into 3 languages"));
    assert!(out.stderr.contains("Translated: Hello World -> Hello World [French] [fr]"));
    assert!(test.exists(POT));

    for (lang, name) in [("fr", "French"), ("es", "Spanish"), ("de", "German")] {
        let po = test.read_file(&format!("languages/thinkpixel-search-rag-{lang}.po"))?;
        assert!(po.contains(&format!("\"Language: {lang}\\n\"")));
        assert!(po.contains(&format!(
            "msgid \"Hello World\"\nmsgstr \"Hello World [{name}]\"\n"
        )));
        assert!(po.contains(&format!(
            "msgid \"Save settings\"\nmsgstr \"Save settings [{name}]\"\n"
        )));

        let mo = std::fs::read(
            test.root()
                .join(format!("languages/thinkpixel-search-rag-{lang}.mo")),
        )?;
        let expected = format!("Save settings [{name}]");
        assert!(
            mo.windows(expected.len())
                .any(|w| w == expected.as_bytes())
        );
    }

    Ok(())
}

#[test]
fn test_run_translation_failure_keeps_template() -> Result<()> {
    let test = CliTest::plugin()?;

    // Nothing listens on the discard port, so the first request fails.
    let mut cmd = test.run_command();
    cmd.args([
        "--api-key",
        "sk-test",
        "--api-base",
        "http://127.0.0.1:9/v1",
        "--delay-secs",
        "0",
        "--languages",
        "fr",
    ]);
    let out = finish(cmd)?;

    assert_eq!(out.code, Some(2), "stderr: {}", out.stderr);
    assert!(out.stderr.contains("translating \"Hello World\" to fr failed"));
    assert!(test.exists(POT));
    assert!(!test.exists("languages/thinkpixel-search-rag-fr.po"));

    Ok(())
}

#[test]
fn test_run_missing_version_file_fails_before_writing() -> Result<()> {
    let test = CliTest::plugin()?;
    std::fs::remove_file(test.root().join(".bumpversion.cfg"))?;

    let out = finish(test.run_command())?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("config file not found"));
    assert!(!test.exists(POT));

    Ok(())
}

#[test]
fn test_run_missing_version_key_fails() -> Result<()> {
    let test = CliTest::plugin()?;
    test.write_file(".bumpversion.cfg", "[bumpversion]\ncommit = True\n")?;

    let out = finish(test.run_command())?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("current_version not found in section [bumpversion]"));
    assert!(!test.exists(POT));

    Ok(())
}

#[test]
fn test_run_missing_source_root_fails() -> Result<()> {
    let test = CliTest::plugin()?;

    let mut cmd = test.run_command();
    cmd.args(["--source-root", "does-not-exist"]);
    let out = finish(cmd)?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("source directory not found"));

    Ok(())
}
