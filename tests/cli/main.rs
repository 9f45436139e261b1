use std::{
    fs,
    io::{BufRead, BufReader, Read, Write},
    net::{TcpListener, TcpStream},
    path::{Path, PathBuf},
    process::{Command, Output},
    thread,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde_json::{Value, json};
use tempfile::TempDir;

mod extract;
mod run;
mod translate;

const BIN_NAME: &str = "l10n";

pub const VERSION_FILE: &str = "[bumpversion]\ncurrent_version = 1.1.2\ncommit = True\ntag = True\n";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    /// Empty project; the `.git` marker stops config lookup at the project root.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir_all(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// A small plugin with a version file and a fixed slug.
    pub fn plugin() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(".l10nrc.json", r#"{ "pluginSlug": "thinkpixel-search-rag" }"#)?;
        test.write_file(".bumpversion.cfg", VERSION_FILE)?;
        test.write_file(
            "a.php",
            "<?php\n__('Hello World', Strings::Domain);\n__('Bye', OtherDomain);\n",
        )?;
        test.write_file(
            "templates/settings.php",
            "<p><?php esc_html_e('Hello World', Strings::Domain); ?></p>\n\
             <p><?php esc_html_e('Save settings', Strings::Domain); ?></p>\n",
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn init_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("init");
        cmd
    }

    pub fn run_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("run");
        cmd
    }

    pub fn extract_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("extract");
        cmd
    }

    pub fn translate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("translate");
        cmd
    }

    pub fn compile_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("compile");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }
}

/// Finished process with decoded output.
pub struct Finished {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub fn finish(mut cmd: Command) -> Result<Finished> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output().context("Failed to spawn l10n")?;
    Ok(Finished {
        code: status.code(),
        stdout: String::from_utf8(stdout)?,
        stderr: String::from_utf8(stderr)?,
    })
}

/// Local stand-in for the chat-completions endpoint. Every request is
/// answered with `"{text} [{language}]"`.
pub struct TranslationServer {
    api_base: String,
}

impl TranslationServer {
    pub fn start() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let api_base = format!("http://{}/v1", listener.local_addr()?);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let _ = answer(stream);
            }
        });
        Ok(Self { api_base })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

fn answer(mut stream: TcpStream) -> Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut length = 0;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':')
            && name.eq_ignore_ascii_case("content-length")
        {
            length = value.trim().parse()?;
        }
    }
    let mut body = vec![0; length];
    reader.read_exact(&mut body)?;

    let request: Value = serde_json::from_slice(&body)?;
    let text = request["messages"][1]["content"].as_str().unwrap_or_default();
    let language = request["messages"][0]["content"]
        .as_str()
        .and_then(|instruction| instruction.split("text to ").nth(1))
        .and_then(|rest| rest.split(',').next())
        .unwrap_or_default();
    let reply = json!({
        "choices": [
            { "message": { "role": "assistant", "content": format!("{text} [{language}]") } }
        ]
    })
    .to_string();

    write!(
        stream,
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
         content-length: {}\r\nconnection: close\r\n\r\n{reply}",
        reply.len()
    )?;
    Ok(())
}
