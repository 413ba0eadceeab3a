use std::{
    io::Write,
    process::{Command, Stdio},
    thread,
};

use anyhow::{Context, Result, bail};

use super::Translate;

/// Provider that shells out to an external translator.
///
/// Arguments may contain the placeholders `{source}`, `{dest}` and `{text}`.
/// The text is also written to the program's stdin; trimmed stdout is the
/// translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandProvider {
    program: String,
    args: Vec<String>,
}

impl CommandProvider {
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let Some((program, args)) = argv.split_first() else {
            bail!("translateCommand must name a program");
        };
        if program.trim().is_empty() {
            bail!("translateCommand must name a program");
        }
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn expand_args(&self, text: &str, source_locale: &str, dest_locale: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{source}", source_locale)
                    .replace("{dest}", dest_locale)
                    .replace("{text}", text)
            })
            .collect()
    }
}

impl Translate for CommandProvider {
    fn translate(&self, text: &str, source_locale: &str, dest_locale: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(self.expand_args(text, source_locale, dest_locale))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to start `{}`", self.program))?;

        // Stdin is fed while stdout and stderr are drained.
        let stdin = child.stdin.take();
        let output = thread::scope(|scope| {
            if let Some(mut stdin) = stdin {
                // The program may exit without reading stdin; a broken pipe is not a failure.
                scope.spawn(move || {
                    let _ = stdin.write_all(text.as_bytes());
                });
            }
            child.wait_with_output()
        })
        .with_context(|| format!("failed to wait for `{}`", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("`{}` exited with {}: {}", self.program, output.status, stderr.trim());
        }

        let translated = String::from_utf8(output.stdout)
            .with_context(|| format!("`{}` produced non UTF-8 output", self.program))?;
        let translated = translated.trim();
        if translated.is_empty() {
            bail!("`{}` produced no output", self.program);
        }
        Ok(translated.to_string())
    }
}
