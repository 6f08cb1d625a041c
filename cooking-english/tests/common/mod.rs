//! Shared integration-test harness: lays out a content directory in a
//! tempdir and runs the `cooking-english` binary against it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::TempDir;

/// A scratch site with `content/` and `docs/` under one tempdir.
pub struct Site {
    dir: TempDir,
}

impl Site {
    /// Creates a site with an empty `content/` directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        let site = Self::without_content();
        fs::create_dir_all(site.content()).expect("create content dir");
        site
    }

    /// Creates a site with no `content/` directory at all.
    #[allow(clippy::missing_panics_doc)]
    pub fn without_content() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create tempdir"),
        }
    }

    pub fn content(&self) -> PathBuf {
        self.dir.path().join("content")
    }

    pub fn docs(&self) -> PathBuf {
        self.dir.path().join("docs")
    }

    /// Writes `doc` as `content/day{day}.json`.
    #[allow(clippy::missing_panics_doc)]
    pub fn write_day(&self, day: u32, doc: &Value) {
        let body = serde_json::to_string_pretty(doc).expect("serialize fixture");
        self.write_raw(day, &body);
    }

    /// Writes `body` verbatim as `content/day{day}.json`.
    #[allow(clippy::missing_panics_doc)]
    pub fn write_raw(&self, day: u32, body: &str) {
        fs::write(self.content().join(format!("day{day}.json")), body)
            .expect("write fixture");
    }

    /// Reads a generated page.
    #[allow(clippy::missing_panics_doc)]
    pub fn page(&self, name: &str) -> String {
        fs::read_to_string(self.docs().join(name))
            .unwrap_or_else(|e| panic!("read {name}: {e}"))
    }

    pub fn has_page(&self, name: &str) -> bool {
        self.docs().join(name).is_file()
    }

    /// Runs the binary with `--content`/`--output` pointed at this site.
    #[allow(clippy::missing_panics_doc)]
    pub fn build(&self, extra: &[&str]) -> Run {
        let output = command(&self.content(), &self.docs())
            .args(extra)
            .output()
            .expect("failed to spawn cooking-english");
        Run::from(output)
    }
}

/// Binary invocation with the environment cleared of overrides.
fn command(content: &Path, docs: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cooking-english"));
    cmd.arg("--content")
        .arg(content)
        .arg("--output")
        .arg(docs)
        .env_remove("COOKING_ENGLISH_CONTENT")
        .env_remove("COOKING_ENGLISH_OUTPUT")
        .env_remove("COOKING_ENGLISH_TRUSTED_CONTENT")
        .env_remove("COOKING_ENGLISH_STRICT")
        .env_remove("COOKING_ENGLISH_LOG_LEVEL")
        .env("NO_COLOR", "1");
    cmd
}

/// Captured result of one run.
pub struct Run {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for Run {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// A complete, valid lesson document.
pub fn lesson(title: &str) -> Value {
    json!({
        "recipe": {
            "title": title,
            "intro": "Simple and tasty.",
            "ingredients": "2 eggs, salt",
            "steps": ["**Crack** the eggs.", "Whisk well."]
        },
        "recipe_vocab": [{"word": "whisk", "meaning": "泡立てる"}],
        "review": {
            "restaurant": "Egg Bar",
            "location": "Melbourne",
            "stars": 4,
            "content": "Fluffy omelettes."
        },
        "review_vocab": [{"word": "fluffy", "meaning": "ふわふわ"}],
        "quiz1": {"question": "What do you crack?", "options": ["eggs", "rice"], "correct": 0},
        "quiz2": {"question": "Fluffy means?", "options": ["硬い", "ふわふわ"], "correct": 1},
        "quiz3": {"question": "Serve means?", "options": ["a", "b", "c"], "correct": 2},
        "conversation": {
            "scene": "At home",
            "lines": [
                {"speaker": "A", "text": "Smells good!"},
                {"speaker": "B", "text": "Thanks!"}
            ]
        },
        "conversation_vocab": [{"word": "serve", "meaning": "盛り付ける"}],
        "australia_tips": {"title": "In Australia", "content": "Eggs are cheap.\n\nTry the markets."},
        "try_it_hint": "I'm making an omelette tonight."
    })
}
