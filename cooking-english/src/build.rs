//! Build driver.
//!
//! Walks the roster, building one page per authored day inside its own
//! failure boundary, then writes the index from the roster alone.

use std::path::{Path, PathBuf};

use cooking_english_core::{ContentError, DayMeta, Roster};
use cooking_english_pages::{
    RenderOptions, render_index_page, render_lesson_page, validate_lesson,
};

use crate::error::CookingEnglishError;
use crate::loader::ContentLoader;
use crate::output::{INDEX_FILE, OutputDir};

const RULE_WIDTH: usize = 50;

/// Settings for one build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory holding `day{N}.json`.
    pub content_dir: PathBuf,
    /// Directory pages are written to.
    pub output_dir: PathBuf,
    /// Renderer settings.
    pub render: RenderOptions,
    /// Fail days with validation issues.
    pub strict: bool,
    /// Suppress progress lines.
    pub quiet: bool,
}

/// What happened to one roster day.
#[derive(Debug)]
pub enum DayOutcome {
    /// Page written to `path`.
    Generated { day: u32, path: PathBuf },
    /// No document for the day yet.
    Skipped { day: u32 },
    /// Loading, validation, rendering, or writing failed.
    Failed {
        day: u32,
        error: CookingEnglishError,
    },
}

impl DayOutcome {
    #[must_use]
    pub const fn day(&self) -> u32 {
        match self {
            Self::Generated { day, .. } | Self::Skipped { day } | Self::Failed { day, .. } => *day,
        }
    }
}

/// Result of a build run.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// One entry per roster day, in roster order.
    pub outcomes: Vec<DayOutcome>,
    /// Path of the written index page.
    pub index: Option<PathBuf>,
    /// The content directory did not exist; nothing was written.
    pub content_missing: bool,
}

impl BuildReport {
    /// Number of day pages written.
    #[must_use]
    pub fn generated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DayOutcome::Generated { .. }))
            .count()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DayOutcome::Skipped { .. }))
            .count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DayOutcome::Failed { .. }))
            .count()
    }

    /// Outcome for a given day.
    #[must_use]
    pub fn outcome(&self, day: u32) -> Option<&DayOutcome> {
        self.outcomes.iter().find(|o| o.day() == day)
    }

    /// Page written for `day`, if one was.
    #[must_use]
    pub fn generated_path(&self, day: u32) -> Option<&Path> {
        match self.outcome(day)? {
            DayOutcome::Generated { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Console progress lines, silenced by `--quiet`.
struct Progress {
    quiet: bool,
}

impl Progress {
    fn line(&self, text: &str) {
        if !self.quiet {
            println!("{text}");
        }
    }
}

/// Run a full build over `roster`.
///
/// Per-day failures are recorded in the report and never abort the run.
/// A missing content directory ends the run early with a guidance message
/// and an empty report.
///
/// # Errors
///
/// Returns `CookingEnglishError::Io` if the output directory cannot be
/// created or the index page cannot be written.
pub fn run_build(
    options: &BuildOptions,
    roster: &Roster,
) -> Result<BuildReport, CookingEnglishError> {
    let loader = ContentLoader::new(&options.content_dir);
    let progress = Progress {
        quiet: options.quiet,
    };

    if !loader.root_exists() {
        tracing::debug!(path = %loader.root().display(), "content directory missing");
        eprintln!(
            "❌ {}/ フォルダが見つかりません",
            loader.root().display()
        );
        eprintln!("先に day1.json 〜 day{}.json を用意してください", last_day(roster));
        return Ok(BuildReport {
            content_missing: true,
            ..BuildReport::default()
        });
    }

    let output = OutputDir::create(&options.output_dir)?;

    progress.line("🔨 30日間クッキング英語 - HTML生成開始");
    progress.line(&"=".repeat(RULE_WIDTH));

    let mut report = BuildReport::default();

    for meta in roster {
        let outcome = match build_day(meta, &loader, &output, roster, options) {
            Ok(path) => {
                progress.line(&format!(
                    "✅ Day {}: {} → {}",
                    meta.day,
                    meta.en,
                    path.display()
                ));
                DayOutcome::Generated {
                    day: meta.day,
                    path,
                }
            }
            Err(CookingEnglishError::Content(ref e)) if e.is_not_found() => {
                tracing::debug!(day = meta.day, "no lesson document, skipping");
                progress.line(&format!(
                    "⏭️  Day {}: JSONファイルがありません - スキップ",
                    meta.day
                ));
                DayOutcome::Skipped { day: meta.day }
            }
            Err(error) => {
                tracing::warn!(day = meta.day, error = %error, "day failed");
                progress.line(&format!("❌ Day {}: エラー - {error}", meta.day));
                DayOutcome::Failed {
                    day: meta.day,
                    error,
                }
            }
        };
        report.outcomes.push(outcome);
    }

    let index_html = render_index_page(roster, &options.render);
    report.index = Some(output.write(INDEX_FILE, &index_html)?);
    progress.line("✅ index.html 生成完了");

    progress.line(&"=".repeat(RULE_WIDTH));
    progress.line(&format!(
        "✅ 生成完了: {}/{} 日分",
        report.generated(),
        roster.len()
    ));
    progress.line(&format!(
        "📁 {}/ フォルダにHTMLファイルが保存されました",
        output.root().display()
    ));

    tracing::info!(
        generated = report.generated(),
        skipped = report.skipped(),
        failed = report.failed(),
        "build finished"
    );

    Ok(report)
}

/// Load, validate, render, and write one day. Every failure is returned.
fn build_day(
    meta: &DayMeta,
    loader: &ContentLoader,
    output: &OutputDir,
    roster: &Roster,
    options: &BuildOptions,
) -> Result<PathBuf, CookingEnglishError> {
    let content = loader.load(meta)?;

    let issues = validate_lesson(&content, meta.day);
    for issue in &issues {
        tracing::warn!(day = meta.day, field = %issue.field, "{}", issue.message);
    }
    if options.strict && !issues.is_empty() {
        return Err(ContentError::Invalid {
            day: meta.day,
            issues,
        }
        .into());
    }

    let html = render_lesson_page(meta.day, &content, roster, &options.render)?;
    tracing::debug!(day = meta.day, bytes = html.len(), "rendered lesson page");

    output.write(&OutputDir::day_file(meta.day), &html)
}

fn last_day(roster: &Roster) -> u32 {
    roster.last().map_or(0, |m| m.day)
}
