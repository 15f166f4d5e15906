//! Progress reporting for job analysis runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use jobshift_application::ports::progress::ProgressNotifier;
use jobshift_domain::{JobTitle, Stage};
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Reports progress with one spinner per running stage
///
/// Concurrent stages each get their own line.
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<Stage, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_run_start(&self, title: &JobTitle) {
        let _ = self
            .multi
            .println(format!("{} {}", "Analyzing:".cyan().bold(), title));
    }

    fn on_stage_start(&self, stage: Stage) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(stage.agent().name());
        pb.set_message(format!("{}...", stage.display_name()));
        pb.enable_steady_tick(Duration::from_millis(100));

        self.bars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(stage, pb);
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        let bar = self
            .bars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&stage);

        if let Some(pb) = bar {
            if success {
                pb.finish_with_message(format!("{}", "done".green()));
            } else {
                pb.abandon_with_message(format!("{}", "failed".red()));
            }
        }
    }
}

/// Line-per-event progress for logs and pipes
///
/// Used when stderr is not a terminal, where spinners would only leave
/// escape codes behind.
pub struct SimpleProgress<W: Write + Send = io::Stderr> {
    out: Mutex<W>,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> SimpleProgress<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn line(&self, text: std::fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(out, "{}", text);
    }
}

impl<W: Write + Send> ProgressNotifier for SimpleProgress<W> {
    fn on_run_start(&self, title: &JobTitle) {
        self.line(format_args!("{} {}", "Analyzing:".cyan().bold(), title));
    }

    fn on_stage_start(&self, stage: Stage) {
        self.line(format_args!("{} {}...", "->".cyan(), stage.display_name().bold()));
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        if success {
            self.line(format_args!("  {} {}", "v".green(), stage.agent().name()));
        } else {
            self.line(format_args!("  {} {} (failed)", "x".red(), stage.agent().name()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::ProgressDrawTarget;

    #[test]
    fn test_bars_are_removed_on_completion() {
        let reporter = ProgressReporter::new();
        reporter.multi.set_draw_target(ProgressDrawTarget::hidden());

        reporter.on_stage_start(Stage::ExtractingMissions);
        reporter.on_stage_start(Stage::RecommendingTech);
        assert_eq!(reporter.bars.lock().unwrap().len(), 2);

        reporter.on_stage_complete(Stage::ExtractingMissions, true);
        reporter.on_stage_complete(Stage::RecommendingTech, false);
        assert!(reporter.bars.lock().unwrap().is_empty());
    }

    #[test]
    fn test_simple_progress_writes_one_line_per_event() {
        colored::control::set_override(false);
        let progress = SimpleProgress::with_writer(Vec::new());

        progress.on_run_start(&JobTitle::try_new("Accountant").unwrap());
        progress.on_stage_start(Stage::Describing);
        progress.on_stage_complete(Stage::Describing, true);
        progress.on_stage_start(Stage::EnhancingAi);
        progress.on_stage_complete(Stage::EnhancingAi, false);

        let output = String::from_utf8(progress.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Analyzing: Accountant");
        assert_eq!(lines[1], "-> Generating job description...");
        assert!(lines[2].starts_with("  v "));
        assert!(lines[4].ends_with("(failed)"));
    }

    #[test]
    fn test_completion_without_start_is_ignored() {
        let reporter = ProgressReporter::new();
        reporter.multi.set_draw_target(ProgressDrawTarget::hidden());
        reporter.on_stage_complete(Stage::Describing, true);
        assert!(reporter.bars.lock().unwrap().is_empty());
    }
}
