//! REPL (Read-Eval-Print Loop) for analysing job titles one after another

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use jobshift_application::AnalyzeJobUseCase;
use jobshift_domain::OutputFormat;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::{Path, PathBuf};

const EXIT_WORDS: [&str; 3] = ["quit", "exit", "end"];

/// True for the words that leave the interactive prompt (case-insensitive)
pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim().trim_start_matches('/');
    EXIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w))
}

/// Interactive job analysis REPL
pub struct JobRepl {
    use_case: AnalyzeJobUseCase,
    provider: String,
    model: String,
    temperature: f32,
    show_progress: bool,
    output: OutputFormat,
    history: Option<(PathBuf, usize)>,
}

impl JobRepl {
    pub fn new(use_case: AnalyzeJobUseCase) -> Self {
        Self {
            use_case,
            provider: String::new(),
            model: String::new(),
            temperature: 0.7,
            show_progress: true,
            output: OutputFormat::Full,
            history: None,
        }
    }

    /// Backend details shown in the welcome banner
    pub fn with_model_info(
        mut self,
        provider: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        self.provider = provider.into();
        self.model = model.into();
        self.temperature = temperature;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_output(mut self, format: OutputFormat) -> Self {
        self.output = format;
        self
    }

    pub fn with_history(mut self, path: PathBuf, size: usize) -> Self {
        self.history = Some((path, size));
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(history) = self
            .history
            .as_ref()
            .and_then(|(path, size)| open_history(path, *size))
        {
            line_editor = line_editor.with_history(Box::new(history));
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("job title".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if is_exit_command(line) {
                        println!("Bye!");
                        break;
                    }

                    if line.starts_with('/') {
                        self.handle_command(line);
                        continue;
                    }

                    self.process_job(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│      jobshift - AI Transformation Mode      │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "{} {} ({}, temperature {})",
            "Model:".cyan().bold(),
            self.model,
            self.provider,
            self.temperature
        );
        println!();
        println!("Enter a job title to analyse. Type 'quit', 'exit' or 'end' to leave.");
        println!("Commands: /help, /clear");
        println!();
    }

    fn handle_command(&self, cmd: &str) {
        match cmd {
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?        - Show this help");
                println!("  /clear               - Forget agent transcripts");
                println!("  quit, exit, end      - Leave");
                println!();
            }
            "/clear" => {
                self.use_case.roster().clear_memory();
                println!("Agent transcripts cleared.");
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
    }

    async fn process_job(&self, title: &str) {
        println!();

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(title, &progress).await
        } else {
            self.use_case.execute(title).await
        };

        match result {
            Ok(report) => println!("{}", ConsoleFormatter::render(&report, self.output)),
            Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e)),
        }
        println!();
    }
}

/// Open the history file, creating its directory first.
///
/// Failures are logged and leave the REPL without history.
fn open_history(path: &Path, size: usize) -> Option<FileBackedHistory> {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!(
                "Could not create history directory {}: {}",
                parent.display(),
                e
            );
        }
    }

    match FileBackedHistory::with_file(size, path.to_path_buf()) {
        Ok(history) => Some(history),
        Err(e) => {
            tracing::warn!("History disabled: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_words_case_insensitive() {
        for word in ["quit", "EXIT", " End ", "/quit", "Quit"] {
            assert!(is_exit_command(word), "{word}");
        }
    }

    #[test]
    fn test_job_titles_are_not_exit_words() {
        for title in ["Accountant", "quitter", "end-of-line operator", ""] {
            assert!(!is_exit_command(title), "{title}");
        }
    }

    #[test]
    fn test_history_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobshift").join("history.txt");

        assert!(open_history(&path, 10).is_some());
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_unusable_history_path_disables_history() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let path = blocker.path().join("history.txt");

        assert!(open_history(&path, 10).is_none());
    }
}
