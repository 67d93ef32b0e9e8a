//! Implements InputPort. Inquire-based interactive menus for chat, terminal and catalog.

use crate::adapters::ui::progress::spinner;
use crate::domain::catalog::{
    LANGUAGES, ProjectFilter, ProjectTrack, filter_projects, language_by_id,
    languages_by_category, populated_categories, project_languages, projects_by_language,
    terminal_languages,
};
use crate::domain::examples::RUNNING_PLACEHOLDER;
use crate::domain::{Difficulty, DomainError, Language, Message, Origin, ReplyTable};
use crate::ports::{CodeExportPort, InputPort, Scheduler};
use crate::usecases::{ChatSession, ExecutionSimulator, TerminalSession};
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use inquire::InquireError;
use inquire::ui::{Color as PromptColor, RenderConfig, Styled};
use inquire::{Select, Text};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::io::{Write, stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Line that ends multi-line code entry.
const END_OF_CODE: &str = ".";

/// Neon theme for every inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("🐛").with_fg(PromptColor::LightCyan))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(PromptColor::LightMagenta));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainMenu {
    Chat,
    Terminal,
    Lesson,
    Languages,
    Projects,
    Exit,
}

impl MainMenu {
    const ALL: [MainMenu; 6] = [
        MainMenu::Chat,
        MainMenu::Terminal,
        MainMenu::Lesson,
        MainMenu::Languages,
        MainMenu::Projects,
        MainMenu::Exit,
    ];
}

impl fmt::Display for MainMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MainMenu::Chat => "💬 Chat with BugBot",
            MainMenu::Terminal => "🖥️  Code terminal",
            MainMenu::Lesson => "📘 Lesson sandbox",
            MainMenu::Languages => "🌐 Browse languages",
            MainMenu::Projects => "🛠️  Project ideas",
            MainMenu::Exit => "🚪 Exit",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TerminalMenu {
    Run,
    Edit,
    Show,
    Language,
    Clear,
    Download,
    Back,
}

impl TerminalMenu {
    const ALL: [TerminalMenu; 7] = [
        TerminalMenu::Run,
        TerminalMenu::Edit,
        TerminalMenu::Show,
        TerminalMenu::Language,
        TerminalMenu::Clear,
        TerminalMenu::Download,
        TerminalMenu::Back,
    ];
}

impl fmt::Display for TerminalMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TerminalMenu::Run => "▶ Run code",
            TerminalMenu::Edit => "✏ Edit code",
            TerminalMenu::Show => "📄 Show code",
            TerminalMenu::Language => "🔀 Change language",
            TerminalMenu::Clear => "🧹 Clear output",
            TerminalMenu::Download => "💾 Download code",
            TerminalMenu::Back => "↩ Back",
        };
        f.write_str(s)
    }
}

/// Select-list entry for a catalog language.
#[derive(Clone, Copy)]
struct LanguageOption(&'static Language);

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.icon, self.0.name)
    }
}

fn language_options() -> Vec<LanguageOption> {
    LANGUAGES.iter().map(LanguageOption).collect()
}

fn terminal_language_options() -> Vec<LanguageOption> {
    terminal_languages().iter().map(LanguageOption).collect()
}

/// Category key plus its sidebar title.
#[derive(Clone, Copy)]
struct CategoryOption(&'static str, &'static str);

impl fmt::Display for CategoryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = languages_by_category(self.0).len();
        write!(f, "{} ({})", self.1, count)
    }
}

fn category_options() -> Vec<CategoryOption> {
    populated_categories()
        .into_iter()
        .map(|(key, title)| CategoryOption(key, title))
        .collect()
}

#[derive(Clone, Copy)]
struct TrackOption(ProjectTrack);

impl fmt::Display for TrackOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ProjectTrack::LanguageSpecific => f.write_str("📚 Language-specific projects"),
            ProjectTrack::Advanced => f.write_str("🚀 Advanced projects"),
        }
    }
}

/// `None` stands for "All".
#[derive(Clone, Copy)]
struct DifficultyOption(Option<Difficulty>);

impl fmt::Display for DifficultyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(d) => write!(f, "{}", d),
            None => f.write_str("All"),
        }
    }
}

fn difficulty_options() -> Vec<DifficultyOption> {
    [
        None,
        Some(Difficulty::Beginner),
        Some(Difficulty::Intermediate),
        Some(Difficulty::Advanced),
    ]
    .into_iter()
    .map(DifficultyOption)
    .collect()
}

/// `None` stands for "All".
#[derive(Clone, Copy)]
struct LanguageFilterOption(Option<&'static Language>);

impl fmt::Display for LanguageFilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(lang) => LanguageOption(lang).fmt(f),
            None => f.write_str("All"),
        }
    }
}

fn language_filter_options() -> Vec<LanguageFilterOption> {
    std::iter::once(None)
        .chain(project_languages().into_iter().map(Some))
        .map(LanguageFilterOption)
        .collect()
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn ui_err(e: InquireError) -> DomainError {
    DomainError::Ui(e.to_string())
}

/// `Ok(None)` when the user backs out with Esc / Ctrl-C.
fn prompt_or_back<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if is_cancel(&e) => Ok(None),
        Err(e) => Err(ui_err(e)),
    }
}

fn print_colored(color: Color, text: &str) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(text));
    let _ = out.execute(ResetColor);
    let _ = out.execute(Print("\r\n"));
    let _ = out.flush();
}

fn print_message(message: &Message) {
    let time = message.timestamp.format("%H:%M");
    match message.origin {
        Origin::Assistant => print_colored(
            Color::Magenta,
            &format!("[{}] BugBot: {}", time, message.text),
        ),
        Origin::User => print_colored(Color::Cyan, &format!("[{}] You: {}", time, message.text)),
    }
}

fn print_output(output: &str) {
    print_colored(Color::Green, "── Output ──");
    for line in output.lines() {
        println!("{}", line);
    }
}

/// Fire `cancel` when the user hits Ctrl-C while a simulated delay is pending.
pub(crate) fn cancel_on_ctrl_c(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("ctrl-c: cancelling pending timer");
            cancel.cancel();
        }
    })
}

/// Read code line by line until a lone `.`.
fn read_code(message: &str) -> Result<Option<String>, DomainError> {
    println!(
        "{} (finish with a single '{}' line, Esc to abort)",
        message, END_OF_CODE
    );
    let mut lines = Vec::new();
    loop {
        let prompt = format!("{:>3} |", lines.len() + 1);
        let Some(line) = prompt_or_back(Text::new(&prompt).prompt())? else {
            return Ok(None);
        };
        if line.trim() == END_OF_CODE {
            break;
        }
        lines.push(line);
    }
    Ok(Some(lines.join("\n")))
}

/// TUI adapter. Owns nothing but the wiring; sessions live for one `run`.
pub struct TuiInputPort {
    replies: Arc<ReplyTable>,
    scheduler: Arc<dyn Scheduler>,
    terminal_sim: Arc<ExecutionSimulator>,
    lesson_sim: Arc<ExecutionSimulator>,
    exporter: Arc<dyn CodeExportPort>,
    reply_delay: Duration,
    rng_seed: Option<u64>,
}

impl TuiInputPort {
    pub fn new(
        replies: Arc<ReplyTable>,
        scheduler: Arc<dyn Scheduler>,
        terminal_sim: Arc<ExecutionSimulator>,
        lesson_sim: Arc<ExecutionSimulator>,
        exporter: Arc<dyn CodeExportPort>,
        reply_delay: Duration,
        rng_seed: Option<u64>,
    ) -> Self {
        Self {
            replies,
            scheduler,
            terminal_sim,
            lesson_sim,
            exporter,
            reply_delay,
            rng_seed,
        }
    }

    fn new_chat(&self) -> ChatSession {
        let rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ChatSession::new(
            Arc::clone(&self.replies),
            Arc::clone(&self.scheduler),
            Box::new(rng),
            self.reply_delay,
        )
    }

    async fn chat_loop(&self, chat: &mut ChatSession) -> Result<(), DomainError> {
        chat.open();
        print_colored(Color::Magenta, "BugBot Assistant · Always here to help!");
        for m in chat.messages() {
            print_message(m);
        }

        loop {
            let input = Text::new("You:")
                .with_placeholder("Ask me anything about coding...")
                .with_help_message("Esc to close the chat")
                .prompt();
            let Some(input) = prompt_or_back(input)? else {
                break;
            };
            if input.trim().is_empty() {
                continue;
            }

            let pb = spinner("BugBot is typing...");
            let watcher = cancel_on_ctrl_c(chat.cancel_handle());
            let result = chat.send_message(&input).await;
            watcher.abort();
            pb.finish_and_clear();

            match result {
                Ok(reply) => print_message(&reply),
                Err(DomainError::Cancelled) => break,
                Err(DomainError::EmptyMessage) => continue,
                Err(e) => return Err(e),
            }
        }

        chat.close();
        Ok(())
    }

    async fn terminal_loop(&self, term: &mut TerminalSession) -> Result<(), DomainError> {
        loop {
            let (icon, name) = term
                .language()
                .map(|l| (l.icon, l.name))
                .unwrap_or(("📄", "Plain text"));
            print_colored(
                Color::Cyan,
                &format!("{} {} Editor · Lines: {}", icon, name, term.line_count()),
            );

            let Some(choice) =
                prompt_or_back(Select::new("Terminal", TerminalMenu::ALL.to_vec()).prompt())?
            else {
                return Ok(());
            };

            match choice {
                TerminalMenu::Run => self.run_terminal(term).await?,
                TerminalMenu::Edit => {
                    if let Some(code) = read_code("Write your code here")? {
                        term.set_code(code);
                    }
                }
                TerminalMenu::Show => println!("{}", term.code()),
                TerminalMenu::Language => {
                    let select = Select::new("Select programming language", terminal_language_options());
                    if let Some(LanguageOption(lang)) = prompt_or_back(select.prompt())? {
                        term.select_language(lang.id)?;
                    }
                }
                TerminalMenu::Clear => {
                    term.clear_output();
                    println!("Click \"Run Code\" to see output here...");
                }
                TerminalMenu::Download => match term.export_code().await {
                    Ok(path) => print_colored(Color::Green, &format!("Saved to {}", path.display())),
                    Err(e) => print_colored(Color::Red, &e.to_string()),
                },
                TerminalMenu::Back => return Ok(()),
            }
        }
    }

    async fn run_terminal(&self, term: &mut TerminalSession) -> Result<(), DomainError> {
        print!("{}", RUNNING_PLACEHOLDER);
        let pb = spinner("Running...");
        let watcher = cancel_on_ctrl_c(term.cancel_handle());
        let result = term.run().await.map(str::to_owned);
        watcher.abort();
        pb.finish_and_clear();

        match result {
            Ok(output) => print_output(&output),
            Err(DomainError::Cancelled) => {
                term.close();
                print_colored(Color::Yellow, "Run cancelled");
            }
            Err(DomainError::AlreadyRunning) => {
                warn!("terminal run skipped: already running");
                print_colored(Color::Yellow, "Code is already running");
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    async fn lesson_sandbox(&self) -> Result<(), DomainError> {
        let select = Select::new("Lesson language", language_options());
        let Some(LanguageOption(lang)) = prompt_or_back(select.prompt())? else {
            return Ok(());
        };
        let Some(code) = read_code(&format!("Try it yourself in {}", lang.name))? else {
            return Ok(());
        };

        print!("{}", RUNNING_PLACEHOLDER);
        let pb = spinner("Running...");
        let cancel = CancellationToken::new();
        let watcher = cancel_on_ctrl_c(cancel.clone());
        let result = self.lesson_sim.simulate_run(lang.id, &code, &cancel).await;
        watcher.abort();
        pb.finish_and_clear();

        match result {
            Ok(output) => print_output(output),
            Err(DomainError::Cancelled) => print_colored(Color::Yellow, "Run cancelled"),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn browse_languages(&self) -> Result<(), DomainError> {
        let select = Select::new("Language categories", category_options());
        let Some(CategoryOption(category, title)) = prompt_or_back(select.prompt())? else {
            return Ok(());
        };
        let languages: Vec<LanguageOption> = languages_by_category(category)
            .into_iter()
            .map(LanguageOption)
            .collect();
        let Some(LanguageOption(lang)) = prompt_or_back(Select::new(title, languages).prompt())?
        else {
            return Ok(());
        };
        print_colored(Color::Cyan, &format!("{} {}", lang.icon, lang.name));
        println!("{}", lang.description);
        println!(
            "Difficulty: {} · Popularity: {}% · Files: {}",
            lang.difficulty, lang.popularity, lang.file_extension
        );
        println!("Features: {}", lang.features.join(", "));
        let projects = projects_by_language(lang.id).len();
        if projects > 0 {
            println!("{} project idea(s) available", projects);
        }
        Ok(())
    }

    fn browse_projects(&self) -> Result<(), DomainError> {
        let tracks = vec![
            TrackOption(ProjectTrack::LanguageSpecific),
            TrackOption(ProjectTrack::Advanced),
        ];
        let Some(TrackOption(track)) = prompt_or_back(Select::new("Projects", tracks).prompt())?
        else {
            return Ok(());
        };
        let Some(DifficultyOption(difficulty)) =
            prompt_or_back(Select::new("Difficulty", difficulty_options()).prompt())?
        else {
            return Ok(());
        };
        let Some(LanguageFilterOption(language)) =
            prompt_or_back(Select::new("Language", language_filter_options()).prompt())?
        else {
            return Ok(());
        };
        let search = Text::new("Search projects:")
            .with_help_message("Enter to show everything")
            .prompt();
        let Some(search) = prompt_or_back(search)? else {
            return Ok(());
        };

        let filter = ProjectFilter {
            search: search.trim().to_string(),
            difficulty,
            language_id: language.map(|l| l.id.to_string()),
        };
        let projects = filter_projects(track, &filter);
        debug!(?track, found = projects.len(), "project filter applied");
        if projects.is_empty() {
            println!("No projects found. Try adjusting your search or filters.");
            return Ok(());
        }
        for p in projects {
            let icon = language_by_id(p.language_id)
                .map(|l| l.icon)
                .unwrap_or("📄");
            print_colored(
                Color::Cyan,
                &format!("{} {} [{}]", icon, p.title, p.difficulty),
            );
            println!("  {}", p.description);
            println!("  ⏱ {} · {}", p.estimated_time, p.skills.join(", "));
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut chat = self.new_chat();
        let mut term =
            TerminalSession::new(Arc::clone(&self.terminal_sim), Arc::clone(&self.exporter));

        loop {
            let Some(choice) =
                prompt_or_back(Select::new("What next?", MainMenu::ALL.to_vec()).prompt())?
            else {
                break;
            };
            match choice {
                MainMenu::Chat => self.chat_loop(&mut chat).await?,
                MainMenu::Terminal => self.terminal_loop(&mut term).await?,
                MainMenu::Lesson => self.lesson_sandbox().await?,
                MainMenu::Languages => self.browse_languages()?,
                MainMenu::Projects => self.browse_projects()?,
                MainMenu::Exit => break,
            }
        }

        chat.close();
        term.close();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_errors_mean_back() {
        let back: Result<Option<u8>, DomainError> =
            prompt_or_back(Err(InquireError::OperationCanceled));
        assert_eq!(back, Ok(None));
        let back: Result<Option<u8>, DomainError> =
            prompt_or_back(Err(InquireError::OperationInterrupted));
        assert_eq!(back, Ok(None));
        assert_eq!(prompt_or_back(Ok(3u8)), Ok(Some(3)));
    }

    #[test]
    fn test_other_prompt_errors_surface() {
        let err = prompt_or_back::<u8>(Err(InquireError::NotTTY)).unwrap_err();
        assert!(matches!(err, DomainError::Ui(_)));
    }

    #[test]
    fn test_language_option_label() {
        let python = language_by_id("python").unwrap();
        assert_eq!(LanguageOption(python).to_string(), "🐍 Python");
        assert_eq!(language_options().len(), LANGUAGES.len());
    }

    #[test]
    fn test_terminal_picker_offers_twelve_languages() {
        let options = terminal_language_options();
        assert_eq!(options.len(), 12);
        assert!(options.iter().all(|LanguageOption(l)| l.id != "typescript"));
    }

    #[test]
    fn test_category_options_show_counts() {
        let labels: Vec<_> = category_options().iter().map(|c| c.to_string()).collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0], "🧠 General-Purpose Programming Languages (13)");
        assert_eq!(labels[3], "🌐 Web Development Languages (2)");
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let difficulties: Vec<_> = difficulty_options().iter().map(|d| d.to_string()).collect();
        assert_eq!(difficulties, ["All", "Beginner", "Intermediate", "Advanced"]);

        let languages = language_filter_options();
        assert_eq!(languages[0].to_string(), "All");
        assert_eq!(languages.len(), 4);
    }
}
