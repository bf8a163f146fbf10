//! Interactive chat orchestrator.
//!
//! Wraps the profile store behind a conversational loop. Each turn builds a
//! context block from the top search matches and either forwards it to the
//! completion API (AI mode) or prints it directly (basic mode). The mode is
//! fixed when the orchestrator is constructed; the only runtime deviation is
//! the per-turn fallback from AI to basic when a completion call fails.
//!
//! Conversation history lives in a [`ChatSession`] owned by the caller and
//! is never persisted; only the most recent turns are replayed to the API.

use anyhow::Result;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::completion::CompletionClient;
use crate::config::Config;
use crate::context::{self, NO_MATCH_SENTINEL};
use crate::models::ChatTurn;
use crate::store::ProfileStore;

/// Persona prompt sent fresh on every AI-mode call; never stored in history.
const SYSTEM_PROMPT: &str = "You are CatheTwin, an AI assistant representing Catherine Dalafu, \
a Full-Stack Developer and IT student at Saint Paul University Philippines.\n\n\
You speak in first person AS Catherine, using her professional background and experiences. \
Be friendly, professional, and enthusiastic about technology and leadership.\n\n\
Key personality traits:\n\
- Passionate about database management, Python, and web development\n\
- Strong leader with experience in student government (PSG SITE Representative, JPCS Secretary)\n\
- Currently working remotely with AusBiz Consulting Australia\n\
- Dean's Lister maintaining excellence in academics and leadership\n\
- Fluent in Filipino, intermediate in English\n\
- Based in Tuguegarao City, Cagayan, Philippines\n\n\
Use the provided context to answer accurately. If information isn't in the context, you can \
make reasonable inferences based on Catherine's background, but be honest about what's \
confirmed vs. inferred.";

const NO_PROFILE_REPLY: &str =
    "Sorry, I couldn't load my profile data. Please make sure the document store exists.";

const NO_MATCH_GUIDANCE: &str = "I don't have specific information about that in my profile. \
Could you ask about my work experience, technical skills, education, or leadership roles?";

/// Conversation history for one chat session, owned by the caller.
///
/// Holds user/assistant turns only — the system prompt is re-sent fresh on
/// every call. Cleared on the `clear` command; discarded at process end.
#[derive(Debug, Default)]
pub struct ChatSession {
    history: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// The most recent `window` turns, oldest first.
    pub fn recent(&self, window: usize) -> &[ChatTurn] {
        let start = self.history.len().saturating_sub(window);
        &self.history[start..]
    }

    fn push_exchange(&mut self, question: &str, answer: &str) {
        self.history.push(ChatTurn::user(question));
        self.history.push(ChatTurn::assistant(answer));
    }
}

/// Fixed operating mode, decided once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The store failed to load; every turn returns a fixed apology.
    NoProfile,
    /// No completion service; turns return the raw matched context.
    Basic,
    /// Completion service configured; turns return generated answers.
    AiEnabled,
}

/// The chat orchestrator: store + optional completion client.
pub struct Orchestrator {
    store: Option<ProfileStore>,
    client: Option<CompletionClient>,
    config: Config,
}

impl Orchestrator {
    /// Build the orchestrator, fixing the mode for the process lifetime.
    ///
    /// A store that fails to load is reported and degrades the orchestrator
    /// to [`Mode::NoProfile`] instead of failing construction; the session
    /// still runs so the user sees the apology interactively.
    pub fn new(config: Config) -> Self {
        let store = match ProfileStore::load(&config.store.path) {
            Ok(store) => Some(store),
            Err(e) => {
                warn!("profile store unavailable: {:#}", e);
                None
            }
        };

        let client = CompletionClient::from_env(&config.completion);

        Self {
            store,
            client,
            config,
        }
    }

    #[cfg(test)]
    fn with_parts(
        store: Option<ProfileStore>,
        client: Option<CompletionClient>,
        config: Config,
    ) -> Self {
        Self {
            store,
            client,
            config,
        }
    }

    pub fn mode(&self) -> Mode {
        match (&self.store, &self.client) {
            (None, _) => Mode::NoProfile,
            (Some(_), None) => Mode::Basic,
            (Some(_), Some(_)) => Mode::AiEnabled,
        }
    }

    /// Handle one user question and produce a reply.
    ///
    /// Never returns an error: every failure path degrades to a fixed or
    /// context-only textual response.
    pub async fn respond(&self, session: &mut ChatSession, question: &str) -> String {
        let store = match &self.store {
            Some(store) => store,
            None => return NO_PROFILE_REPLY.to_string(),
        };

        let context_block =
            context::build_context(question, store.documents(), self.config.retrieval.limit);

        if let Some(client) = &self.client {
            let messages = assemble_messages(
                session,
                self.config.completion.history_window,
                &context_block,
                question,
            );
            match client.complete(&messages).await {
                Ok(answer) => {
                    session.push_exchange(question, &answer);
                    return answer;
                }
                Err(e) => {
                    // Failed exchanges are not recorded in history.
                    warn!("completion call failed, answering in basic mode: {:#}", e);
                }
            }
        }

        basic_reply(&context_block)
    }
}

/// Assemble the message sequence for one AI-mode call: system prompt, the
/// most recent history turns, then the question with context prepended.
fn assemble_messages(
    session: &ChatSession,
    history_window: usize,
    context_block: &str,
    question: &str,
) -> Vec<ChatTurn> {
    let mut messages = Vec::with_capacity(history_window + 2);
    messages.push(ChatTurn::system(SYSTEM_PROMPT));
    messages.extend(session.recent(history_window).iter().cloned());
    messages.push(ChatTurn::user(format!(
        "Context from Catherine's profile:\n{}\n\nQuestion: {}",
        context_block, question
    )));
    messages
}

/// Context-only reply used in basic mode and on completion failure.
fn basic_reply(context_block: &str) -> String {
    if context_block == NO_MATCH_SENTINEL {
        return NO_MATCH_GUIDANCE.to_string();
    }

    format!(
        "Here's what I found in my profile:\n\n{}\nWould you like to know more about any specific aspect?",
        context_block
    )
}

/// One parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Clear,
    Help,
    Empty,
    Ask(String),
}

/// Classify raw input: commands are case-insensitive exact matches after
/// trimming; anything else non-empty is a question.
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    match trimmed.to_lowercase().as_str() {
        "exit" | "quit" | "bye" | "goodbye" => Command::Quit,
        "clear" => Command::Clear,
        "help" => Command::Help,
        _ => Command::Ask(trimmed.to_string()),
    }
}

fn print_banner(mode: Mode, store_path: &Path) {
    println!();
    println!("{}", "=".repeat(70));
    println!("CatheTwin — Catherine Dalafu's digital twin");
    println!("{}", "=".repeat(70));
    println!();
    println!("Ask me about:");
    println!("  - Work experience (AusBiz Consulting Australia, PSG roles)");
    println!("  - Technical skills (Python, MySQL, Laravel, NodeJS)");
    println!("  - Projects (Database Integration, Event Management)");
    println!("  - Education (SPUP - BS Information Technology)");
    println!("  - Interview preparation");
    println!();

    match mode {
        Mode::AiEnabled => println!("AI mode: enabled"),
        Mode::Basic => {
            println!("Basic mode: search-based responses");
            println!("  Tip: set GROQ_API_KEY for AI-generated answers");
        }
        Mode::NoProfile => {
            println!("No profile loaded from {}", store_path.display());
            println!("  Tip: run `twin build` to generate the document store");
        }
    }

    println!();
    println!("Type 'exit' to quit, 'clear' to reset history, 'help' for help.");
    println!("{}", "=".repeat(70));
    println!();
}

fn print_help() {
    println!();
    println!("Help:");
    println!("  - Ask about work experience, skills, projects, or education");
    println!("  - Request interview tips or career advice");
    println!("  - 'clear' resets the conversation history");
    println!("  - 'exit' quits");
    println!();
}

/// Run the interactive chat loop until exit, EOF, or interrupt.
pub async fn run_chat(config: Config) -> Result<()> {
    use std::io::Write;

    let store_path = config.store.path.clone();
    let orchestrator = Orchestrator::new(config);
    let mut session = ChatSession::new();

    print_banner(orchestrator.mode(), &store_path);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = tokio::signal::ctrl_c() => {
                println!("\n\nGoodbye! Thanks for chatting with CatheTwin.\n");
                break;
            }
        };

        let input = match line {
            Ok(Some(input)) => input,
            // EOF ends the session the same way an explicit exit does.
            Ok(None) => {
                println!("\nGoodbye! Thanks for chatting with CatheTwin.\n");
                break;
            }
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };

        match parse_command(&input) {
            Command::Empty => continue,
            Command::Quit => {
                println!("\nThanks for chatting with CatheTwin! Good luck with your interview prep.\n");
                break;
            }
            Command::Clear => {
                session.clear();
                println!("\nConversation history cleared.\n");
            }
            Command::Help => print_help(),
            Command::Ask(question) => {
                let answer = orchestrator.respond(&mut session, &question).await;
                println!("\nCatheTwin: {}\n", answer);
            }
        }
    }

    Ok(())
}
