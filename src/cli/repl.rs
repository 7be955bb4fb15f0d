// Interactive REPL

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::warn;

use crate::app::{Action, App, ScreenState};
use crate::catalog::mood;
use crate::errors::SolaceError;
use crate::screens::{MoodInputMode, Route, Screen};

use super::commands::{format_help, Command};
use super::input::InputHandler;
use super::render::Renderer;

/// Whether the loop should keep going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

enum Waited {
    Delivered(String),
    Interrupted,
    Nothing,
}

pub struct Repl {
    app: App,
    renderer: Renderer,
    input: Option<InputHandler>,
}

impl Repl {
    pub fn new(app: App, renderer: Renderer, input: Option<InputHandler>) -> Self {
        Self {
            app,
            renderer,
            input,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Jump straight to `route` and draw it
    pub fn open(&mut self, route: Route) {
        self.app.navigate(route);
        self.show();
    }

    /// Jump to `route` without drawing it
    pub fn navigate(&mut self, route: Route) {
        self.app.navigate(route);
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("Solace v{}", env!("CARGO_PKG_VERSION"));
        println!("Type /help for commands. If you are in danger, type /sos.\n");
        self.show();

        loop {
            let prompt = format!("{}> ", self.app.route().screen.name());
            let line = match self.read_line(&prompt) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    println!("\nTake care of yourself. 💙");
                    break;
                }
                Err(e) => {
                    eprintln!("{}", self.renderer.error(&format!("Input error: {}", e)));
                    continue;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            if self.handle_line(&line).await? == Flow::Quit {
                println!("\nTake care of yourself. 💙");
                break;
            }
        }

        if let Some(input) = &mut self.input {
            if let Err(e) = input.save_history() {
                warn!("Failed to save history: {}", e);
            }
        }

        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match &mut self.input {
            Some(handler) => handler.read_line(prompt),
            None => {
                // Fallback: basic stdin
                print!("{}", prompt);
                io::stdout().flush()?;
                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
            }
        }
    }

    /// Handle one line of input: a slash command or free text
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let action = match Command::parse(line) {
            Some(Command::Quit) => return Ok(Flow::Quit),
            Some(Command::Help) => {
                println!("\n{}\n", format_help());
                return Ok(Flow::Continue);
            }
            Some(Command::Show) => {
                self.show();
                return Ok(Flow::Continue);
            }
            Some(Command::Saved) => {
                println!("\n{}\n", self.renderer.saved_items(self.app.saved()));
                return Ok(Flow::Continue);
            }
            Some(Command::Invalid(message)) => {
                println!("{}", self.renderer.error(&message));
                return Ok(Flow::Continue);
            }
            Some(Command::Act(action)) => action,
            None => match self.free_text_action(line) {
                Some(action) => action,
                None => {
                    println!(
                        "{}",
                        self.renderer
                            .error("Type /help to see what you can do here, or /go chat to talk.")
                    );
                    return Ok(Flow::Continue);
                }
            },
        };

        self.perform(action).await?;
        Ok(Flow::Continue)
    }

    /// What plain text means on the current screen
    fn free_text_action(&self, line: &str) -> Option<Action> {
        match self.app.screen() {
            ScreenState::Chat(_) => Some(Action::Say(line.to_string())),
            ScreenState::Mood(screen) if screen.response().is_none() => {
                match screen.mode() {
                    MoodInputMode::Text => Some(Action::DescribeMood(line.to_string())),
                    MoodInputMode::Emoji => mood::preset(line)
                        .map(|preset| Action::PickMood(preset.id.to_string()))
                        .or_else(|| Some(Action::DescribeMood(line.to_string()))),
                }
            }
            _ => None,
        }
    }

    /// Apply an action, then print whatever changed
    pub async fn perform(&mut self, action: Action) -> Result<()> {
        let before = self.app.route().clone();
        let is_chat = matches!(action, Action::Say(_));

        match self.app.dispatch(action) {
            Ok(()) => {}
            Err(e @ SolaceError::WrongScreen { .. }) => {
                println!("{}", self.renderer.error(&e.to_string()));
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        if self.app.has_pending_reply() {
            self.await_reply().await;
            return Ok(());
        }

        let screen = self.app.route().screen;
        let redraw = *self.app.route() != before
            || matches!(screen, Screen::Auth | Screen::Mood | Screen::Creative);
        if redraw && !is_chat {
            self.show();
        }
        Ok(())
    }

    async fn await_reply(&mut self) {
        println!("{}", self.renderer.typing_indicator());

        let renderer = self.renderer;
        let waited = tokio::select! {
            message = self.app.next_reply() => match message {
                Some(message) => Waited::Delivered(renderer.message(message)),
                None => Waited::Nothing,
            },
            _ = tokio::signal::ctrl_c() => Waited::Interrupted,
        };

        match waited {
            Waited::Delivered(text) => println!("\n{}\n", text),
            Waited::Interrupted => {
                self.app.navigate(Route::to(Screen::Home));
                println!("\nLeft the chat.\n");
                self.show();
            }
            Waited::Nothing => {}
        }
    }

    fn show(&self) {
        println!(
            "\n{}\n",
            self.renderer.screen(self.app.screen(), self.app.saved())
        );
    }
}
