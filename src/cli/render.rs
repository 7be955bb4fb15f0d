// Terminal rendering for screens, messages and saved items

use crossterm::style::{StyledContent, Stylize};

use crate::app::ScreenState;
use crate::catalog::mood::MOOD_PRESETS;
use crate::catalog::{CreativeContent, CreativeKind, PositiveKind};
use crate::screens::{
    saved_preview, AuthScreen, ChatScreen, CreativeScreen, HomeScreen, MoodInputMode, MoodScreen,
    MoodSelection, Screen, SupportScreen,
};
use crate::session::{Message, SavedItems, Sender};

/// Formats screens as plain or ANSI-styled text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, styled: StyledContent<String>) -> String {
        if self.color {
            styled.to_string()
        } else {
            styled.content().clone()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(text.to_string().bold())
    }

    fn hint(&self, text: &str) -> String {
        self.paint(text.to_string().dark_grey())
    }

    /// Full view of the current screen
    pub fn screen(&self, state: &ScreenState, saved: &SavedItems) -> String {
        let body = match state {
            ScreenState::Welcome(_) => self.welcome(),
            ScreenState::Auth(auth) => self.auth(auth),
            ScreenState::Home(home) => self.home(home),
            ScreenState::Mood(mood) => self.mood(mood),
            ScreenState::Chat(chat) => self.chat(chat),
            ScreenState::Creative(creative) => self.creative(creative, saved),
            ScreenState::Support(support) => self.support(support),
            ScreenState::NotFound => self.not_found(),
        };
        let screen = state.screen();
        if screen.nav_label().is_some() {
            format!("{}\n\n{}", body, self.nav_bar(screen))
        } else {
            body
        }
    }

    pub fn nav_bar(&self, current: Screen) -> String {
        Screen::NAV_BAR
            .iter()
            .filter_map(|screen| {
                let label = screen.nav_label()?;
                Some(if *screen == current {
                    self.paint(format!("[{}]", label).cyan().bold())
                } else {
                    self.hint(label)
                })
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn welcome(&self) -> String {
        format!(
            "{}\n\
            Your safe space for emotional wellness.\n\
            Track your mood, talk it through, and find support when you need it.\n\n\
            {}",
            self.heading("💙 Welcome to Solace"),
            self.hint("/start to get started · /skip to explore as a guest")
        )
    }

    fn auth(&self, auth: &AuthScreen) -> String {
        let mode = auth.mode();
        format!(
            "{}\n{}\n\n{}",
            self.heading(mode.heading()),
            mode.subheading(),
            self.hint(&format!(
                "/signin to {} · /toggle to switch · /guest to continue as guest · /back",
                mode.submit_label().to_lowercase()
            ))
        )
    }

    fn home(&self, home: &HomeScreen) -> String {
        let quick = home
            .quick_moods()
            .iter()
            .enumerate()
            .map(|(i, (emoji, label, _))| format!("{} {} {}", i + 1, emoji, label))
            .collect::<Vec<_>>()
            .join("   ");
        format!(
            "{}\nHow are you feeling today?\n\n{} {}\n\n\
            Quick check-in: {}\n\n{}",
            self.heading("☀️ Good day!"),
            self.paint("💡 Today's tip:".to_string().yellow()),
            home.tip(),
            quick,
            self.hint("/quick <n> · /go mood|chat|create|support")
        )
    }

    fn mood(&self, mood: &MoodScreen) -> String {
        let mut out = vec![
            self.heading("Mood Journal"),
            "How are you feeling right now?".to_string(),
            String::new(),
        ];

        match mood.response() {
            Some(response) => {
                out.push(format!("{}  {}", mood.current_emoji(), response));
                out.push(String::new());
                let positive = mood.positive();
                out.push(format!(
                    "{} {}",
                    self.paint(positive_label(positive.kind).to_string().magenta()),
                    positive.text
                ));
                out.push(String::new());
                out.push(self.hint(
                    "/another to log another mood · /inspire for something new · /express to create · /talk to chat",
                ));
            }
            None => {
                match mood.mode() {
                    MoodInputMode::Emoji => {
                        for preset in MOOD_PRESETS.iter() {
                            let selected = matches!(
                                mood.selection(),
                                Some(MoodSelection::Preset(p)) if p.id == preset.id
                            );
                            let line = format!("  {} {:<12} ({})", preset.emoji, preset.label, preset.id);
                            out.push(if selected {
                                self.paint(line.cyan().bold())
                            } else {
                                line
                            });
                        }
                        out.push(String::new());
                        out.push(self.hint("/mood <id> to log · /describe <text> to use your own words"));
                    }
                    MoodInputMode::Text => {
                        out.push("Describe how you feel in your own words.".to_string());
                        out.push(self.hint("/describe <text> · /emoji for the mood list"));
                    }
                }
            }
        }

        if !mood.history().is_empty() {
            out.push(String::new());
            out.push(self.heading("Recent moods"));
            for entry in mood.history().entries() {
                out.push(format!(
                    "  {} {}  {}",
                    entry.emoji(),
                    entry.label(),
                    self.hint(&entry.timestamp().format("%H:%M").to_string())
                ));
            }
        }

        out.join("\n")
    }

    fn chat(&self, chat: &ChatScreen) -> String {
        let mut out: Vec<String> = chat.messages().iter().map(|m| self.message(m)).collect();
        if chat.is_typing() {
            out.push(self.typing_indicator());
        }
        out.push(self.hint("Type a message · /back · /help"));
        out.join("\n\n")
    }

    pub fn typing_indicator(&self) -> String {
        self.hint("💭 typing...")
    }

    /// One chat message; crisis replies stand out
    pub fn message(&self, message: &Message) -> String {
        match message.sender() {
            Sender::User => format!("{} {}", self.paint("You:".to_string().blue().bold()), message.text()),
            Sender::Agent if message.is_crisis() => format!(
                "{} {}",
                self.paint("🆘 Solace:".to_string().red().bold()),
                self.paint(message.text().to_string().red())
            ),
            Sender::Agent => format!(
                "{} {}",
                self.paint("💙 Solace:".to_string().green().bold()),
                message.text()
            ),
        }
    }

    fn creative(&self, creative: &CreativeScreen, saved: &SavedItems) -> String {
        let mut out = vec![self.heading("Creative Outlet"), String::new()];

        match creative.current() {
            Some(content) => {
                out.push(self.creative_content(content));
                out.push(String::new());
                out.push(self.hint("/again · /save · /share · /different"));
            }
            None => {
                for kind in CreativeKind::ALL {
                    out.push(format!(
                        "  {} {:<18} {}",
                        kind.emoji(),
                        kind.title(),
                        self.hint(kind.description())
                    ));
                }
                out.push(String::new());
                out.push(self.hint("/create poem|affirmation|art-idea"));
            }
        }

        let (shown, hidden) = saved_preview(saved);
        if !shown.is_empty() {
            out.push(String::new());
            out.push(self.heading(&format!("Your Saved Items ({})", saved.len())));
            for item in shown {
                out.push(format!("  • {} {}", item.title, self.hint(&item.tag)));
            }
            if hidden > 0 {
                out.push(self.hint(&format!("  And {} more...", hidden)));
            }
        }

        out.join("\n")
    }

    pub fn creative_content(&self, content: &CreativeContent) -> String {
        format!(
            "{} {}  {}\n\n{}",
            content.kind.emoji(),
            self.heading(&content.title),
            self.paint(format!("#{}", content.tag).magenta()),
            content.body
        )
    }

    fn support(&self, support: &SupportScreen) -> String {
        let mut out = vec![
            self.paint("🆘 Crisis Support".to_string().red().bold()),
            "You're not alone. Help is available right now.".to_string(),
            String::new(),
            self.paint(
                "In immediate danger? /call911 for emergency services"
                    .to_string()
                    .red(),
            ),
            String::new(),
        ];

        for (i, resource) in support.resources().iter().enumerate() {
            let name = format!("{} {}. {}", resource.icon, i + 1, resource.name);
            out.push(if resource.urgent {
                self.paint(name.red().bold())
            } else {
                self.heading(&name)
            });
            out.push(format!("     {} · {}", resource.description, resource.contact));
        }
        out.push(self.hint("/contact <n> to call or text · /site <n> for the website"));

        out.push(String::new());
        out.push(self.heading("Coping strategies"));
        for strategy in support.coping_strategies() {
            out.push(format!("  {} {}: {}", strategy.emoji, strategy.title, strategy.description));
        }

        out.push(String::new());
        out.push(self.heading("Create a Safety Plan"));
        for step in support.safety_plan_steps() {
            out.push(format!("  • {}", step));
        }
        out.push(self.hint("/plan to open a safety plan template · /talk to chat · /back to go home"));

        out.join("\n")
    }

    fn not_found(&self) -> String {
        format!(
            "{}\nOops! Page not found\n\n{}",
            self.heading("404"),
            self.hint("/back to return home")
        )
    }

    pub fn saved_items(&self, saved: &SavedItems) -> String {
        if saved.is_empty() {
            return self.hint("Nothing saved yet. Generate something on the creative screen and /save it.");
        }
        saved
            .iter()
            .map(|item| self.creative_content(item))
            .collect::<Vec<_>>()
            .join("\n\n---\n\n")
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(format!("✗ {}", text).red())
    }
}

fn positive_label(kind: PositiveKind) -> &'static str {
    match kind {
        PositiveKind::Poem => "📝 A little poem:",
        PositiveKind::Quote => "💬 Something to hold onto:",
        PositiveKind::Affirmation => "🌱 Affirmation:",
        PositiveKind::Song => "🎵 Song for you:",
    }
}
