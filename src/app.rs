// Application state: the current screen, navigation and pending replies
//
// Exactly one screen is live at a time. Navigating builds a fresh screen,
// so nothing a screen holds survives leaving it. The only long-lived state
// is configuration and the saved creative items.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::catalog::CreativeKind;
use crate::companion::{Companion, Reply};
use crate::config::Config;
use crate::errors::{Result, SolaceError};
use crate::matcher::RandomSource;
use crate::platform::{share_or_copy, Platform, ShareOutcome};
use crate::screens::{
    AuthScreen, ChatScreen, Command, CreativeScreen, HomeScreen, MoodInputMode, MoodScreen, Route,
    Screen, SupportScreen, WelcomeScreen,
};
use crate::session::{Message, SavedItems};

/// The live screen and its per-visit state
#[derive(Debug)]
pub enum ScreenState {
    Welcome(WelcomeScreen),
    Auth(AuthScreen),
    Home(HomeScreen),
    Mood(MoodScreen),
    Chat(ChatScreen),
    Creative(CreativeScreen),
    Support(SupportScreen),
    NotFound,
}

impl ScreenState {
    pub fn screen(&self) -> Screen {
        match self {
            ScreenState::Welcome(_) => Screen::Welcome,
            ScreenState::Auth(_) => Screen::Auth,
            ScreenState::Home(_) => Screen::Home,
            ScreenState::Mood(_) => Screen::Mood,
            ScreenState::Chat(_) => Screen::Chat,
            ScreenState::Creative(_) => Screen::Creative,
            ScreenState::Support(_) => Screen::Support,
            ScreenState::NotFound => Screen::NotFound,
        }
    }
}

/// Something the user did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    Back,
    CrisisButton,
    // Welcome / auth
    GetStarted,
    Skip,
    ToggleAuthMode,
    SignIn,
    ContinueAsGuest,
    // Home
    QuickMood(usize),
    // Chat
    Say(String),
    // Mood journal
    PickMood(String),
    SetMoodMode(MoodInputMode),
    DescribeMood(String),
    LogAnotherMood,
    RefreshPositive,
    OpenCreative,
    // Creative outlet
    Create(CreativeKind),
    Regenerate,
    ChooseDifferent,
    Save,
    Share,
    // Crisis support
    CallEmergency,
    Contact(usize),
    OpenWebsite(usize),
    OpenSafetyPlan,
    // Mood journal and crisis support
    TalkToCompanion,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Navigate(_) => "navigate",
            Action::Back => "back",
            Action::CrisisButton => "crisis button",
            Action::GetStarted => "get started",
            Action::Skip => "skip",
            Action::ToggleAuthMode => "toggle sign-in mode",
            Action::SignIn => "sign in",
            Action::ContinueAsGuest => "continue as guest",
            Action::QuickMood(_) => "quick mood",
            Action::Say(_) => "say",
            Action::PickMood(_) => "pick mood",
            Action::SetMoodMode(_) => "mood input mode",
            Action::DescribeMood(_) => "describe mood",
            Action::LogAnotherMood => "log another mood",
            Action::RefreshPositive => "new inspiration",
            Action::OpenCreative => "express yourself",
            Action::Create(_) => "create",
            Action::Regenerate => "generate another",
            Action::ChooseDifferent => "choose different type",
            Action::Save => "save",
            Action::Share => "share",
            Action::CallEmergency => "call 911",
            Action::Contact(_) => "contact",
            Action::OpenWebsite(_) => "open website",
            Action::OpenSafetyPlan => "safety plan",
            Action::TalkToCompanion => "talk to companion",
        }
    }
}

#[derive(Debug)]
struct ScheduledReply {
    visit: u64,
    reply: Reply,
}

pub struct App {
    config: Config,
    companion: Companion,
    rng: Box<dyn RandomSource>,
    platform: Box<dyn Platform>,
    saved: SavedItems,
    route: Route,
    screen: ScreenState,
    /// Bumped on every navigation; replies from older visits are dropped
    visit: u64,
    pending: Option<JoinHandle<()>>,
    reply_tx: mpsc::UnboundedSender<ScheduledReply>,
    reply_rx: mpsc::UnboundedReceiver<ScheduledReply>,
}

impl App {
    /// Start on the welcome screen
    pub fn new(
        config: Config,
        rng: Box<dyn RandomSource>,
        platform: Box<dyn Platform>,
    ) -> Result<Self> {
        config.validate()?;
        let companion = Companion::from_config(&config)?;
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();

        Ok(Self {
            config,
            companion,
            rng,
            platform,
            saved: SavedItems::new(),
            route: Route::to(Screen::Welcome),
            screen: ScreenState::Welcome(WelcomeScreen),
            visit: 0,
            pending: None,
            reply_tx,
            reply_rx,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn companion(&self) -> &Companion {
        &self.companion
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn saved(&self) -> &SavedItems {
        &self.saved
    }

    /// Whether a chat reply is still being "typed"
    pub fn has_pending_reply(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the current screen with a fresh visit to `route`.
    ///
    /// Any reply still waiting on its typing delay is discarded.
    pub fn navigate(&mut self, route: Route) {
        self.cancel_pending();
        self.visit += 1;

        let rng = self.rng.as_mut();
        self.screen = match route.screen {
            Screen::Welcome => ScreenState::Welcome(WelcomeScreen),
            Screen::Auth => ScreenState::Auth(AuthScreen::new()),
            Screen::Home => ScreenState::Home(HomeScreen::enter(rng)),
            Screen::Mood => ScreenState::Mood(MoodScreen::enter(
                route.quick_mood.as_deref(),
                self.config.mood_history_limit,
                rng,
            )),
            Screen::Chat => ScreenState::Chat(ChatScreen::new()),
            Screen::Creative => ScreenState::Creative(CreativeScreen::new()),
            Screen::Support => ScreenState::Support(SupportScreen::new()),
            Screen::NotFound => ScreenState::NotFound,
        };

        info!(route = %route, visit = self.visit, "Navigated");
        self.route = route;
    }

    /// Apply a user action to the current screen and carry out its effect.
    ///
    /// `Action::Say` schedules the reply on the current Tokio runtime and
    /// fails with [`SolaceError::NoRuntime`] when called outside one; the
    /// chat log is left untouched in that case.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        if matches!(action, Action::Say(_)) && tokio::runtime::Handle::try_current().is_err() {
            return Err(SolaceError::NoRuntime);
        }
        let command = self.transition(action)?;
        if let Some(command) = command {
            self.execute(command)?;
        }
        Ok(())
    }

    fn transition(&mut self, action: Action) -> Result<Option<Command>> {
        let rng = self.rng.as_mut();
        let screen = self.screen.screen();

        let command = match (action, &mut self.screen) {
            (Action::Navigate(route), _) => Some(Command::Navigate(route)),
            (Action::CrisisButton, _) => Some(Command::crisis_button()),

            (Action::Back, ScreenState::Auth(auth)) => Some(auth.back()),
            (Action::Back, ScreenState::Chat(chat)) => Some(chat.back()),
            (Action::Back, ScreenState::Mood(mood)) => Some(mood.back()),
            (Action::Back, ScreenState::Creative(creative)) => Some(creative.back()),
            (Action::Back, ScreenState::Support(support)) => Some(support.back()),
            (Action::Back, ScreenState::NotFound) => Some(Command::navigate(Screen::Home)),

            (Action::GetStarted, ScreenState::Welcome(welcome)) => Some(welcome.get_started()),
            (Action::Skip, ScreenState::Welcome(welcome)) => Some(welcome.skip()),
            (Action::ToggleAuthMode, ScreenState::Auth(auth)) => {
                auth.toggle_mode();
                None
            }
            (Action::SignIn, ScreenState::Auth(auth)) => Some(auth.submit()),
            (Action::ContinueAsGuest, ScreenState::Auth(auth)) => Some(auth.continue_as_guest()),

            (Action::QuickMood(index), ScreenState::Home(home)) => home.quick_mood(index),

            (Action::Say(text), ScreenState::Chat(chat)) => {
                chat.set_input(text);
                chat.submit(&self.companion, rng)
            }

            (Action::PickMood(id), ScreenState::Mood(mood)) => {
                mood.select_mood(&id);
                None
            }
            (Action::SetMoodMode(mode), ScreenState::Mood(mood)) => {
                mood.set_mode(mode);
                None
            }
            (Action::DescribeMood(text), ScreenState::Mood(mood)) => {
                mood.set_mode(MoodInputMode::Text);
                mood.set_custom_text(text);
                mood.submit_custom(rng);
                None
            }
            (Action::LogAnotherMood, ScreenState::Mood(mood)) => {
                mood.log_another();
                None
            }
            (Action::RefreshPositive, ScreenState::Mood(mood)) => {
                mood.refresh_positive(rng);
                None
            }
            (Action::OpenCreative, ScreenState::Mood(mood)) => Some(mood.open_creative()),
            (Action::TalkToCompanion, ScreenState::Mood(mood)) => Some(mood.talk_to_companion()),

            (Action::Create(kind), ScreenState::Creative(creative)) => {
                creative.select(kind, rng);
                None
            }
            (Action::Regenerate, ScreenState::Creative(creative)) => {
                creative.regenerate(rng);
                None
            }
            (Action::ChooseDifferent, ScreenState::Creative(creative)) => {
                creative.choose_different();
                None
            }
            (Action::Save, ScreenState::Creative(creative)) => creative.save(),
            (Action::Share, ScreenState::Creative(creative)) => creative.share(),

            (Action::CallEmergency, ScreenState::Support(support)) => Some(support.call_emergency()),
            (Action::Contact(index), ScreenState::Support(support)) => support.contact(index),
            (Action::OpenWebsite(index), ScreenState::Support(support)) => {
                support.open_website(index)
            }
            (Action::OpenSafetyPlan, ScreenState::Support(support)) => {
                Some(support.open_safety_plan())
            }
            (Action::TalkToCompanion, ScreenState::Support(support)) => {
                Some(support.talk_to_companion())
            }

            (action, _) => {
                return Err(SolaceError::WrongScreen {
                    action: action.name(),
                    screen,
                })
            }
        };

        Ok(command)
    }

    /// Carry out a side effect requested by a screen
    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Navigate(route) => self.navigate(route),
            Command::ScheduleReply { reply, delay } => self.schedule_reply(reply, delay),
            Command::Dial { number } => self.platform.dial(&number)?,
            Command::ComposeText { number, body } => self.platform.compose_text(&number, &body)?,
            Command::OpenUrl(url) => self.platform.open_url(&url)?,
            Command::Share { title, body } => {
                if share_or_copy(self.platform.as_mut(), &title, &body)? == ShareOutcome::Copied {
                    self.platform.notify("Copied to clipboard!");
                }
            }
            Command::SaveItem(item) => {
                self.saved.save_creative_item(item);
                self.platform.notify("Saved to your collection!");
            }
        }
        Ok(())
    }

    fn schedule_reply(&mut self, reply: Reply, delay: std::time::Duration) {
        self.cancel_pending();

        let tx = self.reply_tx.clone();
        let visit = self.visit;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver lives as long as the app
            let _ = tx.send(ScheduledReply { visit, reply });
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!(visit = self.visit, "Discarded pending reply");
        }
    }

    /// Wait for the pending chat reply and append it to the chat log.
    ///
    /// Returns `None` straight away when nothing is pending.
    pub async fn next_reply(&mut self) -> Option<&Message> {
        loop {
            self.pending.as_ref()?;

            let ScheduledReply { visit, reply } = self.reply_rx.recv().await?;
            if visit != self.visit {
                debug!(visit, current = self.visit, "Dropping reply from an earlier visit");
                continue;
            }

            self.pending = None;
            return match &mut self.screen {
                ScreenState::Chat(chat) => Some(chat.deliver(reply)),
                _ => None,
            };
        }
    }
}
