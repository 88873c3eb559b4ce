// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the quiz, the clip
//! player and the announcer.
//!
//! The `App` struct wires together the domains (config, i18n, question
//! bank) and translates messages into state changes. Startup work that can
//! fail runs before the window opens, so the event loop only ever sees a
//! usable question set.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SpeechAnnouncer;
use crate::application::QuizOrchestrator;
use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::config::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::domain::quiz::QuestionSet;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::infrastructure::announcer_from_config;
use crate::question_bank;
use crate::ui::notices;
use crate::video_player::ClipPlayer;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    quiz: QuizOrchestrator,
    player: ClipPlayer,
    announcer: Box<dyn SpeechAnnouncer>,
    notices: notices::Manager,
    theme: Theme,
    feedback_timeout: Option<Duration>,
}

/// Everything resolved before the window opens.
struct Startup {
    config: Config,
    i18n: I18n,
    questions: QuestionSet,
    warnings: Vec<String>,
}

impl Startup {
    fn prepare(flags: Flags) -> Result<Self> {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let cli_questions = flags.questions.map(PathBuf::from);
        let (questions, questions_warning) =
            question_bank::resolve(cli_questions.as_deref(), &config)?;

        Ok(Self {
            config,
            i18n,
            questions,
            warnings: config_warning.into_iter().chain(questions_warning).collect(),
        })
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    let startup = Startup::prepare(flags)?;

    // iced 0.14 requires a Fn boot function; the startup state is consumed once.
    let boot_state = RefCell::new(Some(startup));
    let boot = move || {
        let startup = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(startup)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
        .map_err(|err| Error::Window(err.to_string()))
}

impl App {
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            config,
            i18n,
            questions,
            warnings,
        } = startup;

        let (announcer, speech_warning) =
            announcer_from_config(&config.speech, i18n.current_locale());

        let quiz = if config.media.intro.is_some() {
            QuizOrchestrator::with_intro(questions)
        } else {
            QuizOrchestrator::new(questions)
        };

        let now = Instant::now();
        let mut notices = notices::Manager::new();
        for key in warnings.into_iter().chain(speech_warning) {
            notices.push(key, now);
        }

        let mut app = App {
            i18n,
            quiz,
            player: ClipPlayer::new(config.media.clone()),
            announcer,
            notices,
            theme: config.general.theme_mode.theme(),
            feedback_timeout: config.media.feedback_timeout(),
        };

        let effects = app.quiz.start();
        update::run_effects(&mut app.update_context(), effects);

        (app, Task::none())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            quiz: &mut self.quiz,
            player: &mut self.player,
            announcer: self.announcer.as_ref(),
            notices: &mut self.notices,
            feedback_timeout: self.feedback_timeout,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.quiz.is_complete() || self.quiz.is_intro() {
            return app_name;
        }

        let current = (self.quiz.current_index() + 1).to_string();
        let total = self.quiz.total().to_string();
        let counter = self.i18n.tr_with_args(
            "question-counter",
            &[("current", current.as_str()), ("total", total.as_str())],
        );
        format!("{counter} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let watchdog_armed = self.feedback_timeout.is_some()
            && (self.quiz.is_playing_feedback() || self.quiz.is_intro());
        let tick_sub =
            subscription::create_tick_subscription(watchdog_armed || !self.notices.is_empty());
        let video_sub = self.player.subscription().map(Message::Playback);

        Subscription::batch([event_sub, tick_sub, video_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            quiz: &self.quiz,
            player: &self.player,
            notices: &self.notices,
        })
    }
}
