// src/console/mod.rs

//! Terminal presentation adapter.
//!
//! Turns typed lines into commands on [`AppState`], draws the snapshots it
//! returns, and owns the single repeating timer that feeds `tick()`.

pub mod command;
pub mod render;
pub mod share;

use std::time::Duration;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::MissedTickBehavior;

use crate::{
    error::AppResult,
    models::question::Selection,
    quiz::Phase,
    state::AppState,
};
use command::Command;

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// A new question went up; its countdown starts from a full time unit.
    pub restart_timer: bool,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            restart_timer: false,
            quit: false,
        }
    }
}

pub struct Console<'a, R> {
    state: &'a mut AppState<R>,
    share_url: String,
}

impl<'a, R: Rng> Console<'a, R> {
    pub fn new(state: &'a mut AppState<R>, share_url: impl Into<String>) -> Self {
        Self {
            state,
            share_url: share_url.into(),
        }
    }

    /// Greeting shown once, with the last login name pre-filled.
    pub fn banner(&mut self) -> String {
        let mut text = String::from("Trivia Quiz\n");
        if let Ok(theme) = self.state.theme() {
            text.push_str(&format!("Theme: {}\n", theme.as_str()));
        }
        match self.state.last_used_name() {
            Ok(Some(name)) => {
                text.push_str(&format!("Welcome back, {}. Type 'login {} <pin>' or 'guest'.\n", name, name))
            }
            _ => text.push_str("Type 'guest' to play, or 'login <name> <pin> <avatar>'.\n"),
        }
        text.push_str("Type 'help' for all commands.\n");
        text
    }

    /// Runs one input line. Errors become a printed message; none end the loop.
    pub fn handle(&mut self, line: &str) -> Reply {
        match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_user_error() {
                    tracing::debug!("Rejected command {:?}: {}", line, e);
                } else {
                    tracing::error!("Command {:?} failed: {}", line, e);
                }
                Reply::text(format!("{}\n", e.message()))
            }
        }
    }

    fn execute(&mut self, command: Command) -> AppResult<Reply> {
        let reply = match command {
            Command::Help => Reply::text(format!("{}{}\n", render::HELP, render::avatars())),
            Command::Guest => {
                let guest = self.state.play_as_guest();
                Reply::text(format!("Playing as {} {}\n", guest.avatar, guest.name))
            }
            Command::Login { name, pin, avatar } => {
                let profile = self.state.login(&name, &pin, avatar.as_deref())?;
                Reply::text(format!("Signed in as {} {}\n", profile.avatar, profile.name))
            }
            Command::Start {
                category,
                difficulty,
            } => {
                let selection = Selection::parse(&category, &difficulty)?;
                let best = self.state.best_score(&selection)?;
                let snapshot = self.state.start(selection)?;
                Reply {
                    text: format!("High score: {}\n{}", best, render::snapshot(&snapshot)),
                    restart_timer: true,
                    quit: false,
                }
            }
            Command::Answer(choice) => Reply::text(render::snapshot(&self.state.answer(choice)?)),
            Command::Next => {
                let snapshot = self.state.advance()?;
                Reply {
                    restart_timer: snapshot.phase == Phase::Running,
                    text: render::snapshot(&snapshot),
                    quit: false,
                }
            }
            Command::Restart => Reply::text(render::snapshot(&self.state.restart())),
            Command::Leaderboard(category) => {
                let entries = self.state.view_leaderboard(&category)?;
                Reply::text(render::leaderboard(&entries))
            }
            Command::Best {
                category,
                difficulty,
            } => {
                let selection = Selection::parse(&category, &difficulty)?;
                let best = self.state.best_score(&selection)?;
                Reply::text(format!(
                    "Best for \"{}\" ({}): {}\n",
                    selection.category_label(),
                    selection.difficulty_label(),
                    best
                ))
            }
            Command::Theme => {
                let theme = self.state.toggle_theme()?;
                Reply::text(format!("Theme: {}\n", theme.as_str()))
            }
            Command::Share => self.share(),
            Command::Quit => Reply {
                text: "Bye!\n".to_string(),
                restart_timer: false,
                quit: true,
            },
        };
        Ok(reply)
    }

    fn share(&self) -> Reply {
        let Some(result) = self.state.last_result() else {
            return Reply::text("Finish a quiz first, then share your score.\n");
        };

        let mut text = format!("{}\n", share::copy_text(result, &self.share_url));
        match share::whatsapp_link(result, &self.share_url) {
            Ok(link) => text.push_str(&format!("WhatsApp: {}\n", link)),
            Err(e) => tracing::warn!("Could not build WhatsApp link: {}", e),
        }
        match share::linkedin_link(&self.share_url) {
            Ok(link) => text.push_str(&format!("LinkedIn: {}\n", link)),
            Err(e) => tracing::warn!("Could not build LinkedIn link: {}", e),
        }
        Reply::text(text)
    }

    /// Called on every timer tick; draws the question again when it times out.
    pub fn on_tick(&mut self) -> Option<String> {
        if self.state.session().phase() != Phase::Running {
            return None;
        }

        if self.state.tick().is_some() {
            return Some(render::snapshot(&self.state.snapshot()));
        }

        match self.state.session().time_remaining() {
            remaining @ 1..=3 => Some(format!("⏱ {}\n", remaining)),
            _ => None,
        }
    }
}

/// Drives the console until `quit` or end of input.
///
/// Input lines and timer ticks are handled one at a time on the calling task,
/// so an answer and a timeout can never interleave.
pub async fn run<R, I, O>(
    console: &mut Console<'_, R>,
    input: I,
    mut output: O,
    tick: Duration,
) -> std::io::Result<()>
where
    R: Rng,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of an interval completes immediately.
    ticker.reset();

    output.write_all(console.banner().as_bytes()).await?;
    output.flush().await?;

    loop {
        tokio::select! {
            biased;

            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let reply = console.handle(&line);
                output.write_all(reply.text.as_bytes()).await?;
                output.flush().await?;

                if reply.quit {
                    break;
                }
                if reply.restart_timer {
                    ticker.reset();
                }
            }
            _ = ticker.tick() => {
                if let Some(text) = console.on_tick() {
                    output.write_all(text.as_bytes()).await?;
                    output.flush().await?;
                }
            }
        }
    }

    tracing::info!("Console closed");
    Ok(())
}
