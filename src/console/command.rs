// src/console/command.rs

use crate::{
    error::{AppError, AppResult},
    models::question::ALL,
};

/// A user intent typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Guest,
    Login {
        name: String,
        pin: String,
        avatar: Option<String>,
    },
    Start {
        category: String,
        difficulty: String,
    },
    /// 0-based index into the displayed choices.
    Answer(usize),
    Next,
    Restart,
    Leaderboard(String),
    Best {
        category: String,
        difficulty: String,
    },
    Theme,
    Share,
    Quit,
}

impl Command {
    /// Parses one input line. Choices are typed 1-based.
    pub fn parse(line: &str) -> AppResult<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(AppError::InvalidInput("Type 'help' to see the commands.".to_string()));
        };

        if let Ok(number) = head.parse::<usize>() {
            return match number {
                0 => Err(AppError::InvalidInput("Choices are numbered from 1.".to_string())),
                n => Ok(Command::Answer(n - 1)),
            };
        }

        let mut arg = || words.next().map(str::to_string);

        let command = match head.to_ascii_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "guest" => Command::Guest,
            "login" => {
                let (Some(name), Some(pin)) = (arg(), arg()) else {
                    return Err(AppError::InvalidInput(
                        "Usage: login <name> <pin> [avatar]".to_string(),
                    ));
                };
                Command::Login {
                    name,
                    pin,
                    avatar: arg(),
                }
            }
            "start" => Command::Start {
                category: arg().unwrap_or_else(|| ALL.to_string()),
                difficulty: arg().unwrap_or_else(|| ALL.to_string()),
            },
            "next" | "n" => Command::Next,
            "restart" => Command::Restart,
            "leaderboard" | "lb" => Command::Leaderboard(arg().unwrap_or_else(|| ALL.to_string())),
            "best" => Command::Best {
                category: arg().unwrap_or_else(|| ALL.to_string()),
                difficulty: arg().unwrap_or_else(|| ALL.to_string()),
            },
            "theme" => Command::Theme,
            "share" => Command::Share,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(AppError::InvalidInput(format!(
                    "Unknown command '{}'. Type 'help' to see the commands.",
                    other
                )));
            }
        };

        Ok(command)
    }
}
