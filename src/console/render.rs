// src/console/render.rs

use crate::{
    config::AVATARS,
    models::leaderboard::{LeaderboardEntry, QuizResult},
    quiz::{Phase, SessionSnapshot},
};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

pub const HELP: &str = "\
Commands:
  guest                          play without a profile
  login <name> <pin> [avatar]    sign in, or create a profile (avatar required)
  start [category] [difficulty]  start a quiz (\"All\" for no filter)
  <number>                       pick a choice
  next                           go to the next question
  restart                        abandon the quiz and return to setup
  leaderboard [category]         show the top scores
  best [category] [difficulty]   show the best score for a selection
  theme                          switch between light and dark
  share                          share your last result
  quit                           leave
";

pub fn avatars() -> String {
    format!("Avatars: {}", AVATARS.join(" "))
}

fn progress_bar(completed: usize, total: usize) -> String {
    const WIDTH: usize = 20;
    let filled = if total == 0 { 0 } else { completed * WIDTH / total };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}

/// Draws the HUD, the question and its choices.
pub fn snapshot(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();

    match snapshot.phase {
        Phase::Idle => {
            out.push_str("No quiz running. Type 'start [category] [difficulty]'.\n");
        }
        Phase::Running | Phase::Answered => {
            let progress = snapshot.progress;
            out.push_str(&format!(
                "Question {} / {}  {}  Score: {}  Time: {}\n",
                progress.current,
                progress.total,
                progress_bar(progress.completed, progress.total),
                snapshot.score,
                snapshot.time_remaining
            ));
            if let Some(question) = &snapshot.question {
                out.push_str(&format!("\n{}\n", question));
            }

            for (i, choice) in snapshot.choices.iter().enumerate() {
                let marker = match snapshot.reveal {
                    Some(reveal) if reveal.correct_choice == i => "✔",
                    Some(reveal) if reveal.selected == Some(i) => "✘",
                    _ => " ",
                };
                out.push_str(&format!(" {} {}. {}\n", marker, i + 1, choice));
            }

            if let Some(reveal) = snapshot.reveal {
                let verdict = match (reveal.selected, reveal.correct) {
                    (None, _) => "Time's up!",
                    (Some(_), true) => "Correct!",
                    (Some(_), false) => "Wrong.",
                };
                out.push_str(&format!("\n{} Type 'next' to continue.\n", verdict));
            }
        }
        Phase::Finished => match &snapshot.result {
            Some(res) => out.push_str(&result(res)),
            None => out.push_str(&format!(
                "You scored {} out of {}.\n",
                snapshot.score, snapshot.progress.total
            )),
        },
    }

    out
}

pub fn result(result: &QuizResult) -> String {
    format!(
        "You scored {} out of {}.\nBest for \"{}\" ({}) : {} → {}\nType 'share', 'restart' or 'leaderboard'.\n",
        result.score,
        result.total,
        result.category,
        result.difficulty,
        result.previous_best,
        result.new_best
    )
}

pub fn leaderboard(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No scores yet for this selection.\n".to_string();
    }

    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let rank = MEDALS
            .get(i)
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("{:>2}", i + 1));
        out.push_str(&format!(
            "{} {} {} – {}/{} ({})  {}\n",
            rank,
            entry.avatar,
            entry.user,
            entry.score,
            entry.total,
            entry.difficulty,
            entry.date.format("%Y-%m-%d %H:%M")
        ));
    }
    out
}
