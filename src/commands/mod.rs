use anyhow::{Context, Result};
use log::error;

use crate::deck::{ChapterKey, Grade};
use crate::output::StudyOutput;
use crate::session::Session;


/// A user action coming from the presentation layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Import(String),
    ToggleChapter(ChapterKey),
    SelectChapter(ChapterKey, bool),
    StartSession,
    Previous,
    Next,
    JumpTo(usize),
    Flip,
    Grade(Grade),
}

pub fn dispatch<O: StudyOutput>(session: &mut Session<O>, command: Command) -> Result<()> {
    match command {
        Command::Import(source) => {
            session.import_json(&source).context("Invalid deck file")?;
        }
        Command::ToggleChapter(key) => {
            session.toggle_chapter(&key);
        }
        Command::SelectChapter(key, selected) => {
            session.set_chapter_selected(&key, selected);
        }
        Command::StartSession => session.start_session(),
        Command::Previous => {
            session.retreat();
        }
        Command::Next => {
            session.advance();
        }
        Command::JumpTo(index) => {
            session
                .jump_to(index)
                .with_context(|| format!("Could not jump to card {}", index + 1))?;
        }
        Command::Flip => {
            session.flip();
        }
        Command::Grade(grade) => {
            session.grade(grade);
        }
    }
    Ok(())
}

/// Runs a command, logging failures instead of returning them.
pub fn handle<O: StudyOutput>(session: &mut Session<O>, command: Command) {
    if let Err(e) = dispatch(session, command) {
        error!("{:#}", e);
    }
}
