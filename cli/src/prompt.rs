use artistriage_core::Status;
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use crate::colors::ColorScheme;
use crate::display::{
    display_candidate, display_classified, display_import, display_inference, display_potentials,
    display_related_refresh,
};
use crate::service::MusicService;
use crate::session::{Session, SessionError};

const CANDIDATE_PROMPT: &str =
    "Enter + (follow-worthy), - (not for me), = (neutral), * (list potentials), / (check new follows), q (quit): ";
const FINISHED_PROMPT: &str = "Enter * to list artists with potential, or q to quit: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Classify(Status),
    ListPotentials,
    ImportFollowed,
    Quit,
}

pub fn parse_command(input: &str) -> Option<Command> {
    match input.trim() {
        "*" => Some(Command::ListPotentials),
        "/" => Some(Command::ImportFollowed),
        "q" | "Q" => Some(Command::Quit),
        symbol => Status::from_symbol(symbol)
            .filter(Status::is_user_assignable)
            .map(Command::Classify),
    }
}

/// Runs the classification loop until the user quits or input ends.
pub fn run<S: MusicService, R: BufRead>(
    session: &mut Session<S>,
    mut input: R,
    colors: &ColorScheme,
) -> Result<(), SessionError> {
    let startup = session.start()?;
    display_inference(&startup, session.registry(), colors);

    loop {
        let candidate_id = match session.next_candidate() {
            Some(id) => id,
            None => {
                import_followed(session, colors)?;
                match session.next_candidate() {
                    Some(id) => id,
                    None => break,
                }
            }
        };

        let remaining = session.remaining();
        let candidate = session.lookup(&candidate_id)?;
        display_candidate(candidate, remaining, colors);

        let Some(line) = read_command(&mut input, CANDIDATE_PROMPT, colors)? else {
            return Ok(());
        };

        match parse_command(&line) {
            Some(Command::Classify(status)) => {
                let outcome = session.classify(&candidate_id, status)?;
                if let Some(artist) = session.registry().get(&candidate_id) {
                    display_classified(artist, colors);
                }
                if let Some(refresh) = &outcome.related {
                    display_related_refresh(refresh, colors);
                }
                display_inference(&outcome.inference, session.registry(), colors);
            }
            Some(Command::ListPotentials) => display_potentials(&session.potentials(), colors),
            Some(Command::ImportFollowed) => import_followed(session, colors)?,
            Some(Command::Quit) => return Ok(()),
            None => println!("{}", colors.error("Unknown command, nothing changed.")),
        }
    }

    println!("\n{}", colors.success("✅ Every artist has been classified."));
    run_finished_loop(session, &mut input, colors)
}

fn run_finished_loop<S: MusicService, R: BufRead>(
    session: &Session<S>,
    input: &mut R,
    colors: &ColorScheme,
) -> Result<(), SessionError> {
    while let Some(line) = read_command(input, FINISHED_PROMPT, colors)? {
        match parse_command(&line) {
            Some(Command::ListPotentials) => display_potentials(&session.potentials(), colors),
            Some(Command::Quit) => break,
            _ => println!("{}", colors.error("Unknown command.")),
        }
    }
    Ok(())
}

fn import_followed<S: MusicService>(
    session: &mut Session<S>,
    colors: &ColorScheme,
) -> Result<(), SessionError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Checking followed artists...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = session.import_followed();
    spinner.finish_and_clear();

    display_import(&result?, colors);
    Ok(())
}

/// Prompts and reads one line. `None` means the input is exhausted.
fn read_command<R: BufRead>(
    input: &mut R,
    prompt: &str,
    colors: &ColorScheme,
) -> io::Result<Option<String>> {
    print!("{}", colors.prompt(prompt));
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
