//! Input intake.
//!
//! The engine never talks to a device directly; it asks an [`InputSource`]
//! for the events of each tick. The binary drives the game from a
//! [`ScriptedInput`] built from the command line.

use std::collections::VecDeque;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

/// A player action, already mapped from whatever key or button produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Enter (start the game from the menu).
    Confirm,
    /// Space (pass the turn).
    EndTurn,
    /// Escape or window close.
    Quit,
    /// Left click at a screen position.
    Click { x: i32, y: i32 },
}

/// Something that produces input events once per tick.
pub trait InputSource {
    /// Events that arrived before tick `tick`.
    fn poll(&mut self, tick: u64) -> Vec<InputEvent>;
}

/// Replays a fixed list of steps, one step per tick.
///
/// Each step holds the events delivered on that tick; an empty step is an
/// idle tick. Once the script runs out every poll returns nothing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    steps: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    /// A script that delivers the given steps in order.
    #[must_use]
    pub fn new(steps: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// Steps not yet delivered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _tick: u64) -> Vec<InputEvent> {
        self.steps.pop_front().unwrap_or_default()
    }
}

/// Parses a comma-separated script.
///
/// Steps are `confirm` (or `enter`), `end-turn` (or `space`), `quit` (or
/// `escape`), `click:X:Y`, and `wait` (or `-`) for an idle tick. Several
/// events can share a tick when joined with `+`, e.g. `click:40:40+end-turn`.
impl FromStr for ScriptedInput {
    type Err = anyhow::Error;

    fn from_str(script: &str) -> Result<Self> {
        let steps = script
            .split(',')
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(|step| parse_step(step).with_context(|| format!("bad script step `{step}`")))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(steps))
    }
}

fn parse_step(step: &str) -> Result<Vec<InputEvent>> {
    if matches!(step, "wait" | "-") {
        return Ok(Vec::new());
    }
    step.split('+').map(|token| parse_event(token.trim())).collect()
}

fn parse_event(token: &str) -> Result<InputEvent> {
    match token {
        "confirm" | "enter" => return Ok(InputEvent::Confirm),
        "end-turn" | "space" => return Ok(InputEvent::EndTurn),
        "quit" | "escape" => return Ok(InputEvent::Quit),
        _ => {}
    }

    let Some(coords) = token.strip_prefix("click:") else {
        bail!("unknown event `{token}`");
    };
    let Some((x, y)) = coords.split_once(':') else {
        bail!("click needs `click:X:Y`, got `{token}`");
    };
    Ok(InputEvent::Click {
        x: x.parse().context("click x")?,
        y: y.parse().context("click y")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let mut input: ScriptedInput = "enter, wait, click:40:72+space, escape".parse().unwrap();
        assert_eq!(input.remaining(), 4);
        assert_eq!(input.poll(1), vec![InputEvent::Confirm]);
        assert!(input.poll(2).is_empty());
        assert_eq!(
            input.poll(3),
            vec![InputEvent::Click { x: 40, y: 72 }, InputEvent::EndTurn]
        );
        assert_eq!(input.poll(4), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_exhausted_script_is_idle() {
        let mut input = ScriptedInput::new([vec![InputEvent::EndTurn]]);
        input.poll(1);
        assert!(input.poll(2).is_empty());
        assert!(input.poll(3).is_empty());
    }

    #[test]
    fn test_empty_script() {
        let input: ScriptedInput = "".parse().unwrap();
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_rejects_unknown_event() {
        assert!("confirm,jump".parse::<ScriptedInput>().is_err());
        assert!("click:4".parse::<ScriptedInput>().is_err());
        assert!("click:a:4".parse::<ScriptedInput>().is_err());
    }

    #[test]
    fn test_negative_click_coordinates_parse() {
        let mut input: ScriptedInput = "click:-5:10".parse().unwrap();
        assert_eq!(input.poll(1), vec![InputEvent::Click { x: -5, y: 10 }]);
    }
}
