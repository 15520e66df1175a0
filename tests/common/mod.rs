//! Shared test doubles.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::KeyCode;

use line_shooter::compute::Clock;
use line_shooter::dice::Dice;
use line_shooter::input::Keyboard;

/// Hands out scripted rolls in order, then zeros.
#[derive(Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
    pub asked: Vec<u32>,
}

impl ScriptedDice {
    pub fn new(rolls: &[u32]) -> Self {
        ScriptedDice {
            rolls: rolls.iter().copied().collect(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        self.asked.push(sides);
        let value = self.rolls.pop_front().unwrap_or(0);
        assert!(value < sides, "scripted roll {} out of range {}", value, sides);
        value
    }
}

/// One entry per tick: `None` means no key pressed that tick.
#[derive(Debug, Default)]
pub struct ScriptedKeyboard {
    ticks: VecDeque<Option<KeyCode>>,
}

impl ScriptedKeyboard {
    pub fn new(ticks: Vec<Option<KeyCode>>) -> Self {
        ScriptedKeyboard {
            ticks: ticks.into(),
        }
    }
}

impl Keyboard for ScriptedKeyboard {
    fn key_pending(&mut self) -> std::io::Result<bool> {
        match self.ticks.front() {
            Some(Some(_)) => Ok(true),
            Some(None) => {
                self.ticks.pop_front();
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn read_key(&mut self) -> std::io::Result<KeyCode> {
        Ok(self.ticks.pop_front().flatten().unwrap_or(KeyCode::Null))
    }
}

/// Records sleeps instead of blocking.
#[derive(Debug, Default)]
pub struct RecordingClock {
    pub sleeps: Vec<Duration>,
}

impl Clock for RecordingClock {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}
