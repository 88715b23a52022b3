// src/sequencer/machine.rs
use std::time::Duration;

use bevy::prelude::*;

use super::timer::StepTimer;
use super::types::{OutroStage, Phase, SequenceTiming, SequencerState};
use crate::presenter::{DisplayCommand, DisplaySink, Opacity};
use crate::tokens::ShuffledPool;

/// Zeitgesteuerter Ablauf: Intro -> Durchläufe über den Pool -> Outro.
///
/// Jeder Schritt plant seinen Nachfolger selbst über den `StepTimer`.
/// Die Zeit kommt von außen (`run`), daher lässt sich der Ablauf ohne
/// Wanduhr testen.
#[derive(Resource, Debug)]
pub struct Sequencer {
    pool: ShuffledPool,
    timing: SequenceTiming,
    state: SequencerState,
    timer: StepTimer,
    started: bool,
}

impl Sequencer {
    pub fn new(pool: ShuffledPool, timing: SequenceTiming) -> Self {
        Self {
            pool,
            timing,
            state: SequencerState::default(),
            timer: StepTimer::default(),
            started: false,
        }
    }

    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    pub fn time_until_next_step(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    pub fn is_finished(&self) -> bool {
        self.state.cancelled || self.state.outro == Some(OutroStage::Done)
    }

    /// Intro: zeigt den Intro-Begriff und wartet bis zum ersten Durchlauf.
    pub fn start(&mut self, sink: &mut impl DisplaySink) {
        if self.started || self.state.cancelled {
            warn!("Sequencer already started or cancelled, ignoring start");
            return;
        }
        self.started = true;

        sink.submit(DisplayCommand::flat(self.timing.intro_token.clone()));
        // Index springt auf 1, bevor der erste Pool-Eintrag gezeigt wird
        self.state.current_index += 1;
        self.state.phase = Phase::Cycling;
        self.timer.schedule(self.timing.intro_hold);
        debug!(
            "Intro shown, cycling starts in {:?}",
            self.timing.intro_hold
        );
    }

    /// Führt den aktuell fälligen Schritt aus.
    pub fn advance(&mut self, sink: &mut impl DisplaySink) {
        if !self.started || self.state.cancelled {
            return;
        }

        match self.state.phase {
            Phase::Intro => {}
            Phase::Cycling => self.cycle_step(sink),
            Phase::Outro => self.outro_step(sink),
        }
    }

    /// Lässt `elapsed` Zeit vergehen und führt alle darin fälligen Schritte
    /// in Reihenfolge aus. Gibt die Anzahl der Schritte zurück.
    pub fn run(&mut self, elapsed: Duration, sink: &mut impl DisplaySink) -> usize {
        let mut budget = elapsed;
        let mut steps = 0;
        while !self.state.cancelled && self.timer.consume(&mut budget) {
            self.advance(sink);
            steps += 1;
        }
        steps
    }

    /// Verwirft den ausstehenden Schritt; weitere Aufrufe sind wirkungslos.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.timer.cancel();
        if !self.state.cancelled {
            self.state.cancelled = true;
            debug!(
                "Sequencer cancelled in phase {} at index {}",
                self.state.phase, self.state.current_index
            );
        }
        was_pending
    }

    fn cycle_step(&mut self, sink: &mut impl DisplaySink) {
        let end = self.pool.len() * self.timing.passes;
        if self.state.current_index >= end {
            self.enter_outro(sink);
            return;
        }

        if let Some(token) = self.pool.get_wrapped(self.state.current_index) {
            sink.submit(DisplayCommand::flat(token.clone()));
        }
        self.state.current_index += 1;

        let delay = self.timing.curve.delay(self.state.current_index);
        self.timer.schedule(delay);
    }

    fn enter_outro(&mut self, sink: &mut impl DisplaySink) {
        info!(
            "Pool exhausted after index {}, entering outro",
            self.state.current_index
        );
        self.state.phase = Phase::Outro;
        self.state.outro = Some(OutroStage::Hold);
        sink.submit(DisplayCommand::flat(self.timing.outro_token.clone()));
        self.timer.schedule(self.timing.outro_hold);
    }

    fn outro_step(&mut self, sink: &mut impl DisplaySink) {
        match self.state.outro {
            Some(OutroStage::Hold) => self.flash_or_settle(0, sink),
            Some(OutroStage::Dimmed { flashes }) => {
                sink.submit(DisplayCommand::SetOpacity(Opacity::Visible));
                self.state.outro = Some(OutroStage::Lit {
                    flashes: flashes + 1,
                });
                self.timer.schedule(self.timing.flash_interval);
            }
            Some(OutroStage::Lit { flashes }) => self.flash_or_settle(flashes, sink),
            Some(OutroStage::FinalHold) => {
                sink.submit(DisplayCommand::Hide);
                self.state.outro = Some(OutroStage::Done);
                info!("Outro finished, text hidden");
            }
            Some(OutroStage::Done) | None => {}
        }
    }

    fn flash_or_settle(&mut self, flashes: u8, sink: &mut impl DisplaySink) {
        if flashes < self.timing.flash_count {
            sink.submit(DisplayCommand::SetOpacity(Opacity::Hidden));
            self.state.outro = Some(OutroStage::Dimmed { flashes });
            self.timer.schedule(self.timing.flash_interval);
        } else {
            self.state.outro = Some(OutroStage::FinalHold);
            self.timer.schedule(self.timing.final_hold);
        }
    }
}
