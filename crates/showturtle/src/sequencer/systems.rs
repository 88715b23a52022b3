// src/sequencer/systems.rs
use bevy::prelude::*;
use bevy_rand::prelude::{Entropy, GlobalEntropy, WyRand};

use super::machine::Sequencer;
use super::types::OutroStage;
use crate::config::PresentationConfig;
use crate::initialization::{CancelPresentation, PresentationFinished, PresentationStarted};
use crate::presenter::DisplayCommand;
use crate::tokens::{shuffle, TokenPool};
use crate::AppState;

// Beim Eintritt in Presenting: mischen, Sequencer erzeugen und Intro zeigen
pub fn start_presentation(
    mut commands: Commands,
    pool: Res<TokenPool>,
    config: Res<PresentationConfig>,
    mut rng_param: GlobalEntropy<WyRand>,
    mut display: EventWriter<DisplayCommand>,
    mut started: EventWriter<PresentationStarted>,
) {
    let rng: &mut Entropy<WyRand> = &mut *rng_param;

    if pool.is_empty() {
        warn!("Token pool is empty, only intro and outro will be shown");
    }

    let shuffled = shuffle(pool.tokens(), rng);
    let tokens = shuffled.len();
    let mut sequencer = Sequencer::new(shuffled, config.timing.clone());
    sequencer.start(&mut display);

    started.send(PresentationStarted { tokens });
    commands.insert_resource(sequencer);
}

pub fn request_cancel_on_escape(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut cancel: EventWriter<CancelPresentation>,
) {
    if keys.is_some_and(|keys| keys.just_pressed(KeyCode::Escape)) {
        info!("Escape pressed, cancelling presentation");
        cancel.send(CancelPresentation);
    }
}

pub fn handle_cancel_requests(
    mut requests: EventReader<CancelPresentation>,
    mut sequencer: ResMut<Sequencer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    if sequencer.cancel() {
        debug!("Pending sequencer step dropped");
    }
    next_state.set(AppState::Finished);
}

/// Treibt den Sequencer um die Frame-Zeit voran.
pub fn drive_sequencer(
    time: Res<Time>,
    mut sequencer: ResMut<Sequencer>,
    mut display: EventWriter<DisplayCommand>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    // Im Start-Frame zählt die Zeit vor dem Intro nicht gegen dessen Haltezeit
    if sequencer.is_added() || sequencer.is_finished() {
        return;
    }

    let steps = sequencer.run(time.delta(), &mut display);
    if steps > 1 {
        trace!("{steps} sequencer steps in one frame");
    }

    if sequencer.is_finished() {
        next_state.set(AppState::Finished);
    }
}

// OnExit(Presenting): Ergebnis melden, danach wird die Resource entfernt
pub fn finish_presentation(
    sequencer: Option<ResMut<Sequencer>>,
    mut finished: EventWriter<PresentationFinished>,
) {
    let Some(mut sequencer) = sequencer else {
        return;
    };

    let completed = sequencer.state().outro == Some(OutroStage::Done);
    sequencer.cancel();
    finished.send(PresentationFinished { completed });
}
