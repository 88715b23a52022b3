// tests/presentation.rs
use std::collections::HashSet;
use std::time::Duration;

use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy_rand::prelude::{EntropyPlugin, WyRand};
use pretty_assertions::assert_eq;

use showturtle::initialization::{
    CancelPresentation, EventPlugin, PresentationFinished, PresentationStarted, StatePlugin,
};
use showturtle::presenter::{DisplayCommand, Opacity, PresenterPlugin, TextDisplay};
use showturtle::sequencer::{Sequencer, SequencerPlugin};
use showturtle::tokens::TokenPool;
use showturtle::{AppState, PresentationSystemSet};

const POOL: [&str; 3] = ["BACK", "FORWARD", "LEFT"];
const MAX_FRAMES: usize = 5_000;

#[derive(Resource, Default)]
struct CommandLog {
    commands: Vec<DisplayCommand>,
    started: Vec<PresentationStarted>,
    finished: Vec<PresentationFinished>,
}

fn record(
    mut log: ResMut<CommandLog>,
    mut commands: EventReader<DisplayCommand>,
    mut started: EventReader<PresentationStarted>,
    mut finished: EventReader<PresentationFinished>,
) {
    log.commands.extend(commands.read().cloned());
    log.started.extend(started.read().copied());
    log.finished.extend(finished.read().copied());
}

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        EntropyPlugin::<WyRand>::with_seed(42u64.to_le_bytes()),
    ))
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(20)))
    .insert_resource(TokenPool::from_raw(POOL))
    .init_resource::<CommandLog>()
    .add_plugins((StatePlugin, EventPlugin, PresenterPlugin, SequencerPlugin))
    .add_systems(Update, record.after(PresentationSystemSet::Display));

    // Startup: Text-Element anlegen
    app.update();
    app
}

// Ersetzt das Laden der Schrift
fn begin_presenting(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Presenting);
    app.update();
}

fn current_state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

fn run_until_finished(app: &mut App) {
    for _ in 0..MAX_FRAMES {
        if current_state(app) == AppState::Finished {
            // ein Frame mehr, damit PresentationFinished aufgezeichnet wird
            app.update();
            return;
        }
        app.update();
    }
    panic!("presentation did not finish within {MAX_FRAMES} frames");
}

fn presented(commands: &[DisplayCommand]) -> Vec<String> {
    commands
        .iter()
        .filter_map(|command| match command {
            DisplayCommand::Present { token, .. } => Some(token.to_string()),
            _ => None,
        })
        .collect()
}

#[test]
fn full_presentation_runs_intro_cycle_and_outro() {
    let mut app = headless_app();
    begin_presenting(&mut app);
    run_until_finished(&mut app);

    let log = app.world().resource::<CommandLog>();
    let shown = presented(&log.commands);
    let len = POOL.len();

    assert_eq!(log.started, vec![PresentationStarted { tokens: len }]);
    assert_eq!(shown.first().map(String::as_str), Some("GO"));
    assert_eq!(shown.last().map(String::as_str), Some("SHOWTURTLE"));

    let cycle = &shown[1..shown.len() - 1];
    assert_eq!(cycle.len(), 2 * len - 1);
    for i in 0..cycle.len() - len {
        assert_eq!(cycle[i], cycle[i + len]);
    }
    let distinct: HashSet<&str> = cycle.iter().map(String::as_str).collect();
    assert_eq!(distinct, POOL.iter().copied().collect::<HashSet<_>>());

    let after_outro: Vec<DisplayCommand> = log
        .commands
        .iter()
        .skip_while(|command| *command != &DisplayCommand::flat("SHOWTURTLE"))
        .skip(1)
        .cloned()
        .collect();
    let mut expected = Vec::new();
    for _ in 0..5 {
        expected.push(DisplayCommand::SetOpacity(Opacity::Hidden));
        expected.push(DisplayCommand::SetOpacity(Opacity::Visible));
    }
    expected.push(DisplayCommand::Hide);
    assert_eq!(after_outro, expected);

    assert_eq!(log.finished, vec![PresentationFinished { completed: true }]);

    let world = app.world_mut();
    let mut display = world.query_filtered::<(&Text, &TextColor, &Visibility), With<TextDisplay>>();
    let (text, color, visibility) = display.single(world);
    assert_eq!(text.0, "SHOWTURTLE");
    assert_eq!(color.0.alpha(), 1.0);
    assert_eq!(*visibility, Visibility::Hidden);
}

#[test]
fn cancel_stops_after_intro() {
    let mut app = headless_app();
    begin_presenting(&mut app);

    app.world_mut().send_event(CancelPresentation);
    app.update();
    // zweiter Abbruch ist wirkungslos
    app.world_mut().send_event(CancelPresentation);
    for _ in 0..300 {
        app.update();
    }

    assert_eq!(current_state(&app), AppState::Finished);
    let log = app.world().resource::<CommandLog>();
    assert_eq!(log.commands, vec![DisplayCommand::flat("GO")]);
    assert_eq!(log.finished, vec![PresentationFinished { completed: false }]);
}

#[test]
fn missing_text_display_exits_with_error() {
    let mut app = headless_app();

    let world = app.world_mut();
    let mut display = world.query_filtered::<Entity, With<TextDisplay>>();
    let entity = display.single(world);
    world.entity_mut(entity).despawn_recursive();

    begin_presenting(&mut app);
    app.update();

    assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
}

#[test]
fn nothing_is_presented_while_loading() {
    let mut app = headless_app();
    for _ in 0..200 {
        app.update();
    }

    assert_eq!(current_state(&app), AppState::Loading);
    assert!(app.world().get_resource::<Sequencer>().is_none());
    let log = app.world().resource::<CommandLog>();
    assert!(log.commands.is_empty());
    assert!(log.started.is_empty());

    begin_presenting(&mut app);
    let log = app.world().resource::<CommandLog>();
    assert_eq!(log.commands, vec![DisplayCommand::flat("GO")]);
    assert_eq!(log.started, vec![PresentationStarted { tokens: POOL.len() }]);
}

#[test]
fn intro_holds_for_full_duration_after_start() {
    let mut app = headless_app();
    begin_presenting(&mut app);

    let remaining = app.world().resource::<Sequencer>().time_until_next_step();
    assert_eq!(remaining, Some(Duration::from_millis(2000)));

    // 2000 ms bei 20 ms pro Frame: 99 Frames nur GO, der 100. zeigt den ersten Begriff
    for _ in 0..99 {
        app.update();
    }
    assert_eq!(presented(&app.world().resource::<CommandLog>().commands).len(), 1);

    app.update();
    assert_eq!(presented(&app.world().resource::<CommandLog>().commands).len(), 2);
}
