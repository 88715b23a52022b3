use bevy::prelude::*;
use showturtle::ShowturtlePlugin;

fn main() -> AppExit {
    App::new().add_plugins(ShowturtlePlugin).run()
}
