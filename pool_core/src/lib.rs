pub mod components;
pub mod config;
pub mod game;
pub mod geometry;
pub mod params;
pub mod rack;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use systems::*;

/// Run one deterministic physics tick over the ball set.
///
/// Events are cleared first, so after the call they describe this tick only.
pub fn step(balls: &mut [Ball], config: &Config, events: &mut Events) {
    events.clear();

    // 1. Move balls, friction, rails
    integrate(balls, config, events);

    // 2. Ball-ball contacts
    resolve_collisions(balls, config, events);

    // 3. Pockets
    detect_pockets(balls, config, events);
}
