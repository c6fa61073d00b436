//! Snapshot assembly: the complete visible state for one tick.

use hecs::World;

use barrage_core::components::{
    Actor, ActorState, FormationAssignment, Obstacle, Orientation, Position, Projectile,
    ProjectileState, Station, UserControl,
};
use barrage_core::enums::SimPhase;
use barrage_core::events::SimEvent;
use barrage_core::state::{ActorView, ProjectileView, SimSnapshot, StationView};
use barrage_core::types::SimTime;

/// Build the snapshot broadcast to rendering collaborators.
pub fn build(world: &World, time: &SimTime, phase: SimPhase, events: Vec<SimEvent>) -> SimSnapshot {
    let actor = {
        let mut query = world.query::<(&Actor, &Position, &Orientation, &ActorState, &UserControl)>();
        query
            .iter()
            .next()
            .map(|(_, (_actor, pos, orient, state, control))| ActorView {
                position: pos.0,
                orientation: orient.0,
                nav: state.nav,
                user_controlled: control.enabled,
            })
    };

    let station = {
        let mut query = world.query::<(&Station, &Position, &Obstacle)>();
        query
            .iter()
            .next()
            .map(|(_, (_station, pos, obs))| StationView {
                position: pos.0,
                avoidance_radius: obs.avoidance_radius,
            })
    };

    let projectiles = {
        let mut query = world.query::<(
            &Projectile,
            &Position,
            &Orientation,
            &FormationAssignment,
            &ProjectileState,
        )>();
        query
            .iter()
            .map(|(_, (_projectile, pos, orient, assignment, state))| ProjectileView {
                position: pos.0,
                orientation: orient.0,
                formation: assignment.formation,
                near_miss: state.near_miss,
            })
            .collect()
    };

    SimSnapshot {
        time: *time,
        phase,
        actor,
        station,
        projectiles,
        events,
    }
}
