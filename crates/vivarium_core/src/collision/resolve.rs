use super::{Collision, Side};
use crate::config::EdgeMode;
use crate::creature::{CreatureLogic, EyeLogic};
use crate::world::World;
use vivarium_data::Creature;

/// Applies every event. Returns the number of successful meals.
///
/// Indices that no longer fit `creatures` are skipped.
pub fn resolve_all(
    collisions: &[Collision],
    creatures: &mut [Creature],
    world: &World,
    now: f64,
    cooldown: f64,
) -> usize {
    let mut meals = 0;
    for collision in collisions {
        match *collision {
            Collision::Border { creature, side } => {
                if let Some(c) = creatures.get_mut(creature) {
                    wrap(c, side, world);
                }
            }
            Collision::Creature { hunter, other } => {
                if let Some((a, b)) = pair_mut(creatures, hunter, other) {
                    if a.collide(b, now, cooldown) {
                        meals += 1;
                    }
                }
            }
            Collision::Eye {
                creature,
                eye,
                target,
            } => {
                let Some(radius) = creatures.get(target).map(|t| t.radius) else {
                    continue;
                };
                if let Some(e) = creatures.get_mut(creature).and_then(|c| c.eyes.get_mut(eye)) {
                    e.sees(radius);
                }
            }
        }
    }
    meals
}

fn wrap(c: &mut Creature, side: Side, world: &World) {
    match world.edge_mode {
        EdgeMode::Loop => match side {
            Side::Left => c.pos.x += world.width,
            Side::Right => c.pos.x -= world.width,
            Side::Top => c.pos.y += world.height,
            Side::Bottom => c.pos.y -= world.height,
        },
    }
}

/// Two distinct mutable elements, in argument order.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= items.len() || b >= items.len() {
        return None;
    }
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        Some((&mut lo[a], &mut hi[0]))
    } else {
        let (lo, hi) = items.split_at_mut(a);
        Some((&mut hi[0], &mut lo[b]))
    }
}
