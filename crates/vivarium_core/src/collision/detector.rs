use super::{Collision, CollisionDetector, Side};
use crate::geometry::{angle_between, circle_circle};
use crate::world::World;
use vivarium_data::{Creature, Eye, Vec2};

/// Grid-backed detection: only creatures sharing a cell are tested.
///
/// Cell membership overlaps near cell boundaries, so a pair sitting in two
/// cells is reported twice. Resolution tolerates the duplicates.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridDetector;

/// Tests every pair. Used as the reference in tests and benches.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceDetector;

impl CollisionDetector for GridDetector {
    fn detect(&self, world: &World, creatures: &[Creature]) -> Vec<Collision> {
        let mut collisions = border_collisions(world, creatures);

        for cell in world.cells() {
            for &i in &cell.dynamics {
                let Some(c1) = creatures.get(i) else {
                    continue;
                };
                let others = cell.members().filter(|&j| j != i);
                pair_collisions(i, c1, others, creatures, &mut collisions);
            }
        }
        collisions
    }
}

impl CollisionDetector for BruteForceDetector {
    fn detect(&self, world: &World, creatures: &[Creature]) -> Vec<Collision> {
        let mut collisions = border_collisions(world, creatures);
        for (i, c1) in creatures.iter().enumerate() {
            let others = (0..creatures.len()).filter(|&j| j != i);
            pair_collisions(i, c1, others, creatures, &mut collisions);
        }
        collisions
    }
}

/// First crossed side per creature, checked left, right, top, bottom.
fn border_collisions(world: &World, creatures: &[Creature]) -> Vec<Collision> {
    creatures
        .iter()
        .enumerate()
        .filter_map(|(i, c)| {
            crossed_side(c.pos, world.width, world.height).map(|side| Collision::Border {
                creature: i,
                side,
            })
        })
        .collect()
}

pub fn crossed_side(pos: Vec2, width: f64, height: f64) -> Option<Side> {
    if pos.x < 0.0 {
        Some(Side::Left)
    } else if pos.x > width {
        Some(Side::Right)
    } else if pos.y < 0.0 {
        Some(Side::Top)
    } else if pos.y > height {
        Some(Side::Bottom)
    } else {
        None
    }
}

fn pair_collisions(
    i: usize,
    c1: &Creature,
    others: impl Iterator<Item = usize>,
    creatures: &[Creature],
    out: &mut Vec<Collision>,
) {
    let moving = c1.is_moving();
    if !moving && c1.eyes.is_empty() {
        return;
    }
    for j in others {
        let Some(c2) = creatures.get(j) else {
            continue;
        };
        if moving && circle_circle(c1.pos, c1.radius, c2.pos, c2.radius) {
            out.push(Collision::Creature { hunter: i, other: j });
        }
        for (k, eye) in c1.eyes.iter().enumerate() {
            if in_sight(eye, c1.pos, c2) {
                out.push(Collision::Eye {
                    creature: i,
                    eye: k,
                    target: j,
                });
            }
        }
    }
}

/// Target's near edge is within range and its centre within half the FOV.
pub fn in_sight(eye: &Eye, from: Vec2, target: &Creature) -> bool {
    let d = target.pos - from;
    d.len() - target.radius <= eye.range && angle_between(eye.dir, d) <= eye.fov / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::new_eye;
    use vivarium_data::{EyeDetection, State};

    fn world() -> World {
        World::new(600.0, 600.0, 6).expect("world")
    }

    fn plant(x: f64, y: f64, radius: f64) -> Creature {
        Creature {
            pos: Vec2::new(x, y),
            radius,
            state: State::Adult,
            ..Default::default()
        }
    }

    fn mover(x: f64, y: f64, radius: f64) -> Creature {
        Creature {
            speed: 1.0,
            ..plant(x, y, radius)
        }
    }

    fn detect_with<D: CollisionDetector>(d: D, creatures: &[Creature]) -> Vec<Collision> {
        let mut w = world();
        w.update_cells(creatures);
        d.detect(&w, creatures)
    }

    #[test]
    fn test_border_priority() {
        assert_eq!(crossed_side(Vec2::new(-1.0, -1.0), 10.0, 10.0), Some(Side::Left));
        assert_eq!(crossed_side(Vec2::new(11.0, 11.0), 10.0, 10.0), Some(Side::Right));
        assert_eq!(crossed_side(Vec2::new(5.0, -1.0), 10.0, 10.0), Some(Side::Top));
        assert_eq!(crossed_side(Vec2::new(5.0, 11.0), 10.0, 10.0), Some(Side::Bottom));
        assert_eq!(crossed_side(Vec2::new(10.0, 0.0), 10.0, 10.0), None);
    }

    #[test]
    fn test_moving_pair_reported_both_ways() {
        let creatures = vec![mover(50.0, 50.0, 3.0), mover(54.0, 50.0, 3.0)];
        let found = detect_with(BruteForceDetector, &creatures);
        assert!(found.contains(&Collision::Creature { hunter: 0, other: 1 }));
        assert!(found.contains(&Collision::Creature { hunter: 1, other: 0 }));
    }

    #[test]
    fn test_static_pairs_are_ignored() {
        let creatures = vec![plant(50.0, 50.0, 3.0), plant(52.0, 50.0, 3.0)];
        assert!(detect_with(GridDetector, &creatures).is_empty());
        assert!(detect_with(BruteForceDetector, &creatures).is_empty());
    }

    #[test]
    fn test_only_the_mover_hunts() {
        let creatures = vec![mover(50.0, 50.0, 3.0), plant(52.0, 50.0, 3.0)];
        let found = detect_with(GridDetector, &creatures);
        assert!(found.contains(&Collision::Creature { hunter: 0, other: 1 }));
        assert!(!found.contains(&Collision::Creature { hunter: 1, other: 0 }));
    }

    #[test]
    fn test_eye_range_and_fov() {
        let mut watcher = mover(100.0, 100.0, 2.0);
        watcher.eyes = vec![new_eye(80.0, EyeDetection::Biggest, Vec2::new(1.0, 0.0))];
        let ahead = plant(170.0, 100.0, 2.0);
        let behind = plant(40.0, 100.0, 2.0);
        let far = plant(190.0, 100.0, 2.0);
        let edge_in_range = plant(185.0, 100.0, 6.0);

        assert!(in_sight(&watcher.eyes[0], watcher.pos, &ahead));
        assert!(!in_sight(&watcher.eyes[0], watcher.pos, &behind));
        assert!(!in_sight(&watcher.eyes[0], watcher.pos, &far));
        assert!(in_sight(&watcher.eyes[0], watcher.pos, &edge_in_range));

        let off_axis = plant(150.0, 150.0, 2.0);
        assert!(!in_sight(&watcher.eyes[0], watcher.pos, &off_axis));
    }

    #[test]
    fn test_detection_does_not_mutate() {
        let creatures = vec![mover(50.0, 50.0, 3.0), plant(52.0, 50.0, 3.0), mover(-1.0, 5.0, 1.0)];
        let before = creatures.clone();
        let _ = detect_with(GridDetector, &creatures);
        assert_eq!(creatures, before);
    }

    #[test]
    fn test_grid_finds_what_brute_force_finds() {
        let creatures = vec![
            mover(95.0, 95.0, 8.0),
            plant(105.0, 105.0, 6.0),
            mover(300.0, 300.0, 4.0),
            plant(303.0, 301.0, 2.0),
            plant(500.0, 20.0, 2.0),
        ];
        let grid = detect_with(GridDetector, &creatures);
        for c in detect_with(BruteForceDetector, &creatures) {
            assert!(grid.contains(&c), "grid missed {c:?}");
        }
    }
}
