//! Fixed-capacity particle pool and the per-frame tick.
//!
//! Slots are allocated once and reused. Live particles always occupy the
//! prefix `[0, live_count)`, newest first, so every scan stops at the first
//! dead slot. Removal compacts the prefix in place and keeps the relative
//! order of the survivors.

use log::{debug, trace};

use super::{CollisionResolver, ForceField, PhysicsSettings, PoolSnapshot, RenderInstance};
use crate::launch::LaunchParams;
use crate::particle::Particle;
use crate::vector::Vector2D;

/// Default pool size; enough for the demo without dropping frames.
pub const DEFAULT_CAPACITY: usize = 1000;

/// What happened during one [`ParticlePool::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub removed_by_click: usize,
    pub removed_out_of_bounds: usize,
    pub colliding: usize,
    pub live: usize,
}

pub struct ParticlePool {
    slots: Vec<Particle>,
    live: usize,
    forces: ForceField,
    collisions: CollisionResolver,
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self::with_settings(capacity, &PhysicsSettings::default())
    }

    pub fn with_settings(capacity: usize, settings: &PhysicsSettings) -> Self {
        Self {
            slots: vec![Particle::dead(); capacity],
            live: 0,
            forces: ForceField::new(settings),
            collisions: CollisionResolver::new(settings),
        }
    }

    /// Drops every particle and reallocates `capacity` dead slots.
    pub fn initialize(&mut self, capacity: usize) {
        self.slots.clear();
        self.slots.resize(capacity, Particle::dead());
        self.live = 0;
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn live_count(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn is_full(&self) -> bool {
        self.live == self.slots.len()
    }

    /// Live particles, newest first.
    pub fn live(&self) -> &[Particle] {
        &self.slots[..self.live]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.live().iter()
    }

    /// All slots including the dead tail.
    pub fn slots(&self) -> &[Particle] {
        &self.slots
    }

    /// Spawns a particle at index 0. Returns `false` and leaves the pool
    /// untouched when every slot is already live.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        &mut self,
        mass: f64,
        charge: f64,
        x: f64,
        y: f64,
        velocity: Vector2D,
        acceleration: Vector2D,
        fixed: bool,
    ) -> bool {
        if self.is_full() {
            trace!("pool full ({} slots), spawn at ({:.1}, {:.1}) dropped", self.capacity(), x, y);
            return false;
        }

        let slot = self.live;
        self.slots[slot].spawn(mass, charge, x, y, velocity, acceleration, fixed);
        self.slots[..=slot].rotate_right(1);
        self.live += 1;
        self.debug_check_prefix();
        true
    }

    /// Spawns from a finished slingshot launch.
    pub fn spawn_launch(&mut self, launch: &LaunchParams) -> bool {
        self.spawn(
            launch.mass(),
            launch.charge(),
            launch.origin.x,
            launch.origin.y,
            launch.velocity(),
            Vector2D::zeros(),
            launch.fixed,
        )
    }

    /// Marks the first particle (skipping index 0) whose disc contains
    /// `(x, y)` for removal on the next tick. The newest particle at index 0
    /// is marked along with it. Returns whether anything was hit.
    pub fn mark_clicked(&mut self, x: f64, y: f64) -> bool {
        let hit = (1..self.live).find(|&i| self.slots[i].contains_point(x, y));
        match hit {
            Some(i) => {
                self.slots[i].clicked = true;
                self.slots[0].clicked = true;
                true
            }
            None => false,
        }
    }

    /// Advances the simulation by one frame.
    pub fn tick(&mut self, world_width: f64, world_height: f64) -> TickReport {
        let removed_by_click = self.retain_live(|p| !p.clicked);

        let live = &mut self.slots[..self.live];
        self.forces.accumulate(live);
        let colliding = self.collisions.resolve(live);

        let removed_out_of_bounds = self.retain_live(|p| {
            p.integrate();
            !p.is_out_of_bounds(world_width, world_height)
        });

        if removed_by_click + removed_out_of_bounds > 0 {
            debug!(
                "tick removed {} clicked and {} out-of-bounds particles, {} live",
                removed_by_click, removed_out_of_bounds, self.live
            );
        }

        TickReport {
            removed_by_click,
            removed_out_of_bounds,
            colliding,
            live: self.live,
        }
    }

    /// Retires every live particle.
    pub fn clear(&mut self) {
        self.retain_live(|_| false);
    }

    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot::from_particles(self.live())
    }

    pub fn render_instances(&self) -> Vec<RenderInstance> {
        self.iter().map(RenderInstance::from).collect()
    }

    /// True when no dead slot precedes a live one and the live count matches.
    pub fn is_prefix_contiguous(&self) -> bool {
        self.slots[..self.live].iter().all(|p| p.alive) && self.slots[self.live..].iter().all(|p| !p.alive)
    }

    /// Visits the live prefix in index order, resetting particles for which
    /// `keep` is false and sliding the survivors down over them. Returns the
    /// number retired.
    fn retain_live<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&mut Particle) -> bool,
    {
        let mut write = 0;
        for read in 0..self.live {
            if keep(&mut self.slots[read]) {
                // [write, read) holds only reset slots
                self.slots.swap(read, write);
                write += 1;
            } else {
                self.slots[read].reset();
            }
        }

        let retired = self.live - write;
        self.live = write;
        self.debug_check_prefix();
        retired
    }

    fn debug_check_prefix(&self) {
        debug_assert!(
            self.is_prefix_contiguous(),
            "alive-prefix invariant broken: live_count = {}",
            self.live
        );
    }
}
