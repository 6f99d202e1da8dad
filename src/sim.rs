use rand::Rng;

use crate::{transition, Census, World};

/// computes the next generation of `world`.
///
/// every cell reads the same snapshot and writes into a fresh world, so no
/// transition observes another one's result. cells are visited row major.
pub fn advance<W, R>(world: &W, rng: &mut R) -> W
where
    W: World,
    R: Rng + ?Sized,
{
    let mut next = W::blank(world.size());
    for pos in world.positions() {
        next.set(pos, transition(world, pos, rng));
    }
    next
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Changed,
    /// the new generation is identical to the previous one.
    Stable,
}

/// owns the current generation and the random source driving it.
#[derive(Debug)]
pub struct Sim<W, R>
where
    W: World,
    R: Rng,
{
    world: W,
    rng: R,
    generation: usize,
    fingerprint: u64,
}

impl<W, R> Sim<W, R>
where
    W: World,
    R: Rng,
{
    pub fn new(world: W, rng: R) -> Self {
        let fingerprint = world.fingerprint();
        Self {
            world,
            rng,
            generation: 0,
            fingerprint,
        }
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn census(&self) -> Census {
        self.world.census()
    }

    /// replaces the current generation with the next one.
    pub fn step(&mut self) -> Step {
        let next = advance(&self.world, &mut self.rng);
        let fingerprint = next.fingerprint();
        let stable = fingerprint == self.fingerprint && next == self.world;

        self.world = next;
        self.fingerprint = fingerprint;
        self.generation += 1;

        if stable {
            Step::Stable
        } else {
            Step::Changed
        }
    }
}
