use rand::Rng;

use crate::{Cell, Pos, World};

/// chance for each cancerous neighbor to infect a tissue cell.
pub const INFECTION_CHANCE: f64 = 0.2;
/// chance for each immune neighbor to kill a cancer cell.
pub const KILL_CHANCE: f64 = 0.5;
/// cancer cells older than this die of age.
pub const MAX_CANCER_AGE: u32 = 10;

/// the next state of the cell at `pos`, computed from the `world` snapshot only.
///
/// one uniform draw is consumed per relevant neighbor, in scan order, until a
/// trial succeeds. panics when `pos` is outside of `world`.
pub fn transition<W, R>(world: &W, pos: Pos, rng: &mut R) -> Cell
where
    W: World,
    R: Rng + ?Sized,
{
    match world.get(pos) {
        Cell::Tissue => {
            if any_trial(world, pos, rng, Cell::is_cancer, INFECTION_CHANCE) {
                Cell::cancer()
            } else {
                Cell::Tissue
            }
        }
        Cell::Cancer { age } => {
            let age = age.saturating_add(1);
            if age > MAX_CANCER_AGE {
                // natural death preempts immune kill
                return Cell::Dead;
            }
            if any_trial(world, pos, rng, Cell::is_immune, KILL_CHANCE) {
                Cell::Dead
            } else {
                Cell::Cancer { age }
            }
        }
        cell @ (Cell::Immune | Cell::Dead) => cell,
    }
}

/// runs one bernoulli trial per matching neighbor, stopping at the first success.
fn any_trial<W, R>(
    world: &W,
    pos: Pos,
    rng: &mut R,
    is_match: fn(&Cell) -> bool,
    chance: f64,
) -> bool
where
    W: World,
    R: Rng + ?Sized,
{
    world
        .neighbors(pos)
        .into_iter()
        .filter(|neighbor| is_match(&world.get(*neighbor)))
        .any(|_| rng.gen::<f64>() < chance)
}
