use crate::{Cell, ConfigError};

/// cumulative thresholds partitioning a uniform draw in [0, 1) into the four states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Population {
    tissue_until: f64,
    cancer_until: f64,
    immune_until: f64,
}

impl Population {
    pub fn new(
        tissue_until: f64,
        cancer_until: f64,
        immune_until: f64,
    ) -> Result<Self, ConfigError> {
        let thresholds = [tissue_until, cancer_until, immune_until];
        let in_range = thresholds.iter().all(|t| (0.0..=1.0).contains(t));
        let ordered = thresholds.windows(2).all(|pair| pair[0] <= pair[1]);
        if !in_range || !ordered {
            return Err(ConfigError::Population(thresholds));
        }
        Ok(Self {
            tissue_until,
            cancer_until,
            immune_until,
        })
    }

    pub fn sample(&self, draw: f64) -> Cell {
        if draw < self.tissue_until {
            Cell::Tissue
        } else if draw < self.cancer_until {
            Cell::cancer()
        } else if draw < self.immune_until {
            Cell::Immune
        } else {
            Cell::Dead
        }
    }
}

impl Default for Population {
    /// roughly 70% tissue, 5% cancer, 5% immune and 20% dead.
    fn default() -> Self {
        Self {
            tissue_until: 0.70,
            cancer_until: 0.75,
            immune_until: 0.80,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::{Grid, World};

    #[test]
    fn default_thresholds() {
        let population = Population::default();
        assert_eq!(population.sample(0.0), Cell::Tissue);
        assert_eq!(population.sample(0.69), Cell::Tissue);
        assert_eq!(population.sample(0.70), Cell::Cancer { age: 0 });
        assert_eq!(population.sample(0.75), Cell::Immune);
        assert_eq!(population.sample(0.79), Cell::Immune);
        assert_eq!(population.sample(0.80), Cell::Dead);
        assert_eq!(population.sample(0.999), Cell::Dead);
    }

    #[test]
    fn rejects_bad_thresholds() {
        assert!(Population::new(0.5, 0.4, 0.9).is_err());
        assert!(Population::new(-0.1, 0.4, 0.9).is_err());
        assert!(Population::new(0.5, 0.6, 1.5).is_err());
        assert!(Population::new(0.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn seeded_mix_is_close_to_thresholds() {
        let mut rng = Pcg64::seed_from_u64(7);
        let grid = Grid::seeded(100, &Population::default(), &mut rng);
        let census = grid.census();
        assert_eq!(census.total(), 10_000);
        assert!((6_500..7_500).contains(&census.tissue), "{census:?}");
        assert!((300..700).contains(&census.cancer), "{census:?}");
        assert!((300..700).contains(&census.immune), "{census:?}");
        assert!((1_700..2_300).contains(&census.dead), "{census:?}");
    }

    #[test]
    fn seeded_is_deterministic() {
        let population = Population::default();
        let first = Grid::seeded(20, &population, &mut Pcg64::seed_from_u64(42));
        let second = Grid::seeded(20, &population, &mut Pcg64::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
