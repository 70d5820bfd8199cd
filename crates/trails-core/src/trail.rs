use crate::chain::Chain;
use crate::config::TrailConfig;
use crate::error::ConfigError;
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;

/// The bundle of chains rendered each frame, stiffest last.
#[derive(Clone, Debug, Default)]
pub struct TrailSet {
    chains: Vec<Chain>,
}

impl TrailSet {
    /// Empty set, as before the first interaction.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fresh set of `config.trails` chains, all at rest on `target`.
    pub fn build<R: Rng + ?Sized>(
        config: &TrailConfig,
        target: DVec2,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let chains = (0..config.trails)
            .map(|i| Chain::new(config.spring_for(i), config, target, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { chains })
    }

    /// Replace every chain; prior momentum is dropped.
    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        config: &TrailConfig,
        target: DVec2,
        rng: &mut R,
    ) -> Result<(), ConfigError> {
        *self = Self::build(config, target, rng)?;
        Ok(())
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Update then draw each chain in order.
    pub fn step<S: Surface + ?Sized>(&mut self, target: DVec2, surface: &mut S) {
        for chain in &mut self.chains {
            chain.update(target);
            chain.draw(surface);
        }
    }
}
