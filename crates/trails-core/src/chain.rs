//! Spring-damper node chains.
//!
//! A chain is a fixed-length run of point masses. The head springs toward the
//! shared target, every follower springs toward its predecessor and inherits a
//! share of the predecessor's velocity. The working spring constant decays by
//! `tension` per node, so the tail is looser than the head.

use crate::config::TrailConfig;
use crate::constants::MIN_NODES_PER_CHAIN;
use crate::error::ConfigError;
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;

/// A single point mass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Node {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Node {
    #[inline]
    pub fn at(pos: DVec2) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chain {
    spring: f64,
    friction: f64,
    dampening: f64,
    tension: f64,
    nodes: Vec<Node>,
}

/// Uniform draw in `[-half_width, half_width)`.
#[inline]
fn jitter<R: Rng + ?Sized>(rng: &mut R, half_width: f64) -> f64 {
    (rng.gen::<f64>() * 2.0 - 1.0) * half_width
}

impl Chain {
    /// Build a chain for a trail set: spring and friction are jittered around
    /// `spring_base` and `config.friction`.
    pub fn new<R: Rng + ?Sized>(
        spring_base: f64,
        config: &TrailConfig,
        target: DVec2,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let spring = spring_base + jitter(rng, config.spring_jitter);
        let friction = config.friction + jitter(rng, config.friction_jitter);
        Self::with_params(spring, friction, config, target)
    }

    /// Build a chain with exact spring and friction values.
    pub fn with_params(
        spring: f64,
        friction: f64,
        config: &TrailConfig,
        target: DVec2,
    ) -> Result<Self, ConfigError> {
        if config.size < MIN_NODES_PER_CHAIN {
            return Err(ConfigError::TooFewNodes {
                got: config.size,
                min: MIN_NODES_PER_CHAIN,
            });
        }
        Ok(Self {
            spring,
            friction,
            dampening: config.dampening,
            tension: config.tension,
            nodes: vec![Node::at(target); config.size],
        })
    }

    pub fn spring(&self) -> f64 {
        self.spring
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn head(&self) -> &Node {
        &self.nodes[0]
    }

    /// Advance every node by one explicit-Euler tick, head first.
    pub fn update(&mut self, target: DVec2) {
        let mut spring = self.spring;
        let head = &mut self.nodes[0];
        head.vel += (target - head.pos) * spring;

        for i in 0..self.nodes.len() {
            if i > 0 {
                let prev = self.nodes[i - 1];
                let node = &mut self.nodes[i];
                node.vel += (prev.pos - node.pos) * spring;
                node.vel += prev.vel * self.dampening;
            }
            let node = &mut self.nodes[i];
            node.vel *= self.friction;
            node.pos += node.vel;
            spring *= self.tension;
        }
    }

    /// Stroke the chain as one midpoint-smoothed quadratic path.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let n = self.nodes.len();
        surface.begin_path();
        surface.move_to(self.nodes[0].pos);

        for a in 1..n.saturating_sub(2) {
            let control = self.nodes[a].pos;
            let mid = (control + self.nodes[a + 1].pos) * 0.5;
            surface.quadratic_curve_to(control, mid);
        }

        // Close on the raw tail so the curve ends exactly at the last node.
        surface.quadratic_curve_to(self.nodes[n - 2].pos, self.nodes[n - 1].pos);
        surface.stroke();
        surface.close_path();
    }
}
