//! Headless stand-ins for the GPU side of the render contracts.
//!
//! They bind nothing and draw nothing; they count and trace what a real
//! backend would have been asked to do.

use std::cell::Cell;

use log::trace;

use bitwa_core::enums::EntityKind;

use crate::render::{Lens, Model, RenderPass, SceneRenderer, ShaderProgram, Uniform};

/// Shader program that records how it was driven.
#[derive(Debug, Default)]
pub struct HeadlessShader {
    pub name: &'static str,
    pub activations: u64,
    pub uniforms_set: u64,
}

impl HeadlessShader {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}

impl ShaderProgram for HeadlessShader {
    fn activate(&mut self) {
        self.activations += 1;
    }

    fn set_uniform(&mut self, name: &str, value: Uniform) {
        self.uniforms_set += 1;
        if name == "model" {
            if let Uniform::Mat4(m) = value {
                trace!("{}: model at {:?}", self.name, m.w_axis.truncate());
            }
        }
    }
}

/// Model that counts its draw calls.
#[derive(Debug, Default)]
pub struct HeadlessModel {
    pub name: &'static str,
    pub draws: Cell<u64>,
}

impl HeadlessModel {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            draws: Cell::new(0),
        }
    }
}

impl Model for HeadlessModel {
    fn draw(&self, _shader: &mut dyn ShaderProgram) {
        self.draws.set(self.draws.get() + 1);
    }
}

/// The game's three passes: ship models, plasma balls (both sides, plus
/// dust), and explosion bursts.
pub fn headless_renderer() -> SceneRenderer {
    let pass = |name: &'static str, kinds: Vec<EntityKind>| RenderPass {
        kinds,
        shader: Box::new(HeadlessShader::new(name)),
        model: Box::new(HeadlessModel::new(name)),
    };
    SceneRenderer::new(
        vec![
            pass("model", vec![EntityKind::Ship]),
            pass(
                "plasma",
                vec![
                    EntityKind::PlayerProjectile,
                    EntityKind::EnemyProjectile,
                    EntityKind::Dust,
                ],
            ),
            pass("explosion", vec![EntityKind::Explosion]),
        ],
        Lens::default(),
    )
}
