//! Rendering contracts and the scene renderer.
//!
//! The simulation never touches geometry. The renderer walks a
//! `FrameSnapshot`, supplies each entity's world transform as the `model`
//! uniform, and lets the bound model issue its own draw call.

use glam::{DVec3, Mat4, Vec3};

use bitwa_core::enums::EntityKind;
use bitwa_core::state::{EntityView, FrameSnapshot};

/// A value that can be bound to a named shader uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    Mat4(Mat4),
    Vec3(Vec3),
    Scalar(f32),
}

/// A linked shader program.
pub trait ShaderProgram {
    /// Make this program current.
    fn activate(&mut self);
    fn set_uniform(&mut self, name: &str, value: Uniform);
}

/// Geometry that knows how to bind and draw itself.
pub trait Model {
    fn draw(&self, shader: &mut dyn ShaderProgram);
}

/// View and projection source.
pub trait Camera {
    fn view_matrix(&self) -> Mat4;
    fn projection(&self, fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Mat4;
}

/// First-person camera driven by accumulated mouse and keyboard input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Degrees. -90 looks down -z.
    pub yaw: f32,
    /// Degrees, clamped to (-89, 89).
    pub pitch: f32,
    pub sensitivity: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            yaw: -90.0,
            pitch: 0.0,
            sensitivity: 0.1,
        }
    }
}

impl FlyCamera {
    /// Unit vector the camera looks along.
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    /// Accumulate a mouse delta in screen pixels.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-89.0, 89.0);
    }

    /// Move along the view direction (positive = forward).
    pub fn advance(&mut self, distance: f32) {
        self.position += self.front() * distance;
    }
}

impl Camera for FlyCamera {
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), Vec3::Y)
    }

    fn projection(&self, fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(fov_y_deg.to_radians(), aspect, near, far)
    }
}

/// World transform for an entity: translate, then scale uniformly.
pub fn model_transform(position: DVec3, scale: f64) -> Mat4 {
    Mat4::from_translation(position.as_vec3()) * Mat4::from_scale(Vec3::splat(scale as f32))
}

/// Tint passed to the plasma shader for each kind it draws.
pub fn tint(kind: EntityKind) -> Vec3 {
    match kind {
        EntityKind::PlayerProjectile => Vec3::new(0.3, 0.6, 1.0),
        EntityKind::EnemyProjectile => Vec3::new(1.0, 0.25, 0.2),
        EntityKind::Explosion => Vec3::new(1.0, 0.7, 0.2),
        EntityKind::Ship | EntityKind::Dust => Vec3::ONE,
    }
}

/// One shader/model pair and the entity kinds it draws.
pub struct RenderPass {
    pub kinds: Vec<EntityKind>,
    pub shader: Box<dyn ShaderProgram>,
    pub model: Box<dyn Model>,
}

/// Perspective parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fov_y_deg: 45.0,
            aspect: 1024.0 / 768.0,
            near: 0.1,
            far: 200.0,
        }
    }
}

/// Draws every live entity of a snapshot through its kind's pass.
pub struct SceneRenderer {
    passes: Vec<RenderPass>,
    pub lens: Lens,
}

impl SceneRenderer {
    pub fn new(passes: Vec<RenderPass>, lens: Lens) -> Self {
        Self { passes, lens }
    }

    /// Draw the snapshot. Returns the number of draw calls issued.
    pub fn draw(&mut self, snapshot: &FrameSnapshot, camera: &dyn Camera) -> usize {
        let view = camera.view_matrix();
        let projection = camera.projection(
            self.lens.fov_y_deg,
            self.lens.aspect,
            self.lens.near,
            self.lens.far,
        );

        let mut draws = 0;
        for pass in &mut self.passes {
            let views: Vec<&EntityView> = pass
                .kinds
                .iter()
                .flat_map(|&kind| snapshot.views(kind))
                .collect();
            if views.is_empty() {
                continue;
            }

            pass.shader.activate();
            pass.shader.set_uniform("view", Uniform::Mat4(view));
            pass.shader.set_uniform("projection", Uniform::Mat4(projection));
            for entity in views {
                let model = model_transform(entity.position, entity.scale);
                pass.shader.set_uniform("model", Uniform::Mat4(model));
                pass.shader.set_uniform("color", Uniform::Vec3(tint(entity.kind)));
                pass.shader.set_uniform("age", Uniform::Scalar(entity.age as f32));
                pass.model.draw(pass.shader.as_mut());
                draws += 1;
            }
        }
        draws
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use approx::assert_relative_eq;
    use glam::Vec4;

    use bitwa_core::state::EntityView;

    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    struct LoggingShader {
        name: &'static str,
        log: Log,
        models: Rc<RefCell<Vec<Mat4>>>,
    }

    impl ShaderProgram for LoggingShader {
        fn activate(&mut self) {
            self.log.borrow_mut().push(format!("{}:activate", self.name));
        }

        fn set_uniform(&mut self, name: &str, value: Uniform) {
            if let ("model", Uniform::Mat4(m)) = (name, value) {
                self.models.borrow_mut().push(m);
            }
        }
    }

    struct LoggingModel {
        name: &'static str,
        log: Log,
    }

    impl Model for LoggingModel {
        fn draw(&self, _shader: &mut dyn ShaderProgram) {
            self.log.borrow_mut().push(format!("{}:draw", self.name));
        }
    }

    fn view(kind: EntityKind, position: DVec3, scale: f64) -> EntityView {
        EntityView {
            kind,
            position,
            scale,
            age: 0.1,
        }
    }

    #[test]
    fn test_draws_each_entity_through_its_pass() {
        let log: Log = Rc::default();
        let models = Rc::new(RefCell::new(Vec::new()));
        let pass = |name, kinds| RenderPass {
            kinds,
            shader: Box::new(LoggingShader {
                name,
                log: log.clone(),
                models: models.clone(),
            }),
            model: Box::new(LoggingModel {
                name,
                log: log.clone(),
            }),
        };
        let mut renderer = SceneRenderer::new(
            vec![
                pass("ship", vec![EntityKind::Ship]),
                pass("plasma", vec![EntityKind::PlayerProjectile, EntityKind::EnemyProjectile]),
                pass("explosion", vec![EntityKind::Explosion]),
            ],
            Lens::default(),
        );

        let snapshot = FrameSnapshot {
            ships: vec![view(EntityKind::Ship, DVec3::new(1.0, 2.0, -50.0), 1.0)],
            enemy_projectiles: vec![view(EntityKind::EnemyProjectile, DVec3::ZERO, 1.0)],
            player_projectiles: vec![view(EntityKind::PlayerProjectile, DVec3::NEG_Z, 1.0)],
            ..Default::default()
        };

        let draws = renderer.draw(&snapshot, &FlyCamera::default());
        assert_eq!(draws, 3);
        assert_eq!(
            *log.borrow(),
            vec![
                "ship:activate",
                "ship:draw",
                "plasma:activate",
                "plasma:draw",
                "plasma:draw",
            ],
            "passes with nothing to draw are skipped"
        );

        let ship_model = models.borrow()[0];
        let origin = ship_model * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(origin, Vec4::new(1.0, 2.0, -50.0, 1.0));
    }

    #[test]
    fn test_model_transform_scales_about_entity() {
        let m = model_transform(DVec3::new(0.0, 0.0, -30.0), 2.0);
        let p = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.z, -30.0);
    }

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let camera = FlyCamera::default();
        let front = camera.front();
        assert_relative_eq!(front.z, -1.0, epsilon = 1.0e-6);

        // A point straight ahead ends up in front of the camera in view space.
        let ahead = camera.view_matrix() * Vec4::new(0.0, 0.0, -50.0, 1.0);
        assert!(ahead.z < 0.0);
        assert_relative_eq!(ahead.x, 0.0, epsilon = 1.0e-4);
    }

    #[test]
    fn test_camera_pitch_is_clamped() {
        let mut camera = FlyCamera::default();
        camera.look(0.0, 10_000.0);
        assert_eq!(camera.pitch, 89.0);
        camera.advance(1.0);
        assert!(camera.position.y > 0.0);
    }
}
