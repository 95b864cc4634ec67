use glam::Vec2;

use crate::api::error::ConfigError;
use crate::api::types::BodyId;
use crate::components::body::{OrbitTuning, OrbitingBody};

/// Ordered body storage using a flat Vec.
///
/// A body may only orbit a body added before it, so insertion order is a
/// valid dependency order: advancing front to back always reads an anchor
/// position that was already updated this tick.
#[derive(Debug)]
pub struct OrbitField {
    bodies: Vec<OrbitingBody>,
    tuning: OrbitTuning,
}

impl OrbitField {
    /// Create an empty field. Fails if the tuning is out of range.
    pub fn new(tuning: OrbitTuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self {
            bodies: Vec::with_capacity(16),
            tuning,
        })
    }

    /// Add a body to the field. Returns its id.
    ///
    /// Fails if a body with the same name exists, or if the orbit target
    /// is not already in the field. The body's id and tuning are overwritten.
    pub fn add_body(&mut self, mut body: OrbitingBody) -> Result<BodyId, ConfigError> {
        if self.find_by_name(&body.name).is_some() {
            return Err(ConfigError::DuplicateBody(body.name));
        }
        if let Some(target) = body.orbit_target {
            if target.index() >= self.bodies.len() {
                return Err(ConfigError::UnknownOrbitTarget {
                    body: body.name,
                    target: format!("#{}", target.0),
                });
            }
        }

        let id = BodyId(self.bodies.len() as u32);
        body.id = id;
        body.tuning = self.tuning;
        log::debug!("field: added `{}` as {:?}", body.name, id);
        self.bodies.push(body);
        Ok(id)
    }

    /// Advance every body by `dt` seconds, in insertion order.
    pub fn advance_all(&mut self, dt: f32) {
        for i in 0..self.bodies.len() {
            let anchor = self.bodies[i]
                .orbit_target
                .and_then(|target| self.bodies.get(target.index()))
                .map(OrbitingBody::center);
            self.bodies[i].advance(dt, anchor);
        }
    }

    // -- Lookup --

    pub fn get(&self, id: BodyId) -> Option<&OrbitingBody> {
        self.bodies.get(id.index())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut OrbitingBody> {
        self.bodies.get_mut(id.index())
    }

    pub fn find_by_name(&self, name: &str) -> Option<&OrbitingBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Id of the `index`-th body in insertion order.
    pub fn id_at(&self, index: usize) -> Option<BodyId> {
        self.bodies.get(index).map(|b| b.id)
    }

    /// The body after `current`, wrapping around. With no current body the
    /// first one is returned.
    pub fn next(&self, current: Option<BodyId>) -> Option<BodyId> {
        let len = self.bodies.len();
        if len == 0 {
            return None;
        }
        let index = match current {
            Some(id) if id.index() < len => (id.index() + 1) % len,
            _ => 0,
        };
        self.id_at(index)
    }

    /// The body before `current`, wrapping around. With no current body the
    /// last one is returned.
    pub fn previous(&self, current: Option<BodyId>) -> Option<BodyId> {
        let len = self.bodies.len();
        if len == 0 {
            return None;
        }
        let index = match current {
            Some(id) if id.index() < len => (id.index() + len - 1) % len,
            _ => len - 1,
        };
        self.id_at(index)
    }

    /// Topmost body under a world-space point. Front-tier bodies win over the
    /// anchor tier, which wins over bodies behind it; ties go to the body
    /// added last.
    pub fn hit_test(&self, point: Vec2) -> Option<BodyId> {
        self.bodies
            .iter()
            .filter(|b| b.hit(point))
            .max_by_key(|b| b.depth)
            .map(|b| b.id)
    }

    // -- Broadcasts (anchors are skipped) --

    pub fn set_global_axis_ratio_target(&mut self, ratio: f32) {
        for body in self.orbiters_mut() {
            body.set_target_axis_ratio(ratio);
        }
    }

    pub fn set_global_speed_multiplier(&mut self, multiplier: f32) {
        for body in self.orbiters_mut() {
            body.set_speed_multiplier(multiplier);
        }
    }

    pub fn toggle_direction_all(&mut self) {
        for body in self.orbiters_mut() {
            body.toggle_direction();
        }
    }

    fn orbiters_mut(&mut self) -> impl Iterator<Item = &mut OrbitingBody> {
        self.bodies.iter_mut().filter(|b| !b.is_anchor())
    }

    // -- Iteration --

    pub fn iter(&self) -> impl Iterator<Item = &OrbitingBody> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut OrbitingBody> {
        self.bodies.iter_mut()
    }

    pub fn tuning(&self) -> OrbitTuning {
        self.tuning
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for OrbitField {
    fn default() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
            tuning: OrbitTuning::default(),
        }
    }
}
