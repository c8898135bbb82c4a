//! Analytic collaborators for unit tests: a horizontal floor plus axis-aligned boxes,
//! and a body that applies displacements verbatim (optionally resting on a floor).

use crate::collision::{CollisionQuery, KinematicBody, LayerMask, RayHit, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct TestBox {
    pub min: Vec3,
    pub max: Vec3,
    pub layers: LayerMask,
}

#[derive(Clone, Debug, Default)]
pub struct TestWorld {
    pub floor: Option<(f32, LayerMask)>,
    pub boxes: Vec<TestBox>,
}

impl TestWorld {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_floor(height: f32) -> Self {
        Self::with_floor_on(height, LayerMask::ALL)
    }

    pub fn with_floor_on(height: f32, layers: LayerMask) -> Self {
        Self {
            floor: Some((height, layers)),
            boxes: Vec::new(),
        }
    }

    pub fn with_box(mut self, min: Vec3, max: Vec3) -> Self {
        self.boxes.push(TestBox {
            min,
            max,
            layers: LayerMask::ALL,
        });
        self
    }

    fn ray_floor(&self, origin: Vec3, dir: Vec3, max: f32, layers: LayerMask) -> Option<RayHit> {
        let (height, floor_layers) = self.floor?;
        if !floor_layers.intersects(layers) || dir.y.abs() <= 1.0e-9 || origin.y < height {
            return None;
        }
        let t = (height - origin.y) / dir.y;
        (t >= 0.0 && t <= max).then(|| RayHit {
            point: origin + dir * t,
            normal: Vec3::new(0.0, 1.0, 0.0),
            distance: t,
        })
    }

    /// Slab test; only hits from outside the box are reported.
    fn ray_box(b: &TestBox, origin: Vec3, dir: Vec3, max: f32) -> Option<RayHit> {
        let mut t_enter = 0.0f32;
        let mut t_exit = max;
        let mut normal = Vec3::zeros();
        for axis in 0..3 {
            if dir[axis].abs() <= 1.0e-9 {
                if origin[axis] < b.min[axis] || origin[axis] > b.max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / dir[axis];
            let mut t0 = (b.min[axis] - origin[axis]) * inv;
            let mut t1 = (b.max[axis] - origin[axis]) * inv;
            let mut sign = -1.0;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
                sign = 1.0;
            }
            if t0 > t_enter {
                t_enter = t0;
                normal = Vec3::zeros();
                normal[axis] = sign;
            }
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }
        (normal != Vec3::zeros()).then(|| RayHit {
            point: origin + dir * t_enter,
            normal,
            distance: t_enter,
        })
    }
}

impl CollisionQuery for TestWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<RayHit> {
        let len = direction.norm();
        if len <= 1.0e-9 {
            return None;
        }
        let dir = direction / len;
        let boxes = self
            .boxes
            .iter()
            .filter(|b| b.layers.intersects(layers))
            .filter_map(|b| Self::ray_box(b, origin, dir, max_distance));
        self.ray_floor(origin, dir, max_distance, layers)
            .into_iter()
            .chain(boxes)
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

/// Applies every displacement as-is, except that the pivot never drops below
/// `rest_height` (a floor the body stands on).
#[derive(Clone, Debug)]
pub struct TestBody {
    pub position: Vec3,
    pub scale: Vec3,
    pub rest_height: Option<f32>,
    pub moves: Vec<Vec3>,
}

impl TestBody {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            scale: Vec3::new(1.0, 1.0, 1.0),
            rest_height: None,
            moves: Vec::new(),
        }
    }

    pub fn standing_on(floor: f32, half_height: f32) -> Self {
        Self {
            rest_height: Some(floor + half_height),
            ..Self::at(Vec3::new(0.0, floor + half_height, 0.0))
        }
    }
}

impl KinematicBody for TestBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn move_by(&mut self, displacement: Vec3) {
        self.moves.push(displacement);
        self.position += displacement;
        if let Some(rest) = self.rest_height {
            self.position.y = self.position.y.max(rest);
        }
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}
