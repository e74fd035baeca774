//! Static point cloud sampled uniformly inside an axis-aligned cube.
//!
//! The field is generated once at startup and uploaded to the GPU as a single
//! instance buffer; nothing mutates it afterwards, so only read accessors are
//! exposed.

use crate::error::FieldError;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Box<[f32]>,
    extent: f32,
}

impl ParticleField {
    /// Sample `count` points with every component drawn from
    /// `[-extent / 2, extent / 2)`.
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        extent: f32,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        check_params(count, extent)?;
        let positions = (0..count * 3)
            .map(|_| (rng.gen::<f32>() - 0.5) * extent)
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Self { positions, extent })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub fn half_extent(&self) -> f32 {
        self.extent * 0.5
    }

    /// Flat `[x0, y0, z0, x1, ...]` coordinates.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
    }

    /// Raw bytes for a tightly packed `Float32x3` vertex buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }
}

pub(crate) fn check_params(count: usize, extent: f32) -> Result<(), FieldError> {
    if count == 0 {
        return Err(FieldError::Empty);
    }
    if !extent.is_finite() || extent <= 0.0 {
        return Err(FieldError::InvalidExtent(extent));
    }
    Ok(())
}
