use serde::{Deserialize, Serialize};

/// Logical identity of a voxel, independent from position or rendering.
///
/// Closed enumeration: `Air` is the absence of content, `Solid` stands in
/// for all future concrete materials.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum VoxelType {
    #[default]
    Air,
    Solid,
}

/// A single voxel in the world: grid coordinates plus a type.
///
/// Immutable value object; use [`Voxel::with_type`] to derive a variant
/// with a different type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voxel {
    x: i32,
    y: i32,
    z: i32,
    voxel_type: VoxelType,
}

impl Voxel {
    pub fn new(x: i32, y: i32, z: i32, voxel_type: VoxelType) -> Self {
        Self { x, y, z, voxel_type }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        self.z
    }

    pub fn voxel_type(&self) -> VoxelType {
        self.voxel_type
    }

    /// Same coordinates, different type.
    pub fn with_type(&self, voxel_type: VoxelType) -> Self {
        Self { voxel_type, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_voxel_type_is_air() {
        assert_eq!(VoxelType::default(), VoxelType::Air);
    }

    #[test]
    fn with_type_preserves_coordinates() {
        let voxel = Voxel::new(1, -2, 3, VoxelType::Air);
        let solid = voxel.with_type(VoxelType::Solid);
        assert_eq!(solid.x(), 1);
        assert_eq!(solid.y(), -2);
        assert_eq!(solid.z(), 3);
        assert_eq!(solid.voxel_type(), VoxelType::Solid);
        assert_eq!(voxel.voxel_type(), VoxelType::Air);
    }
}
