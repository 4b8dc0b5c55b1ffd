//! Structure-of-arrays asteroid storage

use crate::field::FieldError;
use crate::foundation::math::{to_ground, Point2, Vec3};
use crate::physics::BoundingSphere;

/// One asteroid, read out of an [`ObstacleField`] slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleRecord {
    /// Center position in world space
    pub position: Vec3,
    /// Radius; zero or negative means the slot is unoccupied
    pub radius: f32,
    /// RGB color
    pub color: [u8; 3],
    /// Offset of this asteroid's vertices in the shared vertex buffer
    pub render_index: u32,
}

impl ObstacleRecord {
    /// Create a record
    pub fn new(position: Vec3, radius: f32, color: [u8; 3], render_index: u32) -> Self {
        Self { position, radius, color, render_index }
    }

    /// Whether this record describes an existing asteroid
    pub fn exists(&self) -> bool {
        self.radius > 0.0
    }

    /// Center projected onto the ground plane
    pub fn ground_center(&self) -> Point2 {
        to_ground(&self.position)
    }

    /// World-space bounding sphere
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.position, self.radius)
    }
}

/// Fixed-capacity structure-of-arrays holding `rows * columns` asteroid slots
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleField {
    rows: usize,
    columns: usize,
    x: Vec<f32>,
    y: Vec<f32>,
    z: Vec<f32>,
    radius: Vec<f32>,
    color: Vec<[u8; 3]>,
    render_index: Vec<u32>,
}

impl ObstacleField {
    /// Create a field with every slot unoccupied
    pub fn new(rows: usize, columns: usize) -> Self {
        let capacity = rows * columns;
        Self {
            rows,
            columns,
            x: vec![0.0; capacity],
            y: vec![0.0; capacity],
            z: vec![0.0; capacity],
            radius: vec![0.0; capacity],
            color: vec![[0; 3]; capacity],
            render_index: vec![0; capacity],
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.radius.len()
    }

    /// Write a record into a slot
    pub fn set(&mut self, slot: usize, record: ObstacleRecord) -> Result<(), FieldError> {
        self.check_slot(slot)?;
        self.x[slot] = record.position.x;
        self.y[slot] = record.position.y;
        self.z[slot] = record.position.z;
        self.radius[slot] = record.radius;
        self.color[slot] = record.color;
        self.render_index[slot] = record.render_index;
        Ok(())
    }

    /// Mark a slot unoccupied
    pub fn clear(&mut self, slot: usize) -> Result<(), FieldError> {
        self.check_slot(slot)?;
        self.radius[slot] = 0.0;
        Ok(())
    }

    /// Read the record stored in a slot, occupied or not
    pub fn record(&self, slot: usize) -> Option<ObstacleRecord> {
        if slot >= self.capacity() {
            return None;
        }
        Some(ObstacleRecord {
            position: Vec3::new(self.x[slot], self.y[slot], self.z[slot]),
            radius: self.radius[slot],
            color: self.color[slot],
            render_index: self.render_index[slot],
        })
    }

    /// Whether a slot holds an asteroid
    pub fn is_occupied(&self, slot: usize) -> bool {
        self.radius.get(slot).is_some_and(|&r| r > 0.0)
    }

    /// Number of occupied slots
    pub fn occupied_count(&self) -> usize {
        self.radius.iter().filter(|&&r| r > 0.0).count()
    }

    /// Iterate occupied slots as `(slot, record)`
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, ObstacleRecord)> + '_ {
        (0..self.capacity())
            .filter(|&slot| self.radius[slot] > 0.0)
            .filter_map(|slot| self.record(slot).map(|record| (slot, record)))
    }

    /// Ground-plane center of a slot, read straight from the x and z arrays
    #[inline]
    pub(crate) fn ground_center(&self, slot: usize) -> Point2 {
        Point2::new(self.x[slot], self.z[slot])
    }

    /// Radius of a slot
    #[inline]
    pub(crate) fn radius(&self, slot: usize) -> f32 {
        self.radius[slot]
    }

    /// Render index of a slot
    #[inline]
    pub(crate) fn render_index(&self, slot: usize) -> u32 {
        self.render_index[slot]
    }

    fn check_slot(&self, slot: usize) -> Result<(), FieldError> {
        if slot < self.capacity() {
            Ok(())
        } else {
            Err(FieldError::SlotOutOfRange { slot, capacity: self.capacity() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asteroid(x: f32, z: f32, render_index: u32) -> ObstacleRecord {
        ObstacleRecord::new(Vec3::new(x, 0.0, z), 3.0, [10, 20, 30], render_index)
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = ObstacleField::new(4, 5);
        assert_eq!(field.capacity(), 20);
        assert_eq!(field.rows(), 4);
        assert_eq!(field.columns(), 5);
        assert_eq!(field.occupied_count(), 0);
        assert!(!field.is_occupied(0));
        assert!(!field.record(0).unwrap().exists());
    }

    #[test]
    fn test_set_and_read_back() {
        let mut field = ObstacleField::new(2, 2);
        field.set(3, asteroid(7.0, -9.0, 302)).unwrap();
        assert!(field.is_occupied(3));
        assert_eq!(field.record(3), Some(asteroid(7.0, -9.0, 302)));
        assert_eq!(field.ground_center(3), Point2::new(7.0, -9.0));
        assert_eq!(field.render_index(3), 302);
        assert_eq!(field.occupied_count(), 1);
    }

    #[test]
    fn test_out_of_range_slot() {
        let mut field = ObstacleField::new(2, 2);
        assert_eq!(
            field.set(4, asteroid(0.0, 0.0, 0)),
            Err(FieldError::SlotOutOfRange { slot: 4, capacity: 4 })
        );
        assert!(field.clear(9).is_err());
        assert_eq!(field.record(4), None);
        assert!(!field.is_occupied(4));
    }

    #[test]
    fn test_clear_and_iter_occupied() {
        let mut field = ObstacleField::new(1, 3);
        field.set(0, asteroid(0.0, 0.0, 1)).unwrap();
        field.set(2, asteroid(60.0, 0.0, 3)).unwrap();
        field.clear(0).unwrap();

        let occupied: Vec<usize> = field.iter_occupied().map(|(slot, _)| slot).collect();
        assert_eq!(occupied, vec![2]);
    }
}
