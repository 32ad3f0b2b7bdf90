//! Conversion between linear sample indices and grid coordinates.
//!
//! Samples are stored row-major with the origin at the top-left (north-west)
//! corner: index `i` lies at `x = i % side`, `y = i / side`.

use std::fmt;

use crate::error::{Position, Result, SrtmError};
use crate::format::GridFormat;

/// An (x, y) coordinate in local grid space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column, 0 at the west edge
    pub x: i64,
    /// Row, 0 at the north edge
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl GridFormat {
    /// Convert a linear index into an (x, y) coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`SrtmError::OutOfBounds`] unless `0 <= index < element_count`.
    pub fn index_to_point(self, index: i64) -> Result<Point> {
        let in_bounds = usize::try_from(index)
            .map(|i| i < self.element_count())
            .unwrap_or(false);
        if !in_bounds {
            return Err(SrtmError::OutOfBounds {
                position: Position::Index(index),
                format: self,
            });
        }

        let side = self.side_length() as i64;
        Ok(Point::new(index % side, index / side))
    }

    /// Convert an (x, y) coordinate into a linear index.
    ///
    /// The result is always a valid argument to [`Self::index_to_point`].
    ///
    /// # Errors
    ///
    /// Returns [`SrtmError::OutOfBounds`] unless both `x` and `y` lie in `0..side`.
    pub fn point_to_index(self, point: Point) -> Result<i64> {
        let side = self.side_length() as i64;
        if !(0..side).contains(&point.x) || !(0..side).contains(&point.y) {
            return Err(SrtmError::OutOfBounds {
                position: Position::Point(point),
                format: self,
            });
        }

        Ok(point.y * side + point.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_point_srtm1() {
        let f = GridFormat::Format1;
        assert_eq!(f.index_to_point(0).unwrap(), Point::new(0, 0));
        assert_eq!(f.index_to_point(1).unwrap(), Point::new(1, 0));
        assert_eq!(f.index_to_point(3600).unwrap(), Point::new(3600, 0));
        // 0-indexed: 3601 is the first sample of the second row
        assert_eq!(f.index_to_point(3601).unwrap(), Point::new(0, 1));
        assert_eq!(f.index_to_point(7201).unwrap(), Point::new(3600, 1));
        assert_eq!(f.index_to_point(12_967_200).unwrap(), Point::new(3600, 3600));
    }

    #[test]
    fn test_index_to_point_srtm3() {
        let f = GridFormat::Format3;
        assert_eq!(f.index_to_point(0).unwrap(), Point::new(0, 0));
        assert_eq!(f.index_to_point(1).unwrap(), Point::new(1, 0));
        assert_eq!(f.index_to_point(1200).unwrap(), Point::new(1200, 0));
        assert_eq!(f.index_to_point(1201).unwrap(), Point::new(0, 1));
        assert_eq!(f.index_to_point(2401).unwrap(), Point::new(1200, 1));
        assert_eq!(f.index_to_point(1_442_400).unwrap(), Point::new(1200, 1200));
    }

    #[test]
    fn test_index_out_of_bounds() {
        for format in [GridFormat::Format1, GridFormat::Format3] {
            let count = format.element_count() as i64;
            for index in [-1, i64::MIN, count, count + 1, i64::MAX] {
                match format.index_to_point(index) {
                    Err(SrtmError::OutOfBounds {
                        position: Position::Index(i),
                        format: f,
                    }) => {
                        assert_eq!(i, index);
                        assert_eq!(f, format);
                    }
                    other => panic!("Expected OutOfBounds for {}, got {:?}", index, other),
                }
            }
        }
    }

    #[test]
    fn test_point_out_of_bounds() {
        let f = GridFormat::Format3;
        let points = [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(1201, 0),
            Point::new(0, 1201),
            Point::new(1201, 1201),
            Point::new(i64::MAX, i64::MAX),
        ];
        for point in points {
            match f.point_to_index(point) {
                Err(SrtmError::OutOfBounds {
                    position: Position::Point(p),
                    ..
                }) => assert_eq!(p, point),
                other => panic!("Expected OutOfBounds for {}, got {:?}", point, other),
            }
        }
    }

    #[test]
    fn test_round_trip_every_index_srtm3() {
        let f = GridFormat::Format3;
        for i in 0..f.element_count() as i64 {
            let point = f.index_to_point(i).unwrap();
            assert_eq!(f.point_to_index(point).unwrap(), i);
        }
    }

    #[test]
    fn test_round_trip_points_srtm1() {
        let f = GridFormat::Format1;
        let side = f.side_length() as i64;
        for y in (0..side).step_by(37).chain([side - 1]) {
            for x in (0..side).step_by(41).chain([side - 1]) {
                let point = Point::new(x, y);
                let index = f.point_to_index(point).unwrap();
                assert_eq!(f.index_to_point(index).unwrap(), point);
            }
        }
    }
}
