use serde::Serialize;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Axis-aligned geographic rectangle covering a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// Degenerate bounds containing exactly one point.
    pub fn of_point(point: LatLng) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    /// Minimal bounds covering all `points`, or `None` when empty.
    pub fn of_points(points: &[LatLng]) -> Option<Self> {
        let mut iter = points.iter();
        let mut bounds = Self::of_point(*iter.next()?);
        for point in iter {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    /// Grow the bounds to include `point`.
    pub fn extend(&mut self, point: LatLng) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }

    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.south + self.north) / 2.0,
            lng: (self.west + self.east) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_empty_is_none() {
        assert_eq!(LatLngBounds::of_points(&[]), None);
    }

    #[test]
    fn test_bounds_of_single_point_is_degenerate() {
        let p = LatLng { lat: 3.45, lng: -76.53 };
        let b = LatLngBounds::of_points(&[p]).unwrap();
        assert_eq!(b.south, 3.45);
        assert_eq!(b.north, 3.45);
        assert_eq!(b.west, -76.53);
        assert_eq!(b.east, -76.53);
    }

    #[test]
    fn test_bounds_cover_all_points() {
        let points = [
            LatLng { lat: 3.45, lng: -76.53 },
            LatLng { lat: 4.08, lng: -76.19 },
            LatLng { lat: 3.54, lng: -76.30 },
        ];
        let b = LatLngBounds::of_points(&points).unwrap();
        assert!((b.south - 3.45).abs() < 1e-9);
        assert!((b.north - 4.08).abs() < 1e-9);
        assert!((b.west - (-76.53)).abs() < 1e-9);
        assert!((b.east - (-76.19)).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_center_is_midpoint() {
        let points = [
            LatLng { lat: 2.0, lng: -78.0 },
            LatLng { lat: 4.0, lng: -76.0 },
        ];
        let c = LatLngBounds::of_points(&points).unwrap().center();
        assert!((c.lat - 3.0).abs() < 1e-9);
        assert!((c.lng - (-77.0)).abs() < 1e-9);
    }
}
