use super::crop::{CropRect, Size};

/// Square crop selection in displayed coordinates.
///
/// Every operation keeps the square fully inside the displayed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropSelection {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl CropSelection {
    /// Centered square covering `ratio` of the shorter displayed side.
    pub fn initial(bounds: Size, ratio: f64) -> Self {
        let size = bounds.width.min(bounds.height).max(0.0) * ratio.clamp(0.0, 1.0);
        Self {
            x: (bounds.width - size) / 2.0,
            y: (bounds.height - size) / 2.0,
            size,
        }
        .clamped(bounds)
    }

    pub fn moved_by(self, dx: f64, dy: f64, bounds: Size) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
        .clamped(bounds)
    }

    /// Resizes around the current center. `min_size` is honored unless the
    /// image itself is smaller.
    pub fn resized_to(self, size: f64, bounds: Size, min_size: f64) -> Self {
        let largest = max_side(bounds);
        let size = size.max(min_size.min(largest)).min(largest);
        let (cx, cy) = self.center();
        Self {
            x: cx - size / 2.0,
            y: cy - size / 2.0,
            size,
        }
        .clamped(bounds)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    pub fn rect(&self) -> CropRect {
        CropRect {
            x: self.x,
            y: self.y,
            width: self.size,
            height: self.size,
        }
    }

    fn clamped(self, bounds: Size) -> Self {
        let size = self.size.clamp(0.0, max_side(bounds));
        Self {
            x: self.x.clamp(0.0, (bounds.width - size).max(0.0)),
            y: self.y.clamp(0.0, (bounds.height - size).max(0.0)),
            size,
        }
    }
}

fn max_side(bounds: Size) -> f64 {
    bounds.width.min(bounds.height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size {
        width: 400.0,
        height: 300.0,
    };

    #[test]
    fn initial_selection_is_centered() {
        let sel = CropSelection::initial(BOUNDS, 0.9);
        assert_eq!(sel.size, 270.0);
        assert_eq!(sel.center(), (200.0, 150.0));
    }

    #[test]
    fn move_stops_at_the_edges() {
        let sel = CropSelection::initial(BOUNDS, 0.5);
        let moved = sel.moved_by(-1000.0, 1000.0, BOUNDS);
        assert_eq!(moved.x, 0.0);
        assert_eq!(moved.y, 300.0 - moved.size);
        assert_eq!(moved.size, sel.size);
    }

    #[test]
    fn resize_is_bounded_both_ways() {
        let sel = CropSelection::initial(BOUNDS, 0.5);
        assert_eq!(sel.resized_to(5000.0, BOUNDS, 16.0).size, 300.0);
        assert_eq!(sel.resized_to(2.0, BOUNDS, 16.0).size, 16.0);

        let tiny = Size::new(10.0, 8.0);
        assert_eq!(CropSelection::initial(tiny, 1.0).resized_to(2.0, tiny, 16.0).size, 8.0);
    }

    #[test]
    fn resize_near_an_edge_stays_inside() {
        let sel = CropSelection { x: 250.0, y: 150.0, size: 100.0 };
        let grown = sel.resized_to(280.0, BOUNDS, 16.0);
        assert!(grown.x >= 0.0 && grown.x + grown.size <= BOUNDS.width);
        assert!(grown.y >= 0.0 && grown.y + grown.size <= BOUNDS.height);
    }
}
