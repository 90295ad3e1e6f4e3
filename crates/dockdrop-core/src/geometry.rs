/// Axis-aligned rectangle in client coordinates.
///
/// Stored as origin plus size, like a bounding client rect. The edge
/// accessors derive `right`/`bottom` from the size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 400.0, 300.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 410.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 320.0);
    }

    #[test]
    fn test_negative_extent_flips_edges() {
        let rect = Rect::new(100.0, 100.0, -50.0, 0.0);
        assert_eq!(rect.right(), 50.0);
        assert_eq!(rect.bottom(), rect.top());
    }
}
