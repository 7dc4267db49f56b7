use crate::geometry::Point;
use crate::geometry::geo_traits::{CollidesWith, Contains};
use anyhow::Result;
use anyhow::{Context, ensure};

/// Axis-aligned rectangle on the integer room canvas.
/// `x_min`/`y_min` is the top-left corner, `x_max`/`y_max` the (exclusive) bottom-right corner.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
pub struct Rect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Rect {
    pub fn try_new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Creates a rectangle from its top-left corner, width and height.
    pub fn try_from_xywh(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "invalid rectangle dimensions, width: {width}, height: {height}"
        );
        let x_max = x
            .checked_add(width)
            .with_context(|| format!("rectangle exceeds the coordinate range, x: {x}, width: {width}"))?;
        let y_max = y
            .checked_add(height)
            .with_context(|| format!("rectangle exceeds the coordinate range, y: {y}, height: {height}"))?;
        Rect::try_new(x, y, x_max, y_max)
    }

    /// Same as [`Rect::try_from_xywh`], for dimensions which are known to be strictly positive.
    pub(crate) fn from_origin(origin: Point, width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        let Point(x, y) = origin;
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    pub fn origin(&self) -> Point {
        Point(self.x_min, self.y_min)
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Center of the rectangle, rounded towards the top-left.
    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max).div_euclid(2),
            (self.y_min + self.y_max).div_euclid(2),
        )
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = i32::max(a.x_min, b.x_min);
        let y_min = i32::max(a.y_min, b.y_min);
        let x_max = i32::min(a.x_max, b.x_max);
        let y_max = i32::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: i32::min(a.x_min, b.x_min),
            y_min: i32::min(a.y_min, b.y_min),
            x_max: i32::max(a.x_max, b.x_max),
            y_max: i32::max(a.y_max, b.y_max),
        }
    }
}

/// Two rectangles collide when their interiors overlap.
/// Rectangles that merely share an edge or a corner are considered disjoint.
impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        i32::max(self.x_min, other.x_min) < i32::min(self.x_max, other.x_max)
            && i32::max(self.y_min, other.y_min) < i32::min(self.y_max, other.y_max)
    }
}

impl Contains<Point> for Rect {
    #[inline(always)]
    fn contains(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl Contains<Rect> for Rect {
    #[inline(always)]
    fn contains(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }
}
