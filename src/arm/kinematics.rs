/// A point in the plane of the arm.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The point `length` away from `self` in direction `angle`, measured
    /// clockwise from the negative y axis.
    pub fn translate(self, angle: f64, length: f64) -> Point {
        Point {
            x: self.x + length * angle.sin(),
            y: self.y - length * angle.cos(),
        }
    }
}

/// The two joint angles of the arm, both in [0, π).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Angles {
    /// Angle of the upper segment at the shoulder.
    pub alpha: f64,
    /// Angle between the two segments at the elbow.
    pub beta: f64,
}

/// Shoulder, elbow and end effector of an arm with two equally long segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmPose {
    pub start: Point,
    pub elbow: Point,
    pub end: Point,
}

impl ArmPose {
    pub fn from_angles(start: Point, angles: Angles, arm_length: f64) -> ArmPose {
        let elbow = start.translate(angles.alpha, arm_length);
        let end = elbow.translate(std::f64::consts::PI - angles.beta + angles.alpha, arm_length);
        ArmPose { start, elbow, end }
    }
}
