/// Coarse z-order of a body: whether it is drawn behind or in front of its primary.
///
/// Buffers are drawn back-to-front: `Behind` first, then `Anchor`, then `Front`.
/// Orbiting bodies only ever take `Behind` or `Front`; bodies with no orbit
/// target sit on the `Anchor` tier so the far side of every orbit passes
/// behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum DepthOrder {
    #[default]
    Behind = 0,
    Anchor = 1,
    Front = 2,
}

impl DepthOrder {
    /// Total number of depth tiers.
    pub const COUNT: usize = 3;

    /// Depth of an orbiting body at the given orbital angle.
    /// The lower half of the sweep (angle past π) is the near side.
    pub fn from_angle(angle: f32) -> Self {
        if angle > std::f32::consts::PI {
            Self::Front
        } else {
            Self::Behind
        }
    }

    /// Convert to u8 for the frame protocol.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn ordering_is_back_to_front() {
        assert!(DepthOrder::Behind < DepthOrder::Anchor);
        assert!(DepthOrder::Anchor < DepthOrder::Front);
    }

    #[test]
    fn angle_partition() {
        assert_eq!(DepthOrder::from_angle(0.0), DepthOrder::Behind);
        assert_eq!(DepthOrder::from_angle(PI / 2.0), DepthOrder::Behind);
        assert_eq!(DepthOrder::from_angle(PI), DepthOrder::Behind);
        assert_eq!(DepthOrder::from_angle(PI + 0.01), DepthOrder::Front);
        assert_eq!(DepthOrder::from_angle(1.5 * PI), DepthOrder::Front);
    }

    #[test]
    fn u8_values() {
        assert_eq!(DepthOrder::Behind.as_u8(), 0);
        assert_eq!(DepthOrder::Anchor.as_u8(), 1);
        assert_eq!(DepthOrder::Front.as_u8(), 2);
    }
}
