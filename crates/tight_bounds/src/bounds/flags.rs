//! Bounds preference flags

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Which of a record's volumes intersection tests should rely on.
    ///
    /// Exactly one of `PREFER_BOX`, `PREFER_BOX_LINE_SEGMENT` and
    /// `PREFER_SPHERE` is set by fitting; the remaining bits are refinements.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct BoundsFlags: u32 {
        /// Oriented box is the tightest basic volume
        const PREFER_BOX = 1 << 0;
        /// Oriented box, thin enough to be tested as a line segment
        const PREFER_BOX_LINE_SEGMENT = 1 << 1;
        /// Sphere is the tightest basic volume
        const PREFER_SPHERE = 1 << 2;
        /// AABB is nearly as tight as the oriented box
        const PREFER_AABB = 1 << 3;
        /// The special shape is tighter than the basic volume
        const PREFER_SPECIAL = 1 << 4;
        /// A separate collision shape was assigned
        const SPECIAL_IS_COLLISION_SHAPE = 1 << 5;
    }
}

impl BoundsFlags {
    /// Whether the oriented box (plain or line segment) is preferred
    pub fn prefers_box(self) -> bool {
        self.intersects(Self::PREFER_BOX | Self::PREFER_BOX_LINE_SEGMENT)
    }

    /// Short name of the basic volume, for log output
    pub fn basic_volume_name(self) -> &'static str {
        if self.contains(Self::PREFER_BOX_LINE_SEGMENT) {
            "box (line segment)"
        } else if self.contains(Self::PREFER_BOX) {
            "box"
        } else {
            "sphere"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_preference_covers_line_segment() {
        assert!(BoundsFlags::PREFER_BOX.prefers_box());
        assert!(BoundsFlags::PREFER_BOX_LINE_SEGMENT.prefers_box());
        assert!(!(BoundsFlags::PREFER_SPHERE | BoundsFlags::PREFER_AABB).prefers_box());
        assert_eq!(BoundsFlags::PREFER_BOX_LINE_SEGMENT.basic_volume_name(), "box (line segment)");
    }

    #[test]
    fn flags_round_trip_through_ron() {
        let flags = BoundsFlags::PREFER_SPHERE | BoundsFlags::PREFER_SPECIAL;
        let text = ron::to_string(&flags).unwrap();
        let back: BoundsFlags = ron::from_str(&text).unwrap();
        assert_eq!(back, flags);
    }
}
