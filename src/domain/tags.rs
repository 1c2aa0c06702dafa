//! Discriminated collision results: sides, side sets and circle-vs-rectangle regions

use std::fmt;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of violated sides (containment / bounds checks)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SideSet(u8);

impl SideSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, side: Side) {
        self.0 |= side.bit();
    }

    pub fn contains(&self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Sides in left, top, right, bottom order
    pub fn iter(&self) -> impl Iterator<Item = Side> + '_ {
        Side::ALL.into_iter().filter(move |s| self.contains(*s))
    }

    /// `None` when no side was triggered
    pub fn non_empty(self) -> Option<Self> {
        (!self.is_empty()).then_some(self)
    }
}

impl FromIterator<Side> for SideSet {
    fn from_iter<I: IntoIterator<Item = Side>>(iter: I) -> Self {
        let mut set = SideSet::new();
        for side in iter {
            set.insert(side);
        }
        set
    }
}

impl Serialize for SideSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for side in self.iter() {
            seq.serialize_element(&side)?;
        }
        seq.end()
    }
}

/// Where a circle sits relative to a rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    TopLeft,
    TopMiddle,
    TopRight,
    LeftMiddle,
    RightMiddle,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::TopLeft => "topLeft",
            Region::TopMiddle => "topMiddle",
            Region::TopRight => "topRight",
            Region::LeftMiddle => "leftMiddle",
            Region::RightMiddle => "rightMiddle",
            Region::BottomLeft => "bottomLeft",
            Region::BottomMiddle => "bottomMiddle",
            Region::BottomRight => "bottomRight",
        }
    }

    /// Edge-middle regions reduce to rectangle-vs-rectangle
    pub fn is_middle(&self) -> bool {
        matches!(
            self,
            Region::TopMiddle | Region::BottomMiddle | Region::LeftMiddle | Region::RightMiddle
        )
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a dispatched pair test
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Outcome {
    /// Boolean hit (circle/circle, point/shape, rectangle hit-test)
    Hit,
    /// Rectangle resolver side
    Side(Side),
    /// Circle-vs-rectangle region
    Region(Region),
}

impl Outcome {
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Hit => "hit",
            Outcome::Side(side) => side.as_str(),
            Outcome::Region(region) => region.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_set_keeps_independent_sides() {
        let mut set = SideSet::new();
        set.insert(Side::Right);
        set.insert(Side::Left);
        set.insert(Side::Left);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Side::Left) && set.contains(Side::Right));
        assert!(!set.contains(Side::Top));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Side::Left, Side::Right]);
    }

    #[test]
    fn empty_set_is_absent() {
        assert_eq!(SideSet::new().non_empty(), None);
        let set: SideSet = [Side::Bottom].into_iter().collect();
        assert_eq!(set.non_empty(), Some(set));
    }

    #[test]
    fn serializes_as_tag_list() {
        let set: SideSet = [Side::Top, Side::Left].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["left","top"]"#);
        assert_eq!(
            serde_json::to_string(&Outcome::Region(Region::TopLeft)).unwrap(),
            r#"{"type":"region","value":"topLeft"}"#
        );
    }

    #[test]
    fn middle_regions() {
        assert!(Region::LeftMiddle.is_middle());
        assert!(!Region::BottomRight.is_middle());
    }
}
