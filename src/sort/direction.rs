/// The direction in which a single field is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn toggled(self) -> Direction {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn is_descending(self) -> bool {
        self == Direction::Descending
    }

    /// Applies this direction to an ordering computed in ascending terms.
    pub(crate) fn orient(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn ascending_is_the_default() {
        assert_eq!(Direction::Ascending, Direction::default());
    }

    #[test]
    fn toggle_flips_the_direction() {
        assert_eq!(Direction::Descending, Direction::Ascending.toggled());
        assert_eq!(Direction::Ascending, Direction::Descending.toggled());
    }

    #[test]
    fn descending_reverses_the_ordering() {
        assert_eq!(Ordering::Greater, Direction::Descending.orient(Ordering::Less));
        assert_eq!(Ordering::Less, Direction::Ascending.orient(Ordering::Less));
        assert_eq!(Ordering::Equal, Direction::Descending.orient(Ordering::Equal));
    }
}
