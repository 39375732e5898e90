use crate::schema::{Accessor, Field};
use crate::sort::direction::Direction;

/// One ordering instruction in a query's chain: a field accessor and a direction.
pub struct OrderingStep<E> {
    field_name: String,
    accessor: Accessor<E>,
    direction: Direction,
}

impl<E> OrderingStep<E> {
    pub(crate) fn new(field_name: &str, accessor: Accessor<E>, direction: Direction) -> Self {
        Self {
            field_name: field_name.to_string(),
            accessor,
            direction,
        }
    }

    pub(crate) fn on(field: &Field<E>, direction: Direction) -> Self {
        Self::new(field.name(), field.accessor(), direction)
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn with_direction(&self, direction: Direction) -> Self {
        Self::new(&self.field_name, self.accessor, direction)
    }
}

impl<E> Clone for OrderingStep<E> {
    fn clone(&self) -> Self {
        Self {
            field_name: self.field_name.clone(),
            accessor: self.accessor,
            direction: self.direction,
        }
    }
}

impl<E> std::fmt::Debug for OrderingStep<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderingStep")
            .field("field_name", &self.field_name)
            .field("direction", &self.direction)
            .finish()
    }
}

/// Whether a query carries an ordering.
///
/// A query starts `Unordered`. The first primary ordering moves it to `Ordered`,
/// and it stays there: every further ordering on the chain is secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingState {
    Unordered,
    Ordered,
}

/// Compares entities according to an ordering chain.
///
/// Steps are consulted in chain order; the first non-equal comparison decides.
/// Entities equal on every step compare equal, so a stable sort keeps their
/// incoming order.
pub(crate) struct EntityComparator<'a, E> {
    steps: &'a [OrderingStep<E>],
}

impl<'a, E> EntityComparator<'a, E> {
    pub(crate) fn new(steps: &'a [OrderingStep<E>]) -> Self {
        Self { steps }
    }

    pub(crate) fn compare(&self, left: &E, right: &E) -> std::cmp::Ordering {
        for step in self.steps {
            let left_value = (step.accessor)(left);
            let right_value = (step.accessor)(right);

            let ordering = left_value.cmp(&right_value);
            if ordering != std::cmp::Ordering::Equal {
                return step.direction.orient(ordering);
            }
        }
        std::cmp::Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Entity;
    use crate::test_utils::Thing;
    use std::cmp::Ordering;

    fn step(field_name: &str, direction: Direction) -> OrderingStep<Thing> {
        OrderingStep::on(Thing::schema().resolve(field_name).unwrap(), direction)
    }

    #[test]
    fn compare_on_a_single_ascending_step() {
        let steps = vec![step("Id", Direction::Ascending)];
        let comparator = EntityComparator::new(&steps);

        assert_eq!(
            Ordering::Less,
            comparator.compare(&Thing::new(1, "a", 0), &Thing::new(2, "a", 0))
        );
    }

    #[test]
    fn compare_on_a_single_descending_step() {
        let steps = vec![step("Id", Direction::Descending)];
        let comparator = EntityComparator::new(&steps);

        assert_eq!(
            Ordering::Greater,
            comparator.compare(&Thing::new(1, "a", 0), &Thing::new(2, "a", 0))
        );
    }

    #[test]
    fn second_step_breaks_ties_of_the_first() {
        let steps = vec![step("Name", Direction::Ascending), step("Id", Direction::Descending)];
        let comparator = EntityComparator::new(&steps);

        assert_eq!(
            Ordering::Greater,
            comparator.compare(&Thing::new(1, "a", 0), &Thing::new(2, "a", 0))
        );
        assert_eq!(
            Ordering::Less,
            comparator.compare(&Thing::new(9, "a", 0), &Thing::new(1, "b", 0))
        );
    }

    #[test]
    fn entities_equal_on_every_step_compare_equal() {
        let steps = vec![step("Name", Direction::Ascending)];
        let comparator = EntityComparator::new(&steps);

        assert_eq!(
            Ordering::Equal,
            comparator.compare(&Thing::new(1, "a", 0), &Thing::new(2, "a", 5))
        );
    }
}
