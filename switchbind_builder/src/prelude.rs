//! Traits which, typically, may be imported without concern: `use switchbind::prelude::*`.

/// Behaviour for a collection field that accumulates items across switch occurrences.
// Needs to be imported in order to implement a custom `Collectable`.
pub trait Collectable {
    /// The element type, coerced from each value token.
    type Item;

    /// Append `items`, in order, after the existing contents.
    fn accumulate(&mut self, items: Vec<Self::Item>);
}

/// Behaviour for a boolean field that is set by the presence of its switch.
// Needs to be imported in order to implement a custom `Toggle`.
pub trait Toggle {
    /// Set this toggle to `true`.
    fn toggle(&mut self);
}

impl Toggle for bool {
    fn toggle(&mut self) {
        *self = true;
    }
}

impl Toggle for Option<bool> {
    fn toggle(&mut self) {
        self.replace(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_bool() {
        let mut value = false;
        value.toggle();
        assert!(value);
        value.toggle();
        assert!(value);
    }

    #[test]
    fn toggle_option() {
        let mut value: Option<bool> = None;
        value.toggle();
        assert_eq!(value, Some(true));

        let mut value: Option<bool> = Some(false);
        value.toggle();
        assert_eq!(value, Some(true));
    }
}
