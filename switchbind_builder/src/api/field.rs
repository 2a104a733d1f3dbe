use crate::api::capture::*;
use crate::coerce::{coerce, Coerce};
use crate::collection::accumulate;
use crate::model::FieldKind;
use crate::prelude::{Collectable, Toggle};

/// A boolean field, set by the mere presence of its switch (precisely 0 values).
///
/// Applies to any [`Toggle`], such as `bool` and `Option<bool>`.
pub struct Switch<C, B> {
    accessor: fn(&mut C) -> &mut B,
}

impl<C, B: Toggle> Switch<C, B> {
    /// Create a switch binding.
    pub fn new(accessor: fn(&mut C) -> &mut B) -> Self {
        Self { accessor }
    }
}

impl<C, B: Toggle> Binding<C> for Switch<C, B> {
    fn kind(&self) -> FieldKind {
        FieldKind::Boolean
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<B>()
    }

    fn bind(&self, target: &mut C, _values: &[&str]) -> Result<(), (usize, InvalidCoercion)> {
        (self.accessor)(target).toggle();
        Ok(())
    }
}

/// A single-value field (precisely 1 value), overwritten on each occurrence of its switch.
pub struct Scalar<C, T> {
    accessor: fn(&mut C) -> &mut T,
}

impl<C, T: Coerce> Scalar<C, T> {
    /// Create a scalar binding.
    pub fn new(accessor: fn(&mut C) -> &mut T) -> Self {
        Self { accessor }
    }
}

impl<C, T: Coerce> Binding<C> for Scalar<C, T> {
    fn kind(&self) -> FieldKind {
        FieldKind::Scalar
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn bind(&self, target: &mut C, values: &[&str]) -> Result<(), (usize, InvalidCoercion)> {
        if let Some(token) = values.first() {
            *(self.accessor)(target) = coerce::<T>(token).map_err(|error| (0, error))?;
        }

        Ok(())
    }
}

/// A single-value field that maps down to [`Option`], taking a single value (precisely 1).
pub struct Optional<C, T> {
    accessor: fn(&mut C) -> &mut Option<T>,
}

impl<C, T: Coerce> Optional<C, T> {
    /// Create an optional binding.
    pub fn new(accessor: fn(&mut C) -> &mut Option<T>) -> Self {
        Self { accessor }
    }
}

impl<C, T: Coerce> Binding<C> for Optional<C, T> {
    fn kind(&self) -> FieldKind {
        FieldKind::Scalar
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Option<T>>()
    }

    fn bind(&self, target: &mut C, values: &[&str]) -> Result<(), (usize, InvalidCoercion)> {
        if let Some(token) = values.first() {
            let value = coerce::<T>(token).map_err(|error| (0, error))?;
            (self.accessor)(target).replace(value);
        }

        Ok(())
    }
}

/// A multi-value field (at least 1 value), extended on each occurrence of its switch.
pub struct Collection<C, K> {
    accessor: fn(&mut C) -> &mut K,
}

impl<C, K> Collection<C, K>
where
    K: Collectable,
    K::Item: Coerce,
{
    /// Create a collection binding.
    pub fn new(accessor: fn(&mut C) -> &mut K) -> Self {
        Self { accessor }
    }
}

impl<C, K> Binding<C> for Collection<C, K>
where
    K: Collectable,
    K::Item: Coerce,
{
    fn kind(&self) -> FieldKind {
        FieldKind::Collection {
            element: std::any::type_name::<K::Item>(),
        }
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<K>()
    }

    fn bind(&self, target: &mut C, values: &[&str]) -> Result<(), (usize, InvalidCoercion)> {
        if values.is_empty() {
            return Ok(());
        }

        accumulate((self.accessor)(target), values)
    }
}
