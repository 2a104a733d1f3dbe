use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

use crate::api::InvalidCoercion;
use crate::coerce::{coerce, Coerce};
use crate::prelude::Collectable;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Coerce every token into the collection's element type, then append them after the existing contents.
///
/// All tokens are coerced before `existing` is touched.
/// If any token is rejected, `existing` is left as it was and the rejected token's index is reported.
pub(crate) fn accumulate<K>(existing: &mut K, tokens: &[&str]) -> Result<(), (usize, InvalidCoercion)>
where
    K: Collectable,
    K::Item: Coerce,
{
    let items = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| coerce::<K::Item>(token).map_err(|error| (index, error)))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Accumulating {} item(s) into {}.",
            items.len(),
            std::any::type_name::<K>()
        );
    }

    existing.accumulate(items);
    Ok(())
}

impl<T> Collectable for Vec<T> {
    type Item = T;

    fn accumulate(&mut self, items: Vec<T>) {
        self.extend(items);
    }
}

impl<T> Collectable for VecDeque<T> {
    type Item = T;

    fn accumulate(&mut self, items: Vec<T>) {
        self.extend(items);
    }
}

impl<T> Collectable for LinkedList<T> {
    type Item = T;

    fn accumulate(&mut self, items: Vec<T>) {
        self.extend(items);
    }
}

// Fixed-size: rebuilt on each merge.
impl<T> Collectable for Box<[T]> {
    type Item = T;

    fn accumulate(&mut self, items: Vec<T>) {
        let mut merged = std::mem::take(self).into_vec();
        merged.extend(items);
        *self = merged.into_boxed_slice();
    }
}

impl<T: Eq + Hash> Collectable for HashSet<T> {
    type Item = T;

    fn accumulate(&mut self, items: Vec<T>) {
        self.extend(items);
    }
}

impl<T: Ord> Collectable for BTreeSet<T> {
    type Item = T;

    fn accumulate(&mut self, items: Vec<T>) {
        self.extend(items);
    }
}

impl<K: Collectable + Default> Collectable for Option<K> {
    type Item = K::Item;

    fn accumulate(&mut self, items: Vec<K::Item>) {
        self.get_or_insert_with(K::default).accumulate(items);
    }
}
