//! Enumerable contract
//!
//! A finite, ordered set of named cases. Each case carries a stable raw
//! index (which may be sparse) and a display name; its order index is its
//! position in [`Enumerable::all_cases`].
//!
//! Reconstruction never fails: an unknown raw index, order index or name
//! yields the first case, so stored values that reference removed cases
//! still load.

use crate::parameter::kebab_case;

/// A closed, ordered set of named variants
///
/// `all_cases` must hold at least one case. Use [`impl_enumerable!`] to
/// derive an implementation for a fieldless enum.
///
/// [`impl_enumerable!`]: crate::impl_enumerable
pub trait Enumerable: Copy + 'static {
    /// Every case, in canonical order
    fn all_cases() -> &'static [Self];

    /// Stable raw identity of this case
    fn index(&self) -> i64;

    /// Display name of this case
    fn name(&self) -> &'static str;

    /// Number of cases
    fn case_count() -> usize {
        Self::all_cases().len()
    }

    /// Position of this case within `all_cases`
    fn order_index(&self) -> usize {
        let index = self.index();
        Self::all_cases()
            .iter()
            .position(|case| case.index() == index)
            .unwrap_or(0)
    }

    /// The case with the given raw index, or the first case
    fn from_raw_index(index: i64) -> Self {
        Self::all_cases()
            .iter()
            .copied()
            .find(|case| case.index() == index)
            .unwrap_or_else(first_case::<Self>)
    }

    /// The case at the given position, or the first case when out of range
    fn from_order_index(order_index: i64) -> Self {
        usize::try_from(order_index)
            .ok()
            .and_then(|order_index| Self::all_cases().get(order_index))
            .copied()
            .unwrap_or_else(first_case::<Self>)
    }

    /// The case whose display name or kebab-case name matches, or the first case
    fn from_name(name: &str) -> Self {
        Self::all_cases()
            .iter()
            .copied()
            .find(|case| case.name() == name || kebab_case(case.name()) == name)
            .unwrap_or_else(first_case::<Self>)
    }

    /// Kebab-case names of all cases, in order
    fn case_names() -> Vec<String> {
        Self::all_cases()
            .iter()
            .map(|case| kebab_case(case.name()))
            .collect()
    }

    /// Smallest and largest raw index across all cases
    fn index_range() -> (i64, i64) {
        let indices = Self::all_cases().iter().map(Enumerable::index);
        let min = indices.clone().min().unwrap_or(0);
        let max = indices.max().unwrap_or(0);
        (min, max)
    }
}

fn first_case<E: Enumerable>() -> E {
    E::all_cases()[0]
}

/// Implement [`Enumerable`] for a fieldless enum
///
/// # Example
/// ```
/// use liveparam::{impl_enumerable, Enumerable};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Quality {
///     Low,
///     High,
/// }
///
/// impl_enumerable!(Quality {
///     Low = 0 => "Low",
///     High = 4 => "High",
/// });
///
/// assert_eq!(Quality::from_raw_index(4), Quality::High);
/// assert_eq!(Quality::High.order_index(), 1);
/// ```
#[macro_export]
macro_rules! impl_enumerable {
    ($type:ty { $($variant:ident = $index:expr => $name:expr),+ $(,)? }) => {
        impl $crate::Enumerable for $type {
            fn all_cases() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn index(&self) -> i64 {
                match self {
                    $(Self::$variant => $index,)+
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}
