//! Co-sorting helpers.
//!
//! Several parallel sequences are reordered by one key sequence without
//! zipping them into tuples:
//!
//! 1. `argsort` computes a stable permutation of index positions keyed by `t`
//! 2. `gather` applies that permutation to each dependent sequence
//!
//! Keys are compared with `f64::total_cmp`, so the order is total even in the
//! presence of NaN (which sorts last) and `-0.0 < 0.0`.

/// Stable ascending permutation of `keys`.
///
/// Equal keys keep their original relative order.
pub fn argsort(keys: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..keys.len()).collect();
    // `sort_by` is stable.
    idx.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
    idx
}

/// Reorder `values` by `perm` (`out[i] = values[perm[i]]`).
///
/// # Panics
/// Panics if any index in `perm` is out of bounds for `values`.
pub fn gather<T: Copy>(values: &[T], perm: &[usize]) -> Vec<T> {
    perm.iter().map(|&i| values[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argsort_orders_keys() {
        let keys = [3.0, -1.0, 2.0, 0.0];
        assert_eq!(argsort(&keys), vec![1, 3, 2, 0]);
    }

    #[test]
    fn argsort_is_stable_on_ties() {
        let keys = [2.0, 1.0, 2.0, 1.0, 2.0];
        assert_eq!(argsort(&keys), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn gather_co_permutes_dependent_sequences() {
        let t = [5.0, -5.0, 0.0];
        let z = [50.0, -50.0, 0.5];
        let perm = argsort(&t);
        let t_sorted = gather(&t, &perm);
        let z_sorted = gather(&z, &perm);
        assert_eq!(t_sorted, vec![-5.0, 0.0, 5.0]);
        assert_eq!(z_sorted, vec![-50.0, 0.5, 50.0]);
    }

    #[test]
    fn nan_keys_sort_last() {
        let keys = [f64::NAN, 1.0, 0.0];
        assert_eq!(argsort(&keys), vec![2, 1, 0]);
    }

    #[test]
    fn empty_input() {
        assert!(argsort(&[]).is_empty());
        assert!(gather::<f64>(&[], &[]).is_empty());
    }
}
