//! Collision systems: hit tests, resolvers, region classification,
//! containment and the dispatcher that ties them together.

pub mod containment;
pub mod dispatch;
pub mod region;
pub mod resolve;

/// Two distinct mutable elements of one slice
pub(crate) fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j, "pair_mut needs two distinct indices");
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::pair_mut;

    #[test]
    fn pair_mut_in_either_order() {
        let mut v = vec![1, 2, 3, 4];
        let (a, b) = pair_mut(&mut v, 3, 1);
        std::mem::swap(a, b);
        assert_eq!(v, vec![1, 4, 3, 2]);
        let (a, b) = pair_mut(&mut v, 0, 2);
        *a += *b;
        assert_eq!(v[0], 4);
    }
}
