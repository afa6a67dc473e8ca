/// A source of uniformly distributed values in `[0, 1)`.
///
/// Any `FnMut() -> f64` closure qualifies, which is how tests feed fixed
/// sequences. Production callers use [`ThreadRandom`].
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Picks an index in `0..len` from a single draw. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let scaled = (self.next_f64() * len as f64).floor();
        // Out-of-range draws from injected sources are clamped.
        if scaled.is_nan() || scaled < 0.0 {
            0
        } else {
            (scaled as usize).min(len - 1)
        }
    }
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Process-wide default backed by `rand`'s thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// A same-type transform, the shape the probability wrapper decorates.
pub trait Transform<T> {
    fn apply(&mut self, input: T) -> T;
}

impl<T, F> Transform<T> for F
where
    F: FnMut(T) -> T,
{
    fn apply(&mut self, input: T) -> T {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_random_source() {
        let mut values = vec![0.25_f64, 0.75].into_iter();
        let mut rng = move || values.next().unwrap_or(0.0);
        assert_eq!(rng.next_f64(), 0.25);
        assert_eq!(rng.next_f64(), 0.75);
        assert_eq!(rng.next_f64(), 0.0);
    }

    #[test]
    fn test_pick_index_bounds() {
        assert_eq!((|| 0.0_f64).pick_index(4), 0);
        assert_eq!((|| 0.5_f64).pick_index(4), 2);
        assert_eq!((|| 0.999_999_f64).pick_index(4), 3);
        assert_eq!((|| 1.0_f64).pick_index(4), 3);
        assert_eq!((|| -0.3_f64).pick_index(4), 0);
        assert_eq!((|| f64::NAN).pick_index(4), 0);
    }

    #[test]
    fn test_thread_random_in_unit_interval() {
        let mut rng = ThreadRandom;
        for _ in 0..1000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_closure_transform() {
        let mut double = |n: i32| n * 2;
        assert_eq!(double.apply(21), 42);
    }
}
