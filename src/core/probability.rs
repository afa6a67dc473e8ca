use crate::domain::ports::{RandomSource, ThreadRandom, Transform};

/// Wraps `transform` so each call applies it only when one draw from `rng`
/// falls strictly below `probability`; otherwise the input passes through.
///
/// Exactly one value is drawn per call and nothing carries over between
/// calls. A probability of `0.0` never applies, `1.0` always does.
pub fn apply_with_probability<T, F, R>(
    mut transform: F,
    probability: f64,
    mut rng: R,
) -> impl FnMut(T) -> T
where
    F: Transform<T>,
    R: RandomSource,
{
    move |input: T| {
        if should_apply(&mut rng, probability) {
            transform.apply(input)
        } else {
            input
        }
    }
}

/// The single gating rule shared by the wrapper and the pipeline.
pub(crate) fn should_apply<R: RandomSource + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.next_f64() < probability
}

pub fn apply_with_default_probability<T, F>(transform: F, probability: f64) -> impl FnMut(T) -> T
where
    F: Transform<T>,
{
    apply_with_probability(transform, probability, ThreadRandom)
}
