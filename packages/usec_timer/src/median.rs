/// How the median of an even number of samples is formed.
///
/// An odd number of samples always yields the single middle element of the sorted samples.
/// For an even number there are two middle candidates and this policy picks the pair that
/// gets averaged.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EvenMedian {
    /// Average the elements at sorted indices `count/2` and `count/2 + 1`.
    ///
    /// This is the pairing established by earlier versions of this benchmark API and what
    /// existing callers compare their numbers against. Note that it is shifted one position
    /// up from the true center, so it is not the textbook median. When `count/2 + 1` is past
    /// the end (only possible for two samples) the last element is used in its place.
    #[default]
    UpperPair,

    /// Average the two central elements, at sorted indices `count/2 - 1` and `count/2`.
    ///
    /// This is the textbook median of an even number of samples.
    Midpoint,
}

/// Sorts `samples` and returns their median according to `even_median`.
///
/// Returns zero for an empty slice.
#[expect(
    clippy::indexing_slicing,
    clippy::integer_division,
    clippy::arithmetic_side_effects,
    reason = "indices are derived from the length of a non-empty slice"
)]
pub(crate) fn median(samples: &mut [f64], even_median: EvenMedian) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    samples.sort_unstable_by(f64::total_cmp);

    let count = samples.len();
    let middle = count / 2;

    if count % 2 == 1 {
        return samples[middle];
    }

    let (lower, upper) = match even_median {
        EvenMedian::Midpoint => (middle - 1, middle),
        EvenMedian::UpperPair => (middle, (middle + 1).min(count - 1)),
    };

    (samples[lower] + samples[upper]) / 2.0
}
