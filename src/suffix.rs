/// Returns the number of trailing frames shared by `outer` and `inner` when `outer` is a suffix of
/// `inner`.
///
/// Frames are compared from the tail of both sequences. `outer` matches only if all of its frames are
/// consumed this way; `inner` may keep deeper frames that `outer` never saw. An empty `outer` never
/// matches, so two stacks with nothing in common are treated as unrelated.
///
/// Every frame of `outer` has to match, its top one included. An enclosing stack whose top frame
/// names the same function as the inner frame but at a different line is therefore unrelated, and
/// nothing is trimmed.
///
/// ```
/// use stack_printer::overlap;
///
/// assert_eq!(overlap(&['b', 'c'], &['a', 'b', 'c']), Some(2));
/// assert_eq!(overlap(&['x', 'b', 'c'], &['a', 'b', 'c']), None);
/// assert_eq!(overlap::<char>(&[], &['a']), None);
/// ```
pub fn overlap<T: PartialEq>(outer: &[T], inner: &[T]) -> Option<usize> {
    if outer.is_empty() || outer.len() > inner.len() {
        return None;
    }

    let matched = outer
        .iter()
        .rev()
        .zip(inner.iter().rev())
        .take_while(|(outer, inner)| outer == inner)
        .count();

    (matched == outer.len()).then_some(matched)
}

/// Returns `true` if `outer` is a suffix of `inner`. See [overlap].
pub fn is_suffix_of<T: PartialEq>(outer: &[T], inner: &[T]) -> bool {
    overlap(outer, inner).is_some()
}
