/// number of values actually visited when walking `len` elements with `stride`
pub(crate) fn strided_len(len: usize, stride: usize) -> usize {
    match len {
        0 => 0,
        len => (len - 1) / stride + 1,
    }
}

/// `ndarray` slice step for walking an axis of `len` elements with `stride`.
/// Any stride at or past `len` only visits index 0, so the step is clamped
/// to `len` before it is narrowed to `isize`
pub(crate) fn slice_step(len: usize, stride: usize) -> isize {
    stride.min(len.max(1)) as isize
}

/// count written to the `# Number of ...` headers. This is `floor(len / stride)`
/// and is one short of [`strided_len`] whenever `stride` does not divide `len`
pub(crate) fn header_count(len: usize, stride: usize) -> usize {
    len / stride
}

pub(crate) fn stride_values(values: &[f64], stride: usize) -> Vec<f64> {
    let mut strided = Vec::with_capacity(strided_len(values.len(), stride));
    strided.extend(values.iter().step_by(stride).copied());
    strided
}
