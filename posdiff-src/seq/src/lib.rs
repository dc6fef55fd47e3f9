use inner::doc_inline_reexport;

doc_inline_reexport! {
    positive_difference_sum,
    rank_compress,
}
