// Quadratic reference evaluators; only for cross-checking.

pub fn positive_difference_sum<T: Copy + Into<i128>>(a: &[T]) -> i128 {
    let a: Vec<i128> = a.iter().map(|&x| x.into()).collect();
    let mut res = 0;
    for i in 0..a.len() {
        for j in i + 1..a.len() {
            let diff = a[j] - a[i];
            if diff > 0 {
                res += diff;
            }
        }
    }
    res
}

pub fn positive_difference_pairs<T: Copy + Ord>(a: &[T]) -> u64 {
    let mut res = 0;
    for i in 0..a.len() {
        res += a[i + 1..].iter().filter(|&&x| x > a[i]).count() as u64;
    }
    res
}

#[test]
fn sanity_check() {
    assert_eq!(positive_difference_sum(&[1, 3, 2, 4]), 9);
    assert_eq!(positive_difference_sum(&[5, 1, 3, 2]), 3);
    assert_eq!(positive_difference_sum(&[1, 2, 3, 4, 5]), 20);
    assert_eq!(positive_difference_sum(&[10, 5, 8, 3, 7]), 9);
    assert_eq!(positive_difference_sum(&[5, 4, 3, 2, 1]), 0);
    assert_eq!(positive_difference_sum(&[2, 2, 2]), 0);
    assert_eq!(positive_difference_sum(&[-3_i8, 127]), 130);

    assert_eq!(positive_difference_pairs(&[1, 3, 2, 4]), 5);
    assert_eq!(positive_difference_pairs(&[5, 1, 3, 2]), 2);
    assert_eq!(positive_difference_pairs(&[2, 2, 2]), 0);

    let empty: [i64; 0] = [];
    assert_eq!(positive_difference_sum(&empty), 0);
    assert_eq!(positive_difference_pairs(&empty), 0);
}
