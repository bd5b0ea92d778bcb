/// Competition ("1224") ranks of `values`, highest value first.
///
/// Tied values share the lowest rank among them and the next distinct value skips
/// ahead: `[7.0, 7.0, 5.0]` ranks as `[1, 1, 3]`.
pub fn competition_ranks(values: &[f64]) -> Vec<u32> {
    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let mut ranks = vec![0; values.len()];
    for (position, &i) in order.iter().enumerate() {
        ranks[i] = match position {
            0 => 1,
            _ if values[i] == values[order[position - 1]] => ranks[order[position - 1]],
            _ => position as u32 + 1,
        };
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::competition_ranks;

    #[test]
    fn ties_share_the_lowest_rank() {
        assert_eq!(competition_ranks(&[7.0, 7.0, 5.0]), vec![1, 1, 3]);
    }

    #[test]
    fn three_way_tie_skips_to_four() {
        assert_eq!(competition_ranks(&[2.0, 9.0, 9.0, 9.0, 1.0]), vec![4, 1, 1, 1, 5]);
    }

    #[test]
    fn distinct_values_rank_descending() {
        assert_eq!(competition_ranks(&[1.0, 3.0, 2.0]), vec![3, 1, 2]);
    }

    #[test]
    fn empty_input() {
        assert!(competition_ranks(&[]).is_empty());
    }
}
