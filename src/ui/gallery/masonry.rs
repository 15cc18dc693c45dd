//! Column placement for the gallery grid.

/// Assigns each card to the currently shortest column, keeping listing
/// order within a column. Cards are one unit wide, so a card's height is
/// the inverse of its aspect ratio.
pub fn distribute(aspect_ratios: &[f32], columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut placed = vec![Vec::new(); columns];
    let mut heights = vec![0.0_f32; columns];

    for (index, aspect_ratio) in aspect_ratios.iter().enumerate() {
        let shortest = heights
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map_or(0, |(column, _)| column);

        heights[shortest] += card_height(*aspect_ratio);
        placed[shortest].push(index);
    }

    placed
}

fn card_height(aspect_ratio: f32) -> f32 {
    if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        1.0 / aspect_ratio
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_cards_fill_round_robin() {
        let placed = distribute(&[1.0; 5], 3);

        assert_eq!(placed, vec![vec![0, 3], vec![1, 4], vec![2]]);
    }

    #[test]
    fn test_tall_card_pushes_next_to_other_column() {
        // Card 0 is four times as tall as it is wide.
        let placed = distribute(&[0.25, 1.0, 1.0, 1.0], 2);

        assert_eq!(placed, vec![vec![0], vec![1, 2, 3]]);
    }

    #[test]
    fn test_zero_columns_means_one() {
        let placed = distribute(&[1.0, 2.0], 0);

        assert_eq!(placed, vec![vec![0, 1]]);
    }

    #[test]
    fn test_degenerate_ratio_counts_as_square() {
        let placed = distribute(&[0.0, f32::NAN, 1.0], 2);

        assert_eq!(placed, vec![vec![0, 2], vec![1]]);
    }
}
