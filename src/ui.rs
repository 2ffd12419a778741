//! Small UI arithmetic helpers

/// Column width for a table column holding an icon: icon width plus 10%,
/// rounded. No icon means no column, width 0.
pub fn icon_column_width(icon_width: Option<u32>) -> u32 {
    match icon_width {
        Some(width) => (f64::from(width) * 1.1).round() as u32,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_icon_is_zero() {
        assert_eq!(icon_column_width(None), 0);
    }

    #[test]
    fn test_width_is_padded_and_rounded() {
        assert_eq!(icon_column_width(Some(100)), 110);
        // 9 * 1.1 = 9.9, rounds up
        assert_eq!(icon_column_width(Some(9)), 10);
        assert_eq!(icon_column_width(Some(0)), 0);
    }
}
