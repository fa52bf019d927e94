use super::Window;

/// `round(count / total * 100)`, arrondi au demi supérieur, 0 si `total == 0`.
pub(crate) fn percent(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let count = count.min(total) as u64;
    let total = total as u64;
    // floor(x + 0.5) en entiers : (200c + t) / 2t
    ((200 * count + total) / (2 * total)) as u8
}

/// Tri décroissant par pourcentage ; à égalité, le bloc le plus tôt d'abord.
pub(super) fn rank(windows: &mut [Window]) {
    windows.sort_by(|a, b| {
        b.availability_percent
            .cmp(&a.availability_percent)
            .then(a.start_date.cmp(&b.start_date))
    });
}

/// Les `limit` premières fenêtres d'une liste déjà classée.
pub fn best_overlap_periods(windows: &[Window], limit: usize) -> &[Window] {
    &windows[..limit.min(windows.len())]
}

#[cfg(test)]
mod tests {
    use super::percent;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 8), 13); // 12.5
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(5, 5), 100);
    }
}
