pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice of `items` shown on the 1-based `page`.
///
/// A missing page means the first one. Pages before the first or past the
/// end of `items` are empty; callers decide whether that is an error.
pub fn paginate<T>(items: &[T], page: Option<i64>) -> &[T] {
    let page = page.unwrap_or(1);
    if page < 1 {
        return &[];
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page_is_default() {
        let items = items(25);
        assert_eq!(paginate(&items, None), &items[0..10]);
        assert_eq!(paginate(&items, Some(1)), &items[0..10]);
    }

    #[test]
    fn last_page_is_partial() {
        let items = items(25);
        assert_eq!(paginate(&items, Some(3)), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = items(25);
        assert!(paginate(&items, Some(4)).is_empty());
        assert!(paginate(&items, Some(0)).is_empty());
        assert!(paginate(&items, Some(-1)).is_empty());
        assert!(paginate(&items, Some(i64::MAX)).is_empty());
        assert!(paginate::<usize>(&[], None).is_empty());
    }
}
