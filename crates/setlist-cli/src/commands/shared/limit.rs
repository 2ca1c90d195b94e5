/// Truncate `items` to the global `--limit`, when one was given.
pub fn apply_limit<T>(items: &mut Vec<T>, global: Option<u32>) {
    if let Some(limit) = global.and_then(|limit| usize::try_from(limit).ok()) {
        items.truncate(limit);
    }
}
