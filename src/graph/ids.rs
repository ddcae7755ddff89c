use ahash::AHashSet;
use uuid::Uuid;

/// Produces a `"<prefix>-<uuid>"` id that is not in `taken`.
pub(crate) fn generate_id<'a>(prefix: &str, taken: impl IntoIterator<Item = &'a str>) -> String {
    let taken: AHashSet<&str> = taken.into_iter().collect();
    loop {
        let candidate = format!("{}-{}", prefix, Uuid::new_v4());
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
    }
}
