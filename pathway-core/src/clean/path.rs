use crate::clean::{CleanOutcome, CleanedPath};

/// Lexically cleans a request path into its canonical absolute form.
///
/// Rules, applied in a single pass over the input:
///
/// - The result begins with exactly one "/"; a missing leading slash is
///   repaired, multiple leading slashes collapse.
/// - Runs of consecutive slashes collapse to one.
/// - "." segments are dropped.
/// - ".." segments pop the preceding segment; at the root they are a no-op
///   (the path cannot ascend above root).
/// - Trailing slashes are dropped, except for the root path itself.
///
/// The function is total: every input maps to a canonical path, and empty or
/// separator-only input maps to "/". It is also idempotent, so feeding a
/// cleaned path back in reports [`CleanOutcome::Unchanged`].
pub fn clean_path(raw: &str) -> CleanOutcome {
    // Empty means root, and needs the rewrite recorded.
    if raw.is_empty() {
        return CleanOutcome::Rewritten(CleanedPath::root());
    }

    // Short-circuit early if already root.
    if raw == "/" {
        return CleanOutcome::Unchanged(CleanedPath::root());
    }

    let mut rewritten = false;
    let mut stack: Vec<&str> = Vec::new();

    // A relative path is repaired rather than refused; cleaning cannot fail.
    if !raw.starts_with('/') {
        rewritten = true;
    }

    // Multiple leading slashes will collapse to one.
    if raw.starts_with("//") {
        rewritten = true;
    }

    // Strip all leading slashes before splitting.
    let body = raw.trim_start_matches('/');

    for segment in body.split('/') {
        match segment {
            "" => {
                // Repeated or trailing slash.
                // Note, an empty body means the input was all slashes and the
                // leading-slash check above already flagged it.
                if !body.is_empty() {
                    rewritten = true;
                }
            }
            "." => {
                // No-op segment.
                rewritten = true;
            }
            ".." => {
                // Pops the previous segment; the root is a floor, so a pop
                // with nothing left stays at root.
                stack.pop();
                rewritten = true;
            }
            _ => {
                stack.push(segment);
            }
        }
    }

    // Rebuild the canonical path. Segments on the stack are non-empty, so
    // the rebuilt form can neither contain "//" nor end in a slash.
    let mut cleaned = String::with_capacity(raw.len());
    cleaned.push('/');
    cleaned.push_str(&stack.join("/"));

    let path = CleanedPath(cleaned);

    if rewritten {
        CleanOutcome::Rewritten(path)
    } else {
        CleanOutcome::Unchanged(path)
    }
}
