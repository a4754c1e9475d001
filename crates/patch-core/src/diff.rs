//! Unified diffs for patch previews

use std::path::Path;

use similar::{ChangeTag, TextDiff};

/// Line counts added and removed by a patch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStat {
    pub insertions: usize,
    pub deletions: usize,
}

impl DiffStat {
    /// Count changed lines between two versions of a document.
    pub fn compute(old: &str, new: &str) -> Self {
        if old == new {
            return Self::default();
        }

        let mut stat = Self::default();
        for change in TextDiff::from_lines(old, new).iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => stat.insertions += 1,
                ChangeTag::Delete => stat.deletions += 1,
                ChangeTag::Equal => {}
            }
        }
        stat
    }
}

impl std::fmt::Display for DiffStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "+{} -{}", self.insertions, self.deletions)
    }
}

/// Render a unified diff with `a/` and `b/` headers named after `path`.
///
/// Returns an empty string when the two versions are identical.
pub fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let name = path.to_string_lossy().replace('\\', "/");
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{name}"), &format!("b/{name}"))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_counts_inserted_line() {
        let stat = DiffStat::compute("a\nb\n", "a\nMARK\nb\n");
        assert_eq!(
            stat,
            DiffStat {
                insertions: 1,
                deletions: 0
            }
        );
        assert_eq!(stat.to_string(), "+1 -0");
    }

    #[test]
    fn stat_counts_replaced_lines() {
        let stat = DiffStat::compute("a\nold\nold\nz\n", "a\nnew\nz\n");
        assert_eq!(stat.insertions, 1);
        assert_eq!(stat.deletions, 2);
    }

    #[test]
    fn identical_text_has_empty_diff() {
        assert_eq!(unified_diff(Path::new("f.txt"), "same\n", "same\n"), "");
        assert_eq!(DiffStat::compute("same\n", "same\n"), DiffStat::default());
    }

    #[test]
    fn diff_has_headers_and_hunk() {
        let diff = unified_diff(Path::new("src/App.tsx"), "a\nb\n", "a\nMARK\nb\n");
        assert!(diff.contains("--- a/src/App.tsx"));
        assert!(diff.contains("+++ b/src/App.tsx"));
        assert!(diff.contains("@@"));
        assert!(diff.contains("+MARK"));
    }
}
