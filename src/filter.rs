//! Recognizes the noisy deprecated-section diagnostic and drops the whole
//! block: the trigger line plus a fixed number of continuation lines.

const SECTION_WARNING: &str = "warning: section";
const SECTION_DEPRECATED: &str = "is deprecated";
const RENAME_NOTE: &str = "note: change section name to";

pub fn is_trigger(line: &str) -> bool {
    (line.contains(SECTION_WARNING) && line.contains(SECTION_DEPRECATED))
        || line.contains(RENAME_NOTE)
}

/// Per-line suppression state. At most one window is open at a time;
/// lines inside a window are dropped without classification, so a trigger
/// there never re-arms the window.
pub struct SuppressFilter {
    skip_after: usize,
    remaining: usize,
}

impl SuppressFilter {
    pub fn new(skip_after: usize) -> Self {
        Self {
            skip_after,
            remaining: 0,
        }
    }

    /// Returns true when the line should be forwarded.
    pub fn admit(&mut self, line: &str) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            return false;
        }
        if is_trigger(line) {
            self.remaining = self.skip_after;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filtered<'a>(lines: &[&'a str]) -> Vec<&'a str> {
        let mut f = SuppressFilter::new(2);
        lines.iter().copied().filter(|l| f.admit(l)).collect()
    }

    #[test]
    fn forwards_clean_output_unchanged() {
        let lines = ["compiling foo.c", "linking foo", "done"];
        assert_eq!(filtered(&lines), lines);
    }

    #[test]
    fn drops_warning_block() {
        let out = filtered(&[
            "foo",
            "warning: section `.bar' is deprecated",
            "the section will be ignored",
            "see the linker manual",
            "qux",
        ]);
        assert_eq!(out, vec!["foo", "qux"]);
    }

    #[test]
    fn rename_note_alone_opens_a_window() {
        let out = filtered(&[
            "foo",
            "note: change section name to `.baz'",
            "continuation one",
            "continuation two",
            "qux",
        ]);
        assert_eq!(out, vec!["foo", "qux"]);
    }

    #[test]
    fn warning_substring_alone_is_not_a_trigger() {
        let lines = ["warning: section size exceeds limit"];
        assert_eq!(filtered(&lines), lines);
    }

    #[test]
    fn deprecated_substring_alone_is_not_a_trigger() {
        let lines = ["this api is deprecated"];
        assert_eq!(filtered(&lines), lines);
    }

    #[test]
    fn window_lines_are_not_classified() {
        // The note right after the warning is consumed by the open window
        // rather than opening a second one.
        let out = filtered(&[
            "foo",
            "warning: section `.bar' is deprecated",
            "note: change section name to `.baz'",
            "qux",
            "quux",
        ]);
        assert_eq!(out, vec!["foo", "quux"]);
    }

    #[test]
    fn stream_may_end_inside_a_window() {
        let out = filtered(&[
            "a",
            "warning: section `.x' is deprecated",
            "note: change section name to `.y'",
        ]);
        assert_eq!(out, vec!["a"]);
    }

    #[test]
    fn window_length_follows_configuration() {
        let mut f = SuppressFilter::new(1);
        assert!(!f.admit("warning: section `.a' is deprecated"));
        assert!(!f.admit("continuation"));
        assert!(f.admit("next"));

        let mut f = SuppressFilter::new(0);
        assert!(!f.admit("warning: section `.a' is deprecated"));
        assert!(f.admit("next"));
    }
}
