use crate::infra::tmux::PaneRecord;

/// Picks the pane to jump to, skipping the pane identified by `exclude_id`.
///
/// Scans in snapshot order: an active pane always takes the slot, otherwise a
/// pane needs a strictly newer `last_used` than the running best. Taking an
/// active pane also replaces the running best time with that pane's own
/// timestamp, even when it is lower, so later panes compare against it.
///
/// When no pane wins the scan (all candidates inactive and never used), the
/// first pane that is not excluded is returned. `None` means every pane is
/// excluded or the snapshot is empty.
pub fn select_best(panes: &[PaneRecord], exclude_id: &str) -> Option<usize> {
    let mut best_index = None;
    let mut best_time = 0;

    for (index, pane) in panes.iter().enumerate() {
        if pane.full_id == exclude_id {
            continue;
        }

        if pane.is_active || pane.last_used > best_time {
            best_time = pane.last_used;
            best_index = Some(index);
        }
    }

    best_index.or_else(|| panes.iter().position(|p| p.full_id != exclude_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pane(window: u32, index: u32, last_used: u64, is_active: bool) -> PaneRecord {
        PaneRecord::new(
            "main",
            window.to_string(),
            index.to_string(),
            "bash",
            last_used,
            is_active,
        )
    }

    #[test]
    fn prefers_active_pane_over_older_panes() {
        let panes = vec![pane(0, 0, 1000, false), pane(0, 1, 2000, true), pane(1, 0, 500, false)];

        assert_eq!(select_best(&panes, "main:0.0"), Some(1));
    }

    #[test]
    fn picks_most_recent_when_nothing_is_active() {
        let panes = vec![pane(0, 0, 10, false), pane(0, 1, 30, false), pane(0, 2, 20, false)];

        assert_eq!(select_best(&panes, "other:9.9"), Some(1));
    }

    #[test]
    fn skips_excluded_pane_even_when_most_recent() {
        let panes = vec![pane(0, 0, 10, false), pane(0, 1, 99, true)];

        assert_eq!(select_best(&panes, "main:0.1"), Some(0));
    }

    #[test]
    fn later_active_pane_overrides_more_recent_one() {
        let panes = vec![pane(0, 0, 900, false), pane(0, 1, 100, true)];

        assert_eq!(select_best(&panes, "x:0.0"), Some(1));
    }

    #[test]
    fn active_pane_lowers_running_best_time() {
        // The active pane at index 1 drops the running best to 5, so the
        // pane at index 2 (50) wins even though index 0 (900) is newer.
        let panes = vec![
            pane(0, 0, 900, false),
            pane(0, 1, 5, true),
            pane(0, 2, 50, false),
        ];

        assert_eq!(select_best(&panes, "x:0.0"), Some(2));
    }

    #[test]
    fn equal_timestamp_does_not_replace_best() {
        let panes = vec![pane(0, 0, 40, false), pane(0, 1, 40, false)];

        assert_eq!(select_best(&panes, "x:0.0"), Some(0));
    }

    #[test]
    fn falls_back_to_first_other_pane_when_none_were_used() {
        let panes = vec![pane(0, 0, 0, false), pane(0, 1, 0, false), pane(0, 2, 0, false)];

        assert_eq!(select_best(&panes, "main:0.0"), Some(1));
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::only_current(vec![pane(0, 0, 1000, true)])]
    fn returns_none_when_every_pane_is_excluded(#[case] panes: Vec<PaneRecord>) {
        assert_eq!(select_best(&panes, "main:0.0"), None);
    }

    #[test]
    fn is_deterministic() {
        let panes = vec![
            pane(0, 0, 300, false),
            pane(0, 1, 0, true),
            pane(1, 0, 200, false),
            pane(1, 1, 100, true),
        ];

        let first = select_best(&panes, "main:1.0");
        for _ in 0..10 {
            assert_eq!(select_best(&panes, "main:1.0"), first);
        }
        assert_eq!(first, Some(3));
    }
}
