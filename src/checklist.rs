//! Checklist state and score projection shared by the interactive widgets.
//!
//! The validation scorer and the launch-plan tracker are the same machine:
//! a set of checked item ids plus a summary derived from it. Each widget
//! instance owns one [`SelectionSet`] as component-local signal state; the
//! [`ScoreSummary`] is recomputed on every read and never stored.

use std::collections::BTreeSet;

/// Set of item identifiers the user has currently marked done.
///
/// Membership-only semantics: iteration order never matters and nothing is
/// persisted. Lives exactly as long as the widget view that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    checked: BTreeSet<u32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`: checked becomes unchecked and back.
    ///
    /// Total over the whole id space. An id outside the widget's item list
    /// is tolerated here and simply never counted by [`project`].
    pub fn toggle(&mut self, id: u32) {
        if !self.checked.remove(&id) {
            self.checked.insert(id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.checked.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }
}

/// Qualitative bucket for a validation score.
///
/// Threshold ladder, highest first: 3+ criteria met is high potential,
/// 2 is good, anything below that is lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Potential {
    High,
    Good,
    Lower,
}

impl Potential {
    pub fn message(self) -> &'static str {
        match self {
            Potential::High => "High potential. Start building your MVP.",
            Potential::Good => "Good potential. Validate with more users.",
            Potential::Lower => "Lower potential. Consider another tool, or pivot.",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Potential::High => "score-high",
            Potential::Good => "score-good",
            Potential::Lower => "score-low",
        }
    }
}

/// Snapshot of a checklist's progress, derived from the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub count: usize,
    pub total: usize,
    pub percentage: u8,
}

impl ScoreSummary {
    pub fn potential(self) -> Potential {
        match self.count {
            c if c >= 3 => Potential::High,
            2 => Potential::Good,
            _ => Potential::Lower,
        }
    }
}

/// Project the current selection onto a fixed item list.
///
/// Pure function of its inputs. Only ids present in `item_ids` count
/// toward the score, so a stray id in the selection has no visible effect.
pub fn project(selection: &SelectionSet, item_ids: &[u32]) -> ScoreSummary {
    let count = item_ids.iter().filter(|id| selection.contains(**id)).count();
    let total = item_ids.len();
    let percentage = if total == 0 {
        0
    } else {
        (100.0 * count as f64 / total as f64).round() as u8
    };
    ScoreSummary {
        count,
        total,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const IDS: [u32; 4] = [1, 2, 3, 4];

    #[test]
    fn toggle_checks_and_unchecks() {
        let mut sel = SelectionSet::new();
        assert!(sel.is_empty());

        sel.toggle(2);
        assert!(sel.contains(2));
        assert_eq!(sel.len(), 1);

        sel.toggle(2);
        assert!(!sel.contains(2));
        assert!(sel.is_empty());
    }

    #[test]
    fn even_toggle_sequences_restore_the_set() {
        let mut sel = SelectionSet::new();
        sel.toggle(3);
        let before = sel.clone();

        for _ in 0..4 {
            sel.toggle(1);
        }
        assert_eq!(sel, before);
    }

    #[test]
    fn count_matches_selection_size_within_domain() {
        let mut sel = SelectionSet::new();
        sel.toggle(1);
        sel.toggle(4);

        let summary = project(&sel, &IDS);
        assert_eq!(summary.count, sel.len());
        assert_eq!(summary.total, 4);
    }

    #[test]
    fn percentage_is_rounded_ratio() {
        let ids = [1, 2, 3];
        let mut sel = SelectionSet::new();

        sel.toggle(1);
        assert_eq!(project(&sel, &ids).percentage, 33);

        sel.toggle(2);
        assert_eq!(project(&sel, &ids).percentage, 67);

        sel.toggle(3);
        assert_eq!(project(&sel, &ids).percentage, 100);
    }

    #[test]
    fn single_check_scores_lower_potential() {
        let mut sel = SelectionSet::new();
        sel.toggle(1);

        let summary = project(&sel, &IDS);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.percentage, 25);
        assert_eq!(summary.potential(), Potential::Lower);
    }

    #[test]
    fn two_checks_score_good_potential() {
        let mut sel = SelectionSet::new();
        sel.toggle(2);
        sel.toggle(3);

        let summary = project(&sel, &IDS);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.percentage, 50);
        assert_eq!(summary.potential(), Potential::Good);
    }

    #[test]
    fn three_checks_score_high_potential() {
        let mut sel = SelectionSet::new();
        sel.toggle(1);
        sel.toggle(2);
        sel.toggle(3);

        let summary = project(&sel, &IDS);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.percentage, 75);
        assert_eq!(summary.potential(), Potential::High);
    }

    #[test]
    fn double_toggle_scores_zero() {
        let mut sel = SelectionSet::new();
        sel.toggle(2);
        sel.toggle(2);

        let summary = project(&sel, &IDS);
        assert!(sel.is_empty());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.potential(), Potential::Lower);
    }

    #[test]
    fn projection_is_idempotent() {
        let mut sel = SelectionSet::new();
        sel.toggle(1);
        sel.toggle(3);

        assert_eq!(project(&sel, &IDS), project(&sel, &IDS));
    }

    #[test]
    fn unknown_id_never_affects_the_score() {
        let mut sel = SelectionSet::new();
        let baseline = project(&sel, &IDS);

        sel.toggle(99);
        assert_eq!(project(&sel, &IDS), baseline);

        sel.toggle(99);
        assert_eq!(project(&sel, &IDS), baseline);
    }

    #[test]
    fn empty_item_list_scores_zero() {
        let mut sel = SelectionSet::new();
        sel.toggle(1);

        let summary = project(&sel, &[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percentage, 0);
    }

    #[test]
    fn full_selection_scores_one_hundred() {
        let mut sel = SelectionSet::new();
        for id in IDS {
            sel.toggle(id);
        }

        let summary = project(&sel, &IDS);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.percentage, 100);
        assert_eq!(summary.potential(), Potential::High);
    }
}
