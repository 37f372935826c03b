//! The set of all tracked users and the aggregate queries over them.

use std::collections::BTreeMap;

use crate::event_kind::EventKind;
use crate::record::{Record, RecordError, parse_record};
use crate::report::{EntryTally, Report};
use crate::types::UserId;
use crate::user::{Transition, UserState};

/// Line tally from [`Registry::apply_lines`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines that parsed into an event and were applied.
    pub applied: usize,
    /// Blank or malformed lines that produced no event.
    pub skipped: usize,
}

/// Owns every [`UserState`], keyed by user ID.
///
/// Users are created lazily on their first event, including a no-op exit, and
/// are never removed. The map is ordered, so every query comes back sorted by
/// ID without duplicates.
///
/// Not synchronized: mutation takes `&mut self`, so concurrent writers have to
/// serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    users: BTreeMap<UserId, UserState>,
}

impl Registry {
    pub const fn new() -> Self {
        Self {
            users: BTreeMap::new(),
        }
    }

    /// Builds a registry from raw register lines, skipping malformed ones.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        registry.apply_lines(lines);
        registry
    }

    /// Applies one event. An empty identifier makes this a no-op.
    pub fn apply_event(&mut self, identifier: &str, kind: EventKind) {
        if let Some(state) = self.users.get_mut(identifier) {
            let transition = state.apply_event(kind);
            trace_transition(state, kind, transition);
            return;
        }

        match UserId::new(identifier) {
            Ok(id) => self.apply(id, kind),
            Err(_) => tracing::trace!(%kind, "ignoring event without user identifier"),
        }
    }

    /// Applies an already parsed record.
    pub fn apply_record(&mut self, record: Record) {
        self.apply(record.user, record.kind);
    }

    /// Parses and applies one raw line. Malformed lines change nothing.
    pub fn apply_line(&mut self, line: &str) -> Result<(), RecordError> {
        let record = parse_record(line)?;
        self.apply_record(record);
        Ok(())
    }

    /// Applies raw lines in order and tallies what was skipped.
    pub fn apply_lines<I, S>(&mut self, lines: I) -> LoadStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = LoadStats::default();
        for (idx, line) in lines.into_iter().enumerate() {
            match self.apply_line(line.as_ref()) {
                Ok(()) => stats.applied += 1,
                Err(e) => {
                    tracing::debug!(line = idx + 1, reason = %e, "skipping register line");
                    stats.skipped += 1;
                }
            }
        }
        stats
    }

    fn apply(&mut self, id: UserId, kind: EventKind) {
        let state = self.users.entry(id).or_insert_with_key(|id| {
            tracing::debug!(user = %id, "tracking new user");
            UserState::new(id.clone())
        });
        let transition = state.apply_event(kind);
        trace_transition(state, kind, transition);
    }

    /// Users currently inside, sorted by ID.
    pub fn currently_inside(&self) -> Vec<&UserState> {
        self.users.values().filter(|u| u.is_inside()).collect()
    }

    /// Users with at least one recorded entry, sorted by ID.
    pub fn users_with_activity(&self) -> Vec<&UserState> {
        self.users.values().filter(|u| u.entry_count() > 0).collect()
    }

    /// Every user sharing the highest entry count, sorted by ID.
    ///
    /// Empty when nobody has entered yet.
    pub fn users_with_max_entries(&self) -> Vec<&UserState> {
        let max = self.max_entries();
        if max == 0 {
            return Vec::new();
        }
        self.users
            .values()
            .filter(|u| u.entry_count() == max)
            .collect()
    }

    /// Highest entry count over all users, or 0 for an empty registry.
    pub fn max_entries(&self) -> u64 {
        self.users
            .values()
            .map(UserState::entry_count)
            .max()
            .unwrap_or(0)
    }

    /// Structured snapshot of the three queries.
    pub fn report(&self) -> Report {
        Report {
            inside: ids(&self.currently_inside()),
            entries: self
                .users_with_activity()
                .into_iter()
                .map(|u| EntryTally {
                    user: u.id().clone(),
                    entries: u.entry_count(),
                })
                .collect(),
            most_entries: ids(&self.users_with_max_entries()),
        }
    }

    /// Plain-text summary of the registry.
    pub fn summary(&self) -> String {
        self.report().to_string()
    }

    pub fn get(&self, identifier: &str) -> Option<&UserState> {
        self.users.get(identifier)
    }

    /// All tracked users in ID order, including ones with no entries.
    pub fn iter(&self) -> impl Iterator<Item = &UserState> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Extend<Record> for Registry {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.apply_record(record);
        }
    }
}

impl FromIterator<Record> for Registry {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

fn ids(users: &[&UserState]) -> Vec<UserId> {
    users.iter().map(|u| u.id().clone()).collect()
}

fn trace_transition(state: &UserState, kind: EventKind, transition: Transition) {
    tracing::trace!(
        user = %state.id(),
        %kind,
        ?transition,
        entries = state.entry_count(),
        "applied event"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use EventKind::{Entry, Exit};

    fn names(users: &[&UserState]) -> Vec<String> {
        users.iter().map(|u| u.id().to_string()).collect()
    }

    #[test]
    fn empty_registry_has_empty_queries() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.currently_inside().is_empty());
        assert!(registry.users_with_activity().is_empty());
        assert!(registry.users_with_max_entries().is_empty());
        assert_eq!(registry.max_entries(), 0);
        assert_snapshot!(registry.summary(), @r"
        Usuarios actualmente dentro de la biblioteca:

        Número de entradas por usuario:

        Usuario(s) con más entradas:
        ");
    }

    #[test]
    fn mixed_scenario() {
        let registry = Registry::from_lines([
            "alice;ENTRADA",
            "bob;ENTRADA",
            "alice;SALIDA",
            "alice;ENTRADA",
            "bob;ENTRADA",
        ]);

        let alice = registry.get("alice").unwrap();
        assert_eq!(alice.entry_count(), 2);
        assert!(alice.is_inside());
        let bob = registry.get("bob").unwrap();
        assert_eq!(bob.entry_count(), 1);
        assert!(bob.is_inside());

        assert_eq!(names(&registry.currently_inside()), ["alice", "bob"]);
        assert_eq!(names(&registry.users_with_activity()), ["alice", "bob"]);
        assert_eq!(names(&registry.users_with_max_entries()), ["alice"]);

        assert_snapshot!(registry.summary(), @r"
        Usuarios actualmente dentro de la biblioteca:
        alice
        bob

        Número de entradas por usuario:
        alice -> 2
        bob -> 1

        Usuario(s) con más entradas:
        alice
        ");
    }

    #[test]
    fn exit_only_user_is_tracked_but_not_reported() {
        let registry = Registry::from_lines(["x;SALIDA"]);

        assert_eq!(registry.len(), 1);
        let x = registry.get("x").unwrap();
        assert_eq!(x.entry_count(), 0);
        assert!(!x.is_inside());

        assert!(registry.currently_inside().is_empty());
        assert!(registry.users_with_activity().is_empty());
        assert!(registry.users_with_max_entries().is_empty());
        assert_eq!(registry.summary(), Registry::new().summary());
    }

    #[test]
    fn entry_after_stray_exits_counts_normally() {
        let mut registry = Registry::new();
        registry.apply_event("x", Exit);
        registry.apply_event("x", Exit);
        registry.apply_event("x", Entry);

        let x = registry.get("x").unwrap();
        assert_eq!(x.entry_count(), 1);
        assert!(x.is_inside());
    }

    #[test]
    fn empty_identifier_is_a_no_op() {
        let mut registry = Registry::new();
        registry.apply_event("", Entry);
        assert!(registry.is_empty());
    }

    #[test]
    fn ties_for_most_entries_are_all_reported() {
        let mut registry = Registry::new();
        for id in ["carol", "ana", "bea"] {
            registry.apply_event(id, Entry);
            registry.apply_event(id, Exit);
        }
        registry.apply_event("carol", Entry);
        registry.apply_event("ana", Entry);

        assert_eq!(registry.max_entries(), 2);
        assert_eq!(names(&registry.users_with_max_entries()), ["ana", "carol"]);
        assert_eq!(names(&registry.currently_inside()), ["ana", "carol"]);
    }

    #[test]
    fn queries_sort_bytewise_regardless_of_arrival() {
        let mut registry = Registry::new();
        for id in ["zoe", "Bob", "alice", "10", "9"] {
            registry.apply_event(id, Entry);
        }
        assert_eq!(
            names(&registry.currently_inside()),
            ["10", "9", "Bob", "alice", "zoe"]
        );
        assert_eq!(
            names(&registry.users_with_max_entries()),
            ["10", "9", "Bob", "alice", "zoe"]
        );
    }

    #[test]
    fn malformed_lines_are_skipped_and_counted() {
        let mut registry = Registry::new();
        let stats = registry.apply_lines([
            "",
            "   ",
            "no separator",
            ";ENTRADA",
            "ana;ENTRY",
            "ana;ENTRADA;extra",
            " ana ; entrada ",
            "ana;Salida",
        ]);

        assert_eq!(
            stats,
            LoadStats {
                applied: 2,
                skipped: 6
            }
        );
        assert_eq!(registry.len(), 1);
        let ana = registry.get("ana").unwrap();
        assert_eq!(ana.entry_count(), 1);
        assert!(!ana.is_inside());
        assert_eq!(ana.last_event(), Some(Exit));
    }

    #[test]
    fn summary_is_idempotent() {
        let registry = Registry::from_lines(["a;ENTRADA", "b;ENTRADA", "b;SALIDA"]);
        let first = registry.summary();
        let second = registry.summary();
        assert_eq!(first, second);
    }

    #[test]
    fn report_matches_queries() {
        let registry = Registry::from_lines(["b;ENTRADA", "a;ENTRADA", "a;SALIDA", "c;SALIDA"]);
        let report = registry.report();
        let inside: Vec<&str> = report.inside.iter().map(UserId::as_str).collect();
        assert_eq!(inside, ["b"]);
        let tallies: Vec<(&str, u64)> = report
            .entries
            .iter()
            .map(|t| (t.user.as_str(), t.entries))
            .collect();
        assert_eq!(tallies, [("a", 1), ("b", 1)]);
        let top: Vec<&str> = report.most_entries.iter().map(UserId::as_str).collect();
        assert_eq!(top, ["a", "b"]);
    }

    #[test]
    fn collects_from_records() {
        let records = ["u;ENTRADA", "u;SALIDA", "u;ENTRADA"]
            .into_iter()
            .map(|line| parse_record(line).unwrap());
        let registry: Registry = records.collect();
        assert_eq!(registry.get("u").unwrap().entry_count(), 2);
        assert_eq!(registry.iter().count(), 1);
    }
}
