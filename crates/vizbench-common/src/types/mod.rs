mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_serialization() {
        let p = Point::new(120, -4);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }

    #[test]
    fn pane_id_display() {
        let id = PaneId(42);
        assert_eq!(id.to_string(), "pane-42");
    }

    #[test]
    fn pane_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PaneId(1));
        set.insert(PaneId(2));
        set.insert(PaneId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn pane_id_ordering_follows_number() {
        let mut ids = vec![PaneId(3), PaneId(1), PaneId(2)];
        ids.sort();
        assert_eq!(ids, vec![PaneId(1), PaneId(2), PaneId(3)]);
    }

    #[test]
    fn history_entry_records_bundle() {
        let entry = HistoryEntry::new("editor-1", Some("Four Panel".into()), 4);
        assert_eq!(entry.container, "editor-1");
        assert_eq!(entry.bundle_name.as_deref(), Some("Four Panel"));
        assert_eq!(entry.display_count, 4);
    }
}
