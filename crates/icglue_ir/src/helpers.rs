//! Convenience operations layered on the attribute store.

use crate::design::Design;
use crate::ids::ObjectId;
use icglue_log::LogId;

impl Design {
    /// Applies a flat `[name, value, name, value, ...]` list as mutable
    /// attributes.
    ///
    /// An odd-length list is rejected as a whole. Otherwise every pair is
    /// tried; a failing pair is logged and skipped, and the result is `true`
    /// only if all pairs were applied. Applied pairs are not rolled back.
    pub fn set_attrs_from_list<S: AsRef<str>>(&mut self, object: ObjectId, list: &[S]) -> bool {
        if self.objects.get(object).is_none() {
            return false;
        }

        if list.len() % 2 == 1 {
            self.logger.error(
                LogId::SET_ATTRIBUTES,
                "need a value for every attribute in attribute list",
            );
            return false;
        }

        let mut result = true;
        for pair in list.chunks_exact(2) {
            let (name, value) = (pair[0].as_ref(), pair[1].as_ref());
            if !self.set_attr(object, name, value, false) {
                self.logger.error(
                    LogId::SET_ATTRIBUTES,
                    format!("could not set attribute {name}"),
                );
                result = false;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use icglue_log::Level;

    fn setup() -> (Design, ObjectId) {
        let mut design = Design::default();
        let m = design.new_module("top", false, false, None).unwrap();
        let object = design.module(m).unwrap().object;
        design.logger_mut().take_all();
        (design, object)
    }

    #[test]
    fn applies_all_pairs() {
        let (mut design, object) = setup();
        assert!(design.set_attrs_from_list(object, &["lang", "verilog", "author", "me"]));
        assert_eq!(design.attr(object, "lang"), Some("verilog"));
        assert_eq!(design.attr(object, "author"), Some("me"));
        assert!(!design.is_constant_attr(object, "lang"));
        assert!(design.logger().records().is_empty());
    }

    #[test]
    fn empty_list_succeeds() {
        let (mut design, object) = setup();
        let empty: [&str; 0] = [];
        assert!(design.set_attrs_from_list(object, &empty));
    }

    #[test]
    fn odd_list_is_rejected_outright() {
        let (mut design, object) = setup();
        assert!(!design.set_attrs_from_list(object, &["a", "1", "b"]));
        assert!(design.attr(object, "a").is_none());
        assert_eq!(design.logger().count_at_least(Level::Error), 1);
    }

    #[test]
    fn failing_pair_does_not_stop_the_rest() {
        let (mut design, object) = setup();
        let list = vec![
            "x".to_string(),
            "1".to_string(),
            "name".to_string(),
            "renamed".to_string(),
            "y".to_string(),
            "2".to_string(),
        ];
        assert!(!design.set_attrs_from_list(object, &list));
        assert_eq!(design.attr(object, "x"), Some("1"));
        assert_eq!(design.attr(object, "y"), Some("2"));
        assert_eq!(design.attr(object, "name"), Some("top"));

        let records = design.logger().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, LogId::SET_ATTRIBUTES);
        assert!(records[0].message.contains("name"));
    }

    #[test]
    fn missing_object_fails_silently() {
        let (mut design, object) = setup();
        design.free_module(Some(crate::ids::ModuleId::from_raw(0)));
        assert!(!design.set_attrs_from_list(object, &["a", "1"]));
        assert!(design.logger().records().is_empty());
    }
}
