//! Domain-specific assertion macros for kvlog harnesses.
//!
//! These add failure messages that say *which* normalization/merge invariant
//! was violated, instead of dumping two field vectors side by side.

/// Assert that a field sequence equals an expected `(name, value)` list, in
/// order.
///
/// ```rust
/// assert_fields!(fields, [("a", "1"), ("b", 2)]);
/// ```
#[macro_export]
macro_rules! assert_fields {
    ($fields:expr, [$(($name:expr, $value:expr)),* $(,)?]) => {{
        let actual: &[kvlog::Field] = &$fields;
        let expected: Vec<kvlog::Field> = vec![$(kvlog::Field::new($name, $value)),*];
        if actual != expected.as_slice() {
            panic!(
                "assert_fields! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            );
        }
    }};
}

/// Assert that no two fields in a sequence share a name.
#[macro_export]
macro_rules! assert_no_duplicate_names {
    ($fields:expr) => {{
        let fields: &[kvlog::Field] = &$fields;
        let mut seen = std::collections::HashSet::new();
        for field in fields {
            if !seen.insert(field.name.as_str()) {
                panic!(
                    "assert_no_duplicate_names! failed: duplicate name {:?} in {:?}",
                    field.name,
                    fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>()
                );
            }
        }
    }};
}

/// Assert that a capture sink holds exactly one record with the given level
/// and message, and hand that record to a closure for further checks.
///
/// ```rust
/// assert_emitted!(sink, Level::Error, "Ignored key without a value.", |record| {
///     assert_eq!(record.fields.len(), 1);
/// });
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($sink:expr, $level:expr, $message:expr) => {
        assert_emitted!($sink, $level, $message, |_record| {});
    };
    ($sink:expr, $level:expr, $message:expr, $check:expr) => {{
        let level: kvlog::Level = $level;
        let message: &str = $message;
        let matching: Vec<kvlog::Record> = $sink
            .records()
            .into_iter()
            .filter(|r| r.level == level && r.message == message)
            .collect();
        match matching.as_slice() {
            [record] => {
                let check: &dyn Fn(&kvlog::Record) = &$check;
                check(record);
            }
            [] => panic!(
                "assert_emitted! failed: no {:?} record with message {:?}.\n  Captured: {:?}",
                level,
                message,
                $sink
                    .records()
                    .iter()
                    .map(|r| (r.level, r.message.clone()))
                    .collect::<Vec<_>>()
            ),
            many => panic!(
                "assert_emitted! failed: {} records matched {:?} / {:?}, expected exactly one",
                many.len(),
                level,
                message
            ),
        }
    }};
}
