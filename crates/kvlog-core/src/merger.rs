//! Merger — combines a context field sequence with a call-site one.
//!
//! Call-site fields override same-named context fields in place (position
//! unchanged); new names are appended in call order. When the call sequence
//! itself repeats a name, each occurrence overwrites the same slot, so the
//! last occurrence wins.

use crate::types::Field;

/// Merge context-accumulated fields with call-site fields.
///
/// An empty `call_fields` returns `context_fields` untouched; results are
/// read-only downstream, so structural sharing is fine.
pub fn merge(context_fields: Vec<Field>, call_fields: Vec<Field>) -> Vec<Field> {
    if call_fields.is_empty() {
        return context_fields;
    }

    let mut merged = context_fields;
    merged.reserve(call_fields.len());

    for field in call_fields {
        let mut replaced = false;
        for slot in merged.iter_mut() {
            if slot.name == field.name {
                slot.value = field.value.clone();
                replaced = true;
            }
        }
        if !replaced {
            merged.push(field);
        }
    }

    merged
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
