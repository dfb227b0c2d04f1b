//! End-to-end flow: diff an old/updated pair per field, bind the patches
//! to a live record, and apply the whole set.

use fieldpatch::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Profile {
    name: String,
    tagline: Option<String>,
    age: u32,
}

#[test]
fn diffed_record_applies_as_a_set() {
    let old = Profile {
        name: "original".to_string(),
        tagline: Some("here first".to_string()),
        age: 30,
    };
    let updated = Profile {
        name: "changed".to_string(),
        tagline: None,
        age: 30,
    };

    let name_patch = FieldPatch::diff(old.name.clone(), updated.name.clone());
    let tagline_patch = FieldPatch::diff_option(old.tagline.clone(), updated.tagline.clone());
    let age_patch = FieldPatch::diff(old.age, updated.age);

    assert_eq!(name_patch.action(), PatchAction::Replace);
    assert_eq!(tagline_patch.action(), PatchAction::Remove);
    assert_eq!(age_patch.action(), PatchAction::Noop);

    let mut record = old.clone();
    {
        let mut set = PatchSet::new();
        set.insert(
            "name".to_string(),
            ValuePatcher::new(&mut record.name, name_patch),
        )
        .unwrap();
        set.insert(
            "tagline".to_string(),
            OptionalPatcher::new(&mut record.tagline, tagline_patch),
        )
        .unwrap();
        set.insert(
            "age".to_string(),
            ValuePatcher::new(&mut record.age, age_patch),
        )
        .unwrap();

        assert!(!set.is_all_noop());
        set.apply_all().expect("whole set should apply");
        assert!(set.is_all_noop());

        // Applying again is memoized per entry.
        set.apply_all().expect("second pass should be a no-op");
    }

    assert_eq!(record, updated);
}

#[test]
fn applying_against_an_already_updated_record_changes_nothing() {
    let old = "original".to_string();
    let updated = "changed".to_string();

    let patch = FieldPatch::diff(old, updated.clone());
    assert!(!patch.is_noop(&"original".to_string()));
    assert!(patch.is_noop(&updated));

    let mut target = updated.clone();
    let mut patcher = ValuePatcher::new(&mut target, patch);
    assert!(patcher.is_noop());
    patcher.apply().expect("no-op replace should succeed");
    drop(patcher);

    assert_eq!(target, updated);
}
