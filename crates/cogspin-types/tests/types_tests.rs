//! Integration tests for cogspin-types.

use cogspin_types::constants;
use cogspin_types::{BodyId, CogspinError};

#[test]
fn body_ids_index_into_arrays() {
    let per_body = ["left", "right"];
    assert_eq!(per_body[BodyId::Left.index()], "left");
    assert_eq!(per_body[BodyId::Right.index()], "right");
    assert_eq!(BodyId::ALL.len(), per_body.len());
}

#[test]
fn body_id_opposite_is_involution() {
    for id in BodyId::ALL {
        assert_eq!(id.opposite().opposite(), id);
        assert_ne!(id.opposite(), id);
    }
}

#[test]
fn constants_are_sane() {
    assert!(constants::SOFTNESS > 0.0 && constants::SOFTNESS <= 1.0);
    assert!(constants::DAMPING_FACTOR > 0.0 && constants::DAMPING_FACTOR <= 1.0);
    assert!(constants::MAX_ANGULAR_SPEED > 0.0);
    assert!(constants::APPROACH_STEP > 0.0);
    assert!(constants::CONTACT_EPSILON < constants::APPROACH_STEP);
}

#[test]
fn error_display_includes_detail() {
    let err = CogspinError::Backend("upload failed".into());
    assert!(err.to_string().contains("upload failed"));

    let err = CogspinError::InvalidConfig("dt must be positive".into());
    assert!(err.to_string().contains("dt"));
}
