use warren_core::{RoomParams, generate_room};

#[test]
fn test_determinism_identical_seeds_produce_same_fingerprint() {
    let params = RoomParams::default();
    let first = generate_room(12_345, &params).expect("valid params");
    let second = generate_room(12_345, &params).expect("valid params");

    assert_eq!(
        first.fingerprint(),
        second.fingerprint(),
        "identical runs must produce identical rooms"
    );
    assert_eq!(first.canonical_bytes(), second.canonical_bytes());
}

#[test]
fn test_determinism_different_seeds_produce_different_fingerprints() {
    let params = RoomParams::default();
    let first = generate_room(123, &params).expect("valid params");
    let second = generate_room(456, &params).expect("valid params");

    assert_ne!(
        first.fingerprint(),
        second.fingerprint(),
        "different seeds should produce different layouts"
    );
}

#[test]
fn test_parameters_change_the_layout_for_a_fixed_seed() {
    let first = generate_room(777, &RoomParams::default()).expect("valid params");
    let second = generate_room(
        777,
        &RoomParams { minimum_area: 1200, min_box_size: 4, max_box_size: 10 },
    )
    .expect("valid params");

    assert_ne!(first.canonical_bytes(), second.canonical_bytes());
}

#[test]
fn test_reference_generation_run_spans_multiple_boxes() {
    let params = RoomParams { minimum_area: 2500, min_box_size: 5, max_box_size: 15 };
    let room = generate_room(42, &params).expect("valid params");

    assert!(room.boxes.len() > 1, "2500 area cannot fit in one 15x15 box");
    assert!(room.total_area() >= 2500);
}
