use super::*;

#[test]
fn test_area_order_matches_cart_layout() {
    let labels: Vec<_> = Area::ALL.iter().map(|a| a.label()).collect();
    assert_eq!(labels, vec!["P", "S", "M", "V1", "V2", "C"]);
}

#[test]
fn test_area_indices_are_positional() {
    for (i, area) in Area::ALL.iter().enumerate() {
        assert_eq!(area.index(), i);
    }
}
