use super::*;
use neocart_core::{Area, Recipe};

#[test]
fn test_find_known_title() {
    let game = find("mslug").unwrap();
    assert_eq!(game.name, "Metal Slug - Super Vehicle-001");
    assert_eq!(game.recipe, Recipe::Common);
    assert!(game.parent.is_none());
}

#[test]
fn test_find_unknown_title() {
    assert!(find("doesnotexist").is_none());
}

#[test]
fn test_parents_are_catalogued_or_absent() {
    // A parent reference the adapter can't resolve would strand the build,
    // so any parent id that is also a set we support must exist here.
    for id in ids() {
        let game = find(id).unwrap();
        if let Some(parent) = game.parent {
            assert_ne!(parent, id, "{id} is its own parent");
            // Parents are never transitive.
            if let Some(parent_game) = find(parent) {
                assert!(
                    parent_game.parent.is_none(),
                    "{id} -> {parent} -> grandparent"
                );
            }
        }
    }
}

#[test]
fn test_sprite_members_pair_up() {
    for id in ids() {
        let game = find(id).unwrap();
        let c = &game.areas[Area::C.index()];
        assert_eq!(c.members.len() % 2, 0, "{id} has odd sprite member count");
    }
}

#[test]
fn test_member_hashes_well_formed() {
    for id in ids() {
        let game = find(id).unwrap();
        for spec in &game.areas {
            for m in spec.members {
                assert!(m.size > 0, "{id}: {} has zero size", m.name);
                assert_eq!(m.sha1.len(), 40, "{id}: {} bad sha1", m.name);
                assert!(
                    m.sha1.bytes().all(|b| b.is_ascii_hexdigit()),
                    "{id}: {} bad sha1",
                    m.name
                );
            }
        }
    }
}

#[test]
fn test_derived_fix_layers_declare_a_size() {
    // Titles whose S area has no members derive the fix layer from the
    // sprites and need the nominal size to do it.
    for id in ids() {
        let game = find(id).unwrap();
        if game.recipe == Recipe::Unsupported {
            continue;
        }
        let s = &game.areas[Area::S.index()];
        if s.members.is_empty() {
            assert!(s.size > 0, "{id} has no fix members and no nominal size");
        }
    }
}

#[test]
fn test_unsupported_titles_flagged() {
    for id in ["kf2k3pcb", "kof10th"] {
        assert_eq!(find(id).unwrap().recipe, Recipe::Unsupported, "{id}");
    }
}

#[test]
fn test_display_fields_fit_header() {
    for id in ids() {
        let game = find(id).unwrap();
        assert!(game.name.len() <= 33, "{id} name too long for the header");
        assert!(
            game.manufacturer.len() <= 17,
            "{id} manufacturer too long for the header"
        );
    }
}
