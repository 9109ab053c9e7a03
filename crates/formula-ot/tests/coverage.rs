use formula_model::CommandKind;
use formula_ot::{rule_for, TransformRule};

#[test]
fn every_kind_pair_has_a_rule() {
    let mut missing = Vec::new();
    for to_transform in CommandKind::ALL {
        for executed in CommandKind::ALL {
            if let Err(err) = rule_for(to_transform, executed) {
                missing.push(err.to_string());
            }
        }
    }
    assert!(missing.is_empty(), "missing transformations:\n{}", missing.join("\n"));
}

#[test]
fn structural_edits_reach_every_geometric_kind() {
    for to_transform in CommandKind::ALL {
        if !to_transform.capabilities().is_geometric() {
            continue;
        }
        for executed in [CommandKind::AddColumnsRows, CommandKind::RemoveColumnsRows] {
            let rule = rule_for(to_transform, executed).expect("covered");
            assert!(
                matches!(rule, TransformRule::Generic | TransformRule::GenericThenSpecific),
                "{to_transform} vs {executed} classified as {rule:?}"
            );
        }
    }
}
