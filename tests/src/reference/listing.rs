#![cfg(test)]
use osiref_common::osi::ProtocolCategory;
use osiref_core::{build_table, list_layers, select_layers};

#[test]
fn unfiltered_listing_has_seven_ascending_entries() {
    let report = list_layers(&build_table(), None);

    assert_eq!(
        report.headings(),
        vec![
            "Layer 1: Physical",
            "Layer 2: Data Link",
            "Layer 3: Network",
            "Layer 4: Transport",
            "Layer 5: Session",
            "Layer 6: Presentation",
            "Layer 7: Application",
        ]
    );
    assert!(report.notices().is_empty());
}

#[test]
fn transport_filter_keeps_only_layer_four() {
    let report = list_layers(&build_table(), Some(ProtocolCategory::Transport));
    assert_eq!(report.headings(), vec!["Layer 4: Transport"]);
}

#[test]
fn every_filter_matches_the_category_tags() {
    let table = build_table();

    for category in ProtocolCategory::ALL {
        let expected: Vec<String> = table
            .layers()
            .filter(|layer| layer.categories.contains(&category))
            .map(|layer| format!("Layer {}: {}", layer.number, layer.name))
            .collect();

        let report = list_layers(&table, Some(category));
        assert_eq!(report.headings(), expected, "category {category}");
        assert!(!expected.is_empty(), "category {category} has no layers");
    }

    let application: Vec<u8> = select_layers(&table, Some(ProtocolCategory::Application))
        .map(|layer| layer.number.get())
        .collect();
    assert_eq!(application, vec![5, 7]);
}

#[test]
fn listing_entry_format() {
    let output = list_layers(&build_table(), Some(ProtocolCategory::Routing)).to_string();

    let expected = "
OSI Model Layers (Routing):
----------------

Layer 3: Network
  Function: Logical addressing and routing
  Key Protocols: IP, ICMP, OSPF...
";
    assert_eq!(output, expected);
}

#[test]
fn physical_layer_never_matches_a_filter() {
    let table = build_table();
    for category in ProtocolCategory::ALL {
        let report = list_layers(&table, Some(category));
        assert!(!report.headings().contains(&"Layer 1: Physical"));
    }
}

#[test]
fn listing_is_idempotent() {
    let table = build_table();
    assert_eq!(
        list_layers(&table, None).to_string(),
        list_layers(&table, None).to_string()
    );
}
