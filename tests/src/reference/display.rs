#![cfg(test)]
use osiref_common::osi::LayerNumber;
use osiref_core::{Line, build_table, show_layer};

/// Each valid layer renders its header and PDU line exactly once.
#[test]
fn every_layer_renders_header_and_pdu_once() {
    let table = build_table();

    for number in LayerNumber::all() {
        let layer = table.get(number).expect("table covers 1-7");
        let output = show_layer(&table, number.get(), false).to_string();

        let header = format!("=== Layer {}: {} ===", layer.number, layer.name);
        let pdu = format!("Protocol Data Unit (PDU): {}", layer.pdu_name);

        assert_eq!(output.matches(&header).count(), 1, "header of layer {number}");
        assert_eq!(output.matches(&pdu).count(), 1, "PDU of layer {number}");
        assert_eq!(
            output.matches(layer.pdu_name.as_str()).count(),
            1,
            "PDU name of layer {number}"
        );
    }
}

/// The session layer's PDU repeats its name, so only whole lines are unique.
#[test]
fn session_name_recurs_in_its_pdu() {
    let output = show_layer(&build_table(), 5, false).to_string();

    assert_eq!(output.matches("Session").count(), 2);
    assert_eq!(output.matches("=== Layer 5: Session ===").count(), 1);
    assert_eq!(output.matches("Protocol Data Unit (PDU): Session Data").count(), 1);
}

#[test]
fn out_of_range_layers_print_only_the_notice() {
    let table = build_table();

    for number in [0u8, 8] {
        let report = show_layer(&table, number, true);
        let output = report.to_string();

        assert_eq!(
            output,
            format!("Invalid layer number: {number}. Must be 1–7.\n")
        );
        assert!(
            !report
                .lines()
                .iter()
                .any(|line| matches!(line, Line::Bullet { .. } | Line::Section { .. }))
        );
    }
}

#[test]
fn application_layer_full_output() {
    let output = show_layer(&build_table(), 7, false).to_string();

    let expected = "
=== Layer 7: Application ===

Primary Function: Interface between network and application software

Protocol Data Unit (PDU): Message

Key Protocols:
  • HTTP — RFC 2616 (HTTP)
  • SMTP — RFC 5321 (SMTP)
  • FTP — RFC 959 (FTP)
  • DNS — No specific standard listed
  • DHCP — No specific standard listed
  • SNMP — No specific standard listed
  • SSH — No specific standard listed
";
    assert_eq!(output, expected);
}

#[test]
fn detailed_view_appends_technologies_and_standards() {
    let table = build_table();
    let brief = show_layer(&table, 2, false).to_string();
    let detailed = show_layer(&table, 2, true).to_string();

    assert!(detailed.starts_with(&brief));
    assert_eq!(
        &detailed[brief.len()..],
        "
Key Technologies:
  • Switches
  • MAC addresses
  • Error detection

Technical Standards:
  • IEEE 802.3 (Ethernet)
  • RFC 1661 (PPP)
  • IEEE 802.1Q (VLAN)
"
    );
}

#[test]
fn display_is_idempotent() {
    let table = build_table();
    for number in 0..=8u8 {
        assert_eq!(
            show_layer(&table, number, true).to_string(),
            show_layer(&table, number, true).to_string()
        );
    }
}
