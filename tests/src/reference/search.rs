#![cfg(test)]
use osiref_core::{Line, build_table, search_protocol};

#[test]
fn search_ignores_query_case() {
    let table = build_table();
    assert_eq!(
        search_protocol(&table, "tcp").to_string(),
        search_protocol(&table, "TCP").to_string()
    );
    assert_eq!(
        search_protocol(&table, "Wi-fi").to_string(),
        search_protocol(&table, "wI-FI").to_string()
    );
}

#[test]
fn tcp_search_output() {
    let output = search_protocol(&build_table(), "tcp").to_string();

    let expected = "
Search Results for 'TCP':
--------------------------------

Layer 4: Transport
  Protocols: TCP
  Standards:
    • RFC 793 (TCP)
    • RFC 768 (UDP)
    • ISO/IEC 8073
";
    assert_eq!(output, expected);
}

#[test]
fn inner_substrings_match() {
    let report = search_protocol(&build_table(), "ctp");

    assert_eq!(report.headings(), vec!["Layer 4: Transport"]);
    assert!(report.to_string().contains("  Protocols: SCTP\n"));
}

#[test]
fn several_protocols_match_on_one_layer() {
    let report = search_protocol(&build_table(), "pp");
    let text = report.to_string();

    assert_eq!(
        report.headings(),
        vec!["Layer 2: Data Link", "Layer 5: Session"]
    );
    assert!(text.contains("  Protocols: PPP\n"));
    assert!(text.contains("  Protocols: PPTP\n"));

    let network = search_protocol(&build_table(), "p").to_string();
    assert!(network.contains("  Protocols: IP, ICMP, OSPF, BGP, ARP, IPsec\n"));
}

#[test]
fn unknown_protocol_prints_single_notice() {
    let report = search_protocol(&build_table(), "zzz-nonexistent");

    assert!(report.headings().is_empty());
    assert_eq!(
        report.notices(),
        vec!["No protocols found matching 'zzz-nonexistent'."]
    );
    assert!(
        !report
            .lines()
            .iter()
            .any(|line| matches!(line, Line::Field { .. } | Line::Bullet { .. }))
    );
}

#[test]
fn search_spans_multiple_layers_in_order() {
    let report = search_protocol(&build_table(), "p");
    let headings = report.headings();

    let mut sorted = headings.clone();
    sorted.sort();
    assert_eq!(headings, sorted);
    assert!(headings.len() > 1);
}

#[test]
fn search_does_not_mutate_the_table() {
    let table = build_table();
    let before = table.clone();

    let first = search_protocol(&table, "ssl").to_string();
    let second = search_protocol(&table, "ssl").to_string();

    assert_eq!(first, second);
    assert_eq!(table, before);
    assert!(first.contains("  Protocols: SSL/TLS\n"));
}
