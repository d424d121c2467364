//! The OSI reference data.
//!
//! A [`ReferenceTable`] is built fresh on every call to [`build_table`] and
//! exposes no mutation, so every reader sees the same seven rows.

use std::collections::BTreeMap;

use osiref_common::osi::{Layer, LayerNumber, ProtocolCategory};
use tracing::trace;

/// Read-only mapping from layer number to layer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTable {
    layers: BTreeMap<LayerNumber, Layer>,
}

impl ReferenceTable {
    pub fn get(&self, number: LayerNumber) -> Option<&Layer> {
        self.layers.get(&number)
    }

    /// Layers in ascending numeric order.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl FromIterator<Layer> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        let layers = iter
            .into_iter()
            .map(|layer| (layer.number, layer))
            .collect();
        Self { layers }
    }
}

/// Builds the seven-layer reference table.
pub fn build_table() -> ReferenceTable {
    trace!("building OSI reference table");

    [
        Layer::new(
            LayerNumber::APPLICATION,
            "Application",
            "Interface between network and application software",
            "Message",
        )
        .with_protocols(&["HTTP", "SMTP", "FTP", "DNS", "DHCP", "SNMP", "SSH"])
        .with_categories(&[ProtocolCategory::Application])
        .with_standards(&["RFC 2616 (HTTP)", "RFC 5321 (SMTP)", "RFC 959 (FTP)"])
        .with_key_technologies(&["Web browsers", "Email clients", "APIs"]),
        Layer::new(
            LayerNumber::PRESENTATION,
            "Presentation",
            "Data translation, encryption, compression",
            "Payload",
        )
        .with_protocols(&["SSL/TLS", "JPEG", "MPEG", "ASCII", "Unicode"])
        .with_categories(&[ProtocolCategory::Encryption, ProtocolCategory::DataFormat])
        .with_standards(&["RFC 8446 (TLS 1.3)", "ISO/IEC 10918 (JPEG)", "X.216"])
        .with_key_technologies(&["Encryption algorithms", "Compression formats"]),
        Layer::new(
            LayerNumber::SESSION,
            "Session",
            "Manages connections between applications",
            "Session Data",
        )
        .with_protocols(&["NetBIOS", "RPC", "PPTP", "SIP"])
        .with_categories(&[ProtocolCategory::Application])
        .with_standards(&[
            "RFC 1001/1002 (NetBIOS)",
            "RFC 5531 (RPC)",
            "RFC 2637 (PPTP)",
        ])
        .with_key_technologies(&["Session establishment", "Maintenance", "Termination"]),
        Layer::new(
            LayerNumber::TRANSPORT,
            "Transport",
            "End-to-end message delivery, error correction",
            "Segment (TCP) / Datagram (UDP)",
        )
        .with_protocols(&["TCP", "UDP", "SCTP", "DCCP"])
        .with_categories(&[ProtocolCategory::Transport])
        .with_standards(&["RFC 793 (TCP)", "RFC 768 (UDP)", "ISO/IEC 8073"])
        .with_key_technologies(&["Port numbers", "Flow control", "Congestion avoidance"]),
        Layer::new(
            LayerNumber::NETWORK,
            "Network",
            "Logical addressing and routing",
            "Packet",
        )
        .with_protocols(&["IP", "ICMP", "OSPF", "BGP", "ARP", "IPsec"])
        .with_categories(&[ProtocolCategory::Routing])
        .with_standards(&["RFC 791 (IPv4)", "RFC 8200 (IPv6)", "ISO/IEC 8208"])
        .with_key_technologies(&["Routers", "IP addressing", "Routing tables"]),
        Layer::new(
            LayerNumber::DATA_LINK,
            "Data Link",
            "Physical addressing and media access",
            "Frame",
        )
        .with_protocols(&["Ethernet", "PPP", "MAC", "VLAN", "LLC"])
        .with_categories(&[ProtocolCategory::DataFormat])
        .with_standards(&[
            "IEEE 802.3 (Ethernet)",
            "RFC 1661 (PPP)",
            "IEEE 802.1Q (VLAN)",
        ])
        .with_key_technologies(&["Switches", "MAC addresses", "Error detection"]),
        Layer::new(
            LayerNumber::PHYSICAL,
            "Physical",
            "Transmits raw bit stream over physical medium",
            "Bit",
        )
        .with_protocols(&["100BASE-TX", "1000BASE-T", "DSL", "SONET", "Wi-Fi"])
        .with_standards(&["IEEE 802.3", "ITU-T G.992.x (DSL)", "IEEE 802.11 (Wi-Fi)"])
        .with_key_technologies(&["Cables", "Connectors", "NICs", "Hubs", "Repeaters"]),
    ]
    .into_iter()
    .collect()
}
