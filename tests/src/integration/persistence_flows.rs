//! # Persistence and Adapter Flows
//!
//! - Config file -> engine -> nodes file -> restarted engine
//! - SAM bridge framing around a real lookup

#[cfg(test)]
mod tests {
    use std::fs;
    use std::net::UdpSocket;
    use std::time::Duration;

    use overlay_routing::{
        sam_send_header, split_sam_datagram, Address, Command, ConfigProvider, ControlMessage,
        Disposition, EngineConfig, FilePeerStore, FindOutcome, Ingress, RelaySelection,
        RoutingEngine, SamDatagramSender, TomlConfigProvider,
    };

    use crate::support::{init_tracing, key_of, layout_deriver};

    fn write_config(dir: &std::path::Path) -> std::path::PathBuf {
        let nodes = dir.join("nodes.txt");
        let config = format!(
            r#"
[engine]
relay_selection = "target"
persist_self = false

[persistence]
nodes_file = "{}"

[bootstrap]
peers = ["node-r", " node-p "]

[sam]
session = "overlay-test"
"#,
            nodes.display()
        );
        let path = dir.join("overlay.toml");
        fs::write(&path, config).unwrap();
        path
    }

    // =========================================================================
    // Restart cycle
    // =========================================================================

    #[test]
    fn test_known_peers_survive_restart() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let provider = TomlConfigProvider::load(write_config(dir.path())).unwrap();
        assert_eq!(provider.sam().session, "overlay-test");

        let mut engine = RoutingEngine::from_config(
            Address::from("node-a"),
            &provider,
            Box::new(layout_deriver()),
        );
        assert_eq!(engine.config().relay_selection, RelaySelection::Target);
        assert!(engine.known_dest(&Address::from("node-r")));
        assert!(engine.known_dest(&Address::from("node-p")));
        assert!(engine.put(Address::from("node-t")));

        let store = FilePeerStore::new(provider.nodes_file());
        assert_eq!(engine.persist(&store).unwrap(), 3);

        let written = fs::read_to_string(provider.nodes_file()).unwrap();
        assert!(!written.contains("node-a"));
        assert_eq!(written.lines().count(), 3);

        // Fresh process: no bootstrap peers, only the nodes file
        let mut restarted = RoutingEngine::new(
            Address::from("node-a"),
            provider.engine_config(),
            Box::new(layout_deriver()),
        );
        assert_eq!(restarted.restore(&store), 3);
        assert!(restarted.known_addr(&key_of("node-t")));
        assert_eq!(restarted.stats(), engine.stats());

        // Restoring twice learns nothing new
        assert_eq!(restarted.restore(&store), 0);
    }

    #[test]
    fn test_hand_edited_nodes_file_is_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodes.txt");
        fs::write(&path, "node-r\r\n\n  node- p \nnode-r\n").unwrap();

        let mut engine = RoutingEngine::new(
            Address::from("node-a"),
            EngineConfig::default(),
            Box::new(layout_deriver()),
        );
        assert_eq!(engine.restore(&FilePeerStore::new(&path)), 2);
        assert!(engine.known_dest(&Address::from("node-p")));
    }

    // =========================================================================
    // SAM bridge
    // =========================================================================

    #[test]
    fn test_lookup_through_sam_bridge() {
        init_tracing();
        let bridge = UdpSocket::bind("127.0.0.1:0").unwrap();
        bridge
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let sender =
            SamDatagramSender::bind("127.0.0.1:0", bridge.local_addr().unwrap(), "samtun")
                .unwrap();

        let mut engine = RoutingEngine::new(
            Address::from("node-a"),
            EngineConfig::target_directed(),
            Box::new(layout_deriver()),
        );
        engine.put(Address::from("node-r"));
        let target = key_of("node-t");

        let outcome = engine.find(target, &sender).unwrap();
        assert_eq!(
            outcome,
            FindOutcome::Sent {
                peer: Address::from("node-r")
            }
        );

        // What the bridge sees: session header, then the GET
        let mut buf = [0u8; 1024];
        let (n, _) = bridge.recv_from(&mut buf).unwrap();
        let header = sam_send_header("samtun", &Address::from("node-r"));
        assert!(buf[..n].starts_with(&header));
        let get = ControlMessage::parse(&buf[header.len()..n]).unwrap();
        assert_eq!(get.command, Command::Get);
        assert_eq!(get.target, target);
        assert_eq!(get.reply_to, Address::from("node-a"));

        // Reply as the bridge would deliver it
        let mut inbound = b"node-t FROM_PORT=0 TO_PORT=0\n".to_vec();
        inbound.extend_from_slice(&get.with_command(Command::Found).encode());
        let (from, payload) = split_sam_datagram(&inbound).unwrap();

        let ingress = engine.on_datagram(&from, payload, &sender);
        assert_eq!(
            ingress,
            Ingress::Control(Disposition::Resolved { key: target })
        );
        assert!(engine.known_addr(&target));
        assert!(engine.local_pending().is_empty());
    }
}
