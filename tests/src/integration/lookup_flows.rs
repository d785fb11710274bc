//! # Lookup Flows
//!
//! Resolution of unknown keys across several engines:
//!
//! - Multi-hop: A asks R, R knows T and forwards, T answers A directly
//! - Fallback: the first peer rejects, A retries the next candidate
//! - Exhaustion: every candidate rejects, the lookup is abandoned
//! - Propagation: a relay runs out of candidates and passes REJECT back
//!
//! An ACCEPT from the first hop clears the requester's pending lookup, so a
//! later FOUND is reported as unwarranted; the target is still learned
//! because every datagram sender is put on ingress.

#[cfg(test)]
mod tests {
    use overlay_routing::{
        Address, Command, Disposition, EngineConfig, FindOutcome, Ingress, RouteOutcome,
    };

    use crate::support::{key_of, Delivery, Network};

    const MAX_STEPS: usize = 64;

    fn addr(name: &str) -> Address {
        Address::from(name)
    }

    /// A -> R -> T, with R knowing T directly.
    fn chain(config: EngineConfig) -> Network {
        let mut net = Network::new(config);
        net.add_node("node-a")
            .add_node("node-r")
            .add_node("node-t")
            .link("node-a", "node-r")
            .link("node-r", "node-t");
        net
    }

    // =========================================================================
    // Multi-hop resolution
    // =========================================================================

    #[test]
    fn test_multi_hop_lookup_teaches_requester_the_target() {
        let mut net = chain(EngineConfig::target_directed());
        let target = key_of("node-t");
        assert!(!net.node("node-a").known_addr(&target));

        let outcome = net.find("node-a", target).unwrap();
        assert_eq!(
            outcome,
            FindOutcome::Sent {
                peer: addr("node-r")
            }
        );

        let report = net.pump(MAX_STEPS);
        assert!(!report.truncated);

        assert_eq!(
            report.dispositions_at("node-r")[0],
            Disposition::Forwarded {
                peer: addr("node-t")
            }
        );
        assert_eq!(report.dispositions_at("node-t"), vec![Disposition::Answered]);
        assert_eq!(
            report.dispositions_at("node-a"),
            vec![
                Disposition::Acknowledged,
                Disposition::Unwarranted {
                    command: Command::Found
                },
            ]
        );

        let a = net.node("node-a");
        assert!(a.known_addr(&target));
        assert_eq!(a.get_dest(&target).unwrap(), &addr("node-t"));
        assert!(a.local_pending().is_empty());
    }

    #[test]
    fn test_found_resolves_pending_lookup_when_accepts_are_lost() {
        let mut net = chain(EngineConfig::target_directed());
        net.drop_command(Command::Accept);
        let target = key_of("node-t");

        net.find("node-a", target).unwrap();
        let report = net.pump(MAX_STEPS);

        assert_eq!(report.lost(), 2);
        assert_eq!(
            report.dispositions_at("node-a"),
            vec![Disposition::Resolved { key: target }]
        );
        let a = net.node("node-a");
        assert!(a.local_pending().is_empty());
        assert!(a.known_addr(&target));
    }

    #[test]
    fn test_route_looks_up_then_delivers() {
        let mut net = chain(EngineConfig::target_directed());
        let target = key_of("node-t");
        let wire = net.wire("node-a");

        let first = net.node_mut("node-a").route(target, b"\x60ip-1", &wire).unwrap();
        assert_eq!(
            first,
            RouteOutcome::Lookup(FindOutcome::Sent {
                peer: addr("node-r")
            })
        );
        net.pump(MAX_STEPS);

        let second = net.node_mut("node-a").route(target, b"\x60ip-2", &wire).unwrap();
        assert_eq!(second, RouteOutcome::Delivered { bytes: 5 });

        let report = net.pump(MAX_STEPS);
        assert!(matches!(
            report.deliveries.as_slice(),
            [Delivery::Received {
                ingress: Ingress::Packet,
                ..
            }]
        ));
    }

    #[test]
    fn test_direct_neighbor_answers_with_found() {
        let mut net = Network::new(EngineConfig::default());
        net.add_node("node-a")
            .add_node("node-t")
            .link("node-a", "node-t");
        let target = key_of("node-t");

        let outcome = net.find("node-a", target).unwrap();
        assert_eq!(
            outcome,
            FindOutcome::Sent {
                peer: addr("node-t")
            }
        );

        let report = net.pump(MAX_STEPS);
        assert_eq!(report.dispositions_at("node-t"), vec![Disposition::Answered]);
        assert!(net.node("node-t").known_dest(&addr("node-a")));
    }

    #[test]
    fn test_lone_node_has_nobody_to_ask() {
        let mut net = Network::new(EngineConfig::default());
        net.add_node("node-a");

        let outcome = net.find("node-a", key_of("node-t")).unwrap();
        assert_eq!(outcome, FindOutcome::NoRoute);
        assert_eq!(net.in_flight(), 0);
        assert!(net.node("node-a").local_pending().is_empty());
    }

    // =========================================================================
    // REJECT handling
    // =========================================================================

    #[test]
    fn test_rejected_lookup_falls_back_to_next_bucket() {
        let mut net = Network::new(EngineConfig::target_directed());
        net.add_node("node-a")
            .add_node("node-r")
            .add_node("node-p")
            .add_node("node-t")
            .link("node-a", "node-r")
            .link("node-a", "node-p")
            .link("node-p", "node-t");
        let target = key_of("node-t");

        net.find("node-a", target).unwrap();
        let report = net.pump(MAX_STEPS);

        assert_eq!(report.dispositions_at("node-r"), vec![Disposition::NoProgress]);
        assert_eq!(
            report.dispositions_at("node-a")[0],
            Disposition::Retried {
                peer: addr("node-p")
            }
        );
        assert_eq!(
            report.dispositions_at("node-p")[0],
            Disposition::Forwarded {
                peer: addr("node-t")
            }
        );

        let a = net.node("node-a");
        assert!(a.known_addr(&target));
        let history = a.histories().get(&target).unwrap();
        assert!(history.contains(&key_of("node-r")));
        assert!(history.contains(&key_of("node-p")));
        assert!(!history.contains(&key_of("node-a")));
    }

    #[test]
    fn test_lookup_abandoned_when_every_candidate_rejects() {
        let mut net = Network::new(EngineConfig::target_directed());
        net.add_node("node-a")
            .add_node("node-r")
            .link("node-a", "node-r");
        let target = key_of("node-t");

        net.find("node-a", target).unwrap();
        let report = net.pump(MAX_STEPS);

        assert_eq!(report.dispositions_at("node-a"), vec![Disposition::Abandoned]);
        let a = net.node("node-a");
        assert!(a.local_pending().is_empty());
        assert!(!a.known_addr(&target));
    }

    #[test]
    fn test_relay_passes_reject_back_to_requester() {
        let mut net = Network::new(EngineConfig::target_directed());
        net.add_node("node-a")
            .add_node("node-r")
            .add_node("node-q")
            .link("node-a", "node-r")
            .link("node-r", "node-q");
        let target = key_of("node-t");

        net.find("node-a", target).unwrap();
        let report = net.pump(MAX_STEPS);

        assert_eq!(
            report.dispositions_at("node-r"),
            vec![
                Disposition::Relayed {
                    peer: addr("node-q")
                },
                Disposition::RejectPropagated {
                    requester: addr("node-a")
                },
            ]
        );
        assert_eq!(report.dispositions_at("node-q"), vec![Disposition::NoProgress]);
        assert!(net.node("node-r").remote_pending().is_empty());

        // R's ACCEPT already cleared A's lookup
        assert_eq!(
            report.dispositions_at("node-a"),
            vec![
                Disposition::Acknowledged,
                Disposition::Unwarranted {
                    command: Command::Reject
                },
            ]
        );
    }

    #[test]
    fn test_propagated_reject_abandons_lookup_when_accepts_are_lost() {
        let mut net = Network::new(EngineConfig::target_directed());
        net.add_node("node-a")
            .add_node("node-r")
            .add_node("node-q")
            .link("node-a", "node-r")
            .link("node-r", "node-q")
            .drop_command(Command::Accept);

        net.find("node-a", key_of("node-t")).unwrap();
        let report = net.pump(MAX_STEPS);

        assert_eq!(report.dispositions_at("node-a"), vec![Disposition::Abandoned]);
        assert!(net.node("node-a").local_pending().is_empty());
    }

    // =========================================================================
    // Relay policy
    // =========================================================================

    #[test]
    fn test_sender_key_relay_can_bounce_between_two_nodes() {
        let mut net = Network::new(EngineConfig::default());
        net.add_node("node-a")
            .add_node("node-r")
            .link("node-a", "node-r");

        net.find("node-a", key_of("node-t")).unwrap();
        let report = net.pump(MAX_STEPS);

        // Each hop relays back to whoever asked; only the step bound stops it
        assert!(report.truncated);
        assert!(report
            .dispositions_at("node-r")
            .contains(&Disposition::Relayed {
                peer: addr("node-a")
            }));
        assert!(report
            .dispositions_at("node-a")
            .contains(&Disposition::Relayed {
                peer: addr("node-r")
            }));
    }

    #[test]
    fn test_target_relay_terminates_on_same_topology() {
        let mut net = Network::new(EngineConfig::target_directed());
        net.add_node("node-a")
            .add_node("node-r")
            .link("node-a", "node-r");

        net.find("node-a", key_of("node-t")).unwrap();
        let report = net.pump(MAX_STEPS);

        assert!(!report.truncated);
        assert_eq!(net.in_flight(), 0);
    }
}
