/// Integration tests for per-object payload framing and the unknown-identifier policy

use framesync_shared::{
    ByteReader, ConfigError, NodeRole, PayloadFraming, SerdeErr, SharedData, SharedStateError,
    SyncConfig, UnknownReplicaPolicy, UpdateContext,
};
use framesync_slave::{Slave, SlaveConfig, SlaveError};
use framesync_test::{
    call_log, encode_frame, init_logger, shared, Asymmetric, LocalChannel, LoggedCounter,
};

fn skip_unknown() -> SyncConfig {
    SyncConfig {
        unknown_replica: UnknownReplicaPolicy::Skip,
        ..SyncConfig::default()
    }
}

fn frame() -> UpdateContext {
    UpdateContext::new(7, 0.02, 1.0)
}

#[test]
fn under_read_payload_is_reported_with_sizes() {
    init_logger();
    let mut master = SharedData::new(NodeRole::Master, SyncConfig::default()).unwrap();
    let mut slave = SharedData::new(NodeRole::Slave, SyncConfig::default()).unwrap();
    let original = shared(Asymmetric { written: 4, read: 4 });
    let replica = shared(Asymmetric { written: 4, read: 2 });
    master.registry().register("asym", &original);
    slave.registry().register("asym", &replica);

    let (bytes, _) = encode_frame(&mut master, frame());
    let result = slave.apply_instance_data(&mut ByteReader::new(&bytes));

    assert_eq!(
        result,
        Err(SharedStateError::PayloadSizeMismatch {
            id: "asym".to_string(),
            declared: 4,
            consumed: 2,
        })
    );
    assert!(slave.state().is_idle());
}

#[test]
fn over_read_stops_at_the_payload_boundary() {
    let log = call_log();
    let mut master = SharedData::new(NodeRole::Master, SyncConfig::default()).unwrap();
    let mut slave = SharedData::new(NodeRole::Slave, SyncConfig::default()).unwrap();
    let original = shared(Asymmetric { written: 4, read: 4 });
    let replica = shared(Asymmetric { written: 4, read: 6 });
    let next = shared(LoggedCounter::new("next", 5, &log));
    master.registry().register("asym", &original);
    master.registry().register("next", &next);
    slave.registry().register("asym", &replica);

    let (bytes, _) = encode_frame(&mut master, frame());
    let result = slave.apply_instance_data(&mut ByteReader::new(&bytes));

    assert_eq!(
        result,
        Err(SharedStateError::PayloadCorruption {
            id: "asym".to_string(),
            source: SerdeErr::UnexpectedEnd {
                needed: 6,
                remaining: 4,
            },
        })
    );
}

#[test]
fn unframed_under_read_corrupts_the_next_object() {
    let master_log = call_log();
    let slave_log = call_log();
    let mut master = SharedData::new(NodeRole::Master, SyncConfig::unframed()).unwrap();
    let mut slave = SharedData::new(NodeRole::Slave, SyncConfig::unframed()).unwrap();
    let original = shared(Asymmetric { written: 4, read: 4 });
    let replica = shared(Asymmetric { written: 4, read: 2 });
    let counter = shared(LoggedCounter::new("b", 1, &master_log));
    let counter_replica = shared(LoggedCounter::new("b", 0, &slave_log));
    master.registry().register("a", &original);
    master.registry().register("b", &counter);
    slave.registry().register("a", &replica);
    slave.registry().register("b", &counter_replica);

    let (bytes, _) = encode_frame(&mut master, frame());
    let result = slave.apply_instance_data(&mut ByteReader::new(&bytes));

    // the next identifier prefix is read from the middle of a's payload
    assert!(matches!(
        result,
        Err(SharedStateError::ProtocolCorruption(
            SerdeErr::LengthExceedsRemaining { .. }
        ))
    ));
    assert!(slave_log.borrow().is_empty());
}

#[test]
fn skip_policy_continues_past_unknown_ids() {
    let master_log = call_log();
    let slave_log = call_log();
    let mut master = SharedData::new(NodeRole::Master, skip_unknown()).unwrap();
    let mut slave = SharedData::new(NodeRole::Slave, skip_unknown()).unwrap();

    let mut keep = Vec::new();
    for (id, value) in [("a", 1), ("b", 2), ("c", 3)] {
        let original = shared(LoggedCounter::new(id, value, &master_log));
        master.registry().register(id, &original);
        keep.push(original);
    }
    let b = shared(LoggedCounter::new("b", 0, &slave_log));
    let c = shared(LoggedCounter::new("c", 0, &slave_log));
    slave.registry().register("b", &b);
    slave.registry().register("c", &c);

    let (bytes, _) = encode_frame(&mut master, frame());
    let report = slave
        .apply_instance_data(&mut ByteReader::new(&bytes))
        .unwrap();

    assert_eq!(report.skipped, vec!["a".to_string()]);
    assert_eq!(report.objects, 2);
    assert_eq!(*slave_log.borrow(), vec!["b", "c"]);
    assert_eq!(b.borrow().value, 2);
    assert_eq!(c.borrow().value, 3);
}

#[test]
fn abort_policy_fails_on_first_unknown_id() {
    let master_log = call_log();
    let slave_log = call_log();
    let mut master = SharedData::new(NodeRole::Master, SyncConfig::default()).unwrap();
    let mut slave = SharedData::new(NodeRole::Slave, SyncConfig::default()).unwrap();
    let a = shared(LoggedCounter::new("a", 1, &master_log));
    let b = shared(LoggedCounter::new("b", 2, &master_log));
    master.registry().register("a", &a);
    master.registry().register("b", &b);
    let b_replica = shared(LoggedCounter::new("b", 0, &slave_log));
    slave.registry().register("b", &b_replica);

    let (bytes, _) = encode_frame(&mut master, frame());
    let result = slave.apply_instance_data(&mut ByteReader::new(&bytes));

    assert_eq!(
        result,
        Err(SharedStateError::UnknownReplicaId {
            id: "a".to_string()
        })
    );
    assert!(slave_log.borrow().is_empty());
    assert_eq!(b_replica.borrow().value, 0);
}

#[test]
fn unframed_unknown_id_is_fatal() {
    let log = call_log();
    let mut master = SharedData::new(NodeRole::Master, SyncConfig::unframed()).unwrap();
    let mut slave = SharedData::new(NodeRole::Slave, SyncConfig::unframed()).unwrap();
    let a = shared(LoggedCounter::new("a", 1, &log));
    master.registry().register("a", &a);

    let (bytes, _) = encode_frame(&mut master, frame());
    let result = slave.apply_instance_data(&mut ByteReader::new(&bytes));

    assert_eq!(
        result,
        Err(SharedStateError::UnknownReplicaId {
            id: "a".to_string()
        })
    );
}

#[test]
fn slave_rejects_skip_without_framing() {
    let (_, receiver) = LocalChannel::pair();
    let config = SlaveConfig {
        sync: SyncConfig {
            framing: PayloadFraming::Unframed,
            unknown_replica: UnknownReplicaPolicy::Skip,
            reject_trailing_bytes: true,
        },
        ..SlaveConfig::default()
    };

    let result = Slave::new(config, receiver);
    assert!(matches!(
        result,
        Err(SlaveError::Config(ConfigError::SkipRequiresFraming))
    ));
}
