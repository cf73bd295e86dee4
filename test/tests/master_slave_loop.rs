/// End-to-end tests driving a master and its slaves through a `LocalChannel`

use framesync_master::{Master, MasterConfig, MasterError};
use framesync_shared::{FrameSender, SyncConfig, TransportError};
use framesync_slave::SlaveError;
use framesync_test::{
    call_log, connected_cluster, connected_pair, shared, Camera, LoggedCounter, SelfUnregistering,
};

#[test]
fn slave_follows_master_frame_clock() {
    let (mut master, mut slave) = connected_pair(SyncConfig::default());
    let camera = shared(Camera::new(0.0, 0.0, 0.0));
    let replica = shared(Camera::default());
    master.registry().register("camera0", &camera);
    slave.registry().register("camera0", &replica);

    for (step, expected_time) in [(0u64, 0.0), (1, 0.5), (2, 1.0)] {
        camera.borrow_mut().position = [step as f32, 0.0, 1.0];
        master.tick(0.5).unwrap();

        let report = slave.receive_frame().unwrap().expect("a frame is waiting");
        assert_eq!(report.context.frame_num, step);
        assert_eq!(report.context.dt, 0.5);
        assert_eq!(report.context.time, expected_time);
        assert_eq!(replica.borrow().position, [step as f32, 0.0, 1.0]);
    }

    assert_eq!(slave.last_frame(), Some(2));
    assert_eq!(master.sender().sent(), 3);
}

#[test]
fn receive_without_message_returns_none() {
    let (_master, mut slave) = connected_pair(SyncConfig::default());
    assert_eq!(slave.receive_frame(), Ok(None));
    assert_eq!(slave.last_frame(), None);
}

#[test]
fn every_slave_applies_the_same_frame() {
    let (mut master, mut slaves) = connected_cluster(SyncConfig::default(), 3);
    let log = call_log();
    let counter = shared(LoggedCounter::new("counter", 41, &log));
    master.registry().register("counter", &counter);

    let replicas: Vec<_> = slaves
        .iter()
        .map(|slave| {
            let replica = shared(LoggedCounter::new("counter", 0, &log));
            slave.registry().register("counter", &replica);
            replica
        })
        .collect();

    master.tick(0.016).unwrap();
    for slave in &mut slaves {
        slave.receive_frame().unwrap().expect("a frame is waiting");
    }

    for replica in &replicas {
        assert_eq!(replica.borrow().value, 41);
        assert_eq!(replica.borrow().label, "label-counter");
    }
    // one commit plus three applies
    assert_eq!(log.borrow().len(), 4);
}

#[test]
fn exit_sends_exactly_one_final_frame() {
    let (mut master, mut slave) = connected_pair(SyncConfig::default());
    let camera = shared(Camera::default());
    let replica = shared(Camera::default());
    master.registry().register("cam", &camera);
    slave.registry().register("cam", &replica);

    master.tick(0.1).unwrap();
    master.request_exit();
    assert!(master.is_exit_requested());
    assert!(!master.is_finished());

    let last = master.tick(0.1).unwrap();
    assert!(master.is_finished());
    assert_eq!(last.context.frame_num, 1);

    assert_eq!(
        master.tick(0.1),
        Err(MasterError::Finished { frame_num: 1 })
    );
    assert_eq!(master.sender().sent(), 2);

    assert!(slave.receive_frame().unwrap().is_some());
    assert!(slave.receive_frame().unwrap().is_some());
    assert_eq!(slave.receive_frame(), Ok(None));
}

#[test]
fn unavailable_transport_keeps_pending_removals() {
    let (mut master, mut slave) = connected_pair(SyncConfig::default());
    let switch = master.sender().availability();
    let registry = master.registry();
    let camera = shared(Camera::default());
    let ephemeral = shared(SelfUnregistering::new("ephemeral", &registry));
    let replica = shared(SelfUnregistering::new("ephemeral", &slave.registry()));
    registry.register("cam", &camera);
    registry.register("ephemeral", &ephemeral);
    let camera_replica = shared(Camera::default());
    slave.registry().register("cam", &camera_replica);
    slave.registry().register("ephemeral", &replica);

    registry.unregister("cam");
    switch.set_available(false);

    assert_eq!(
        master.tick(0.1),
        Err(MasterError::Transport(TransportError::Unavailable))
    );
    // nothing was serialized, so the object never ran its commit
    assert_eq!(ephemeral.borrow().commits, 0);
    assert!(registry.is_pending_removal("cam"));
    assert!(master.last_context().is_none());
    assert_eq!(slave.receive_frame(), Ok(None));

    switch.set_available(true);
    let report = master.tick(0.1).unwrap();
    assert_eq!(report.objects, 2);
    assert_eq!(report.swept, 2);
    assert!(!registry.contains("cam"));

    slave.receive_frame().unwrap().expect("a frame is waiting");
    assert_eq!(replica.borrow().commits, 1);
}

/// Always reports itself available but refuses messages while `failing`
struct RefusingSender {
    failing: bool,
    delivered: Vec<Vec<u8>>,
}

impl FrameSender for RefusingSender {
    fn is_available(&self) -> bool {
        true
    }

    fn send(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        if self.failing {
            return Err(TransportError::SendFailed {
                size: payload.len(),
                reason: "link down".to_string(),
            });
        }
        self.delivered.push(payload.to_vec());
        Ok(())
    }
}

#[test]
fn failed_send_keeps_pending_removals() {
    let sender = RefusingSender {
        failing: true,
        delivered: Vec::new(),
    };
    let mut master = Master::new(MasterConfig::default(), sender).unwrap();
    let registry = master.registry();
    let camera = shared(Camera::new(4.0, 5.0, 6.0));
    registry.register("cam", &camera);
    registry.unregister("cam");

    let result = master.tick(0.1);
    assert!(matches!(
        result,
        Err(MasterError::Transport(TransportError::SendFailed { .. }))
    ));
    assert!(registry.contains("cam"));
    assert!(registry.is_pending_removal("cam"));
    assert!(master.last_context().is_none());

    master.sender_mut().failing = false;
    let report = master.tick(0.1).unwrap();
    assert_eq!(report.objects, 1);
    assert_eq!(report.swept, 1);
    assert!(!registry.contains("cam"));
    assert_eq!(master.sender().delivered.len(), 1);

    let report = master.tick(0.1).unwrap();
    assert_eq!(report.objects, 0);
}

#[test]
fn stale_frame_is_rejected_before_apply() {
    let (mut master, mut slave) = connected_pair(SyncConfig::default());
    let camera = shared(Camera::new(1.0, 1.0, 1.0));
    let replica = shared(Camera::default());
    master.registry().register("cam", &camera);
    slave.registry().register("cam", &replica);

    master.tick(0.1).unwrap();
    camera.borrow_mut().position = [2.0, 2.0, 2.0];
    master.tick(0.1).unwrap();

    let stale = slave.receiver_mut().take_raw().expect("frame 0 was sent");
    slave.receive_frame().unwrap().expect("frame 1 was sent");
    assert_eq!(replica.borrow().position, [2.0, 2.0, 2.0]);

    assert_eq!(
        slave.apply_frame(&stale),
        Err(SlaveError::FrameOutOfOrder {
            last: 1,
            received: 0
        })
    );
    assert_eq!(replica.borrow().position, [2.0, 2.0, 2.0]);
    assert_eq!(replica.borrow().applied_bytes.len(), 1);

    // redelivered through the transport it is rejected the same way
    slave.receiver_mut().push_front_raw(stale);
    assert_eq!(
        slave.receive_frame(),
        Err(SlaveError::FrameOutOfOrder {
            last: 1,
            received: 0
        })
    );
    assert_eq!(slave.receiver().pending(), 0);
    assert_eq!(replica.borrow().applied_bytes.len(), 1);
}
