use framesync_master::{Master, MasterConfig};
use framesync_shared::{ByteWriter, FrameReport, NodeRole, SharedData, SyncConfig, UpdateContext};
use framesync_slave::{Slave, SlaveConfig};

use crate::local_channel::{LocalChannel, LocalReceiver, LocalSender};

pub type TestMaster = Master<LocalSender>;
pub type TestSlave = Slave<LocalReceiver>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Master and a single slave wired through a `LocalChannel`
pub fn connected_pair(sync: SyncConfig) -> (TestMaster, TestSlave) {
    let (master, mut slaves) = connected_cluster(sync, 1);
    let slave = slaves.remove(0);
    (master, slave)
}

/// Master and `slaves` slaves sharing one sync configuration
pub fn connected_cluster(sync: SyncConfig, slaves: usize) -> (TestMaster, Vec<TestSlave>) {
    init_logger();
    let (sender, receivers) = LocalChannel::broadcast(slaves);
    let master = Master::new(
        MasterConfig {
            sync: sync.clone(),
            ..MasterConfig::default()
        },
        sender,
    )
    .expect("valid master config");
    let slaves = receivers
        .into_iter()
        .map(|receiver| {
            Slave::new(
                SlaveConfig {
                    sync: sync.clone(),
                    ..SlaveConfig::default()
                },
                receiver,
            )
            .expect("valid slave config")
        })
        .collect();
    (master, slaves)
}

/// Serializes one frame straight from a `SharedData` context
pub fn encode_frame(shared: &mut SharedData, context: UpdateContext) -> (Vec<u8>, FrameReport) {
    assert_eq!(shared.role(), NodeRole::Master);
    shared.set_update_context(context);
    let mut writer = ByteWriter::new();
    let report = shared
        .get_instance_data(&mut writer)
        .expect("frame serializes");
    (writer.to_bytes(), report)
}
