/// Shared objects used across the integration tests

use std::cell::RefCell;
use std::rc::Rc;

use framesync_shared::{ByteReader, ByteWrite, RegistryHandle, Serde, SerdeErr, SharedObject};

/// Order in which objects had `commit` or `apply` called, by id
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Camera replicating a 3-float position
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Camera {
    pub position: [f32; 3],
    pub applied_bytes: Vec<usize>,
}

impl Camera {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
            applied_bytes: Vec::new(),
        }
    }
}

impl SharedObject for Camera {
    fn commit(&mut self, writer: &mut dyn ByteWrite) {
        self.position.ser(writer);
    }

    fn apply(&mut self, reader: &mut ByteReader) -> Result<(), SerdeErr> {
        let start = reader.bytes_read();
        self.position = <[f32; 3]>::de(reader)?;
        self.applied_bytes.push(reader.bytes_read() - start);
        Ok(())
    }
}

/// Counter that records every commit/apply into a shared log
pub struct LoggedCounter {
    id: String,
    pub value: u32,
    pub label: String,
    log: CallLog,
}

impl LoggedCounter {
    pub fn new(id: &str, value: u32, log: &CallLog) -> Self {
        Self {
            id: id.to_string(),
            value,
            label: format!("label-{}", id),
            log: log.clone(),
        }
    }
}

impl SharedObject for LoggedCounter {
    fn commit(&mut self, writer: &mut dyn ByteWrite) {
        self.log.borrow_mut().push(self.id.clone());
        self.value.ser(writer);
        self.label.ser(writer);
    }

    fn apply(&mut self, reader: &mut ByteReader) -> Result<(), SerdeErr> {
        self.log.borrow_mut().push(self.id.clone());
        self.value = u32::de(reader)?;
        self.label = String::de(reader)?;
        Ok(())
    }
}

/// Unregisters itself from inside its own commit
pub struct SelfUnregistering {
    id: String,
    registry: RegistryHandle,
    pub commits: u32,
}

impl SelfUnregistering {
    pub fn new(id: &str, registry: &RegistryHandle) -> Self {
        Self {
            id: id.to_string(),
            registry: registry.clone(),
            commits: 0,
        }
    }
}

impl SharedObject for SelfUnregistering {
    fn commit(&mut self, writer: &mut dyn ByteWrite) {
        self.commits += 1;
        self.commits.ser(writer);
        self.registry.unregister(&self.id);
    }

    fn apply(&mut self, reader: &mut ByteReader) -> Result<(), SerdeErr> {
        self.commits = u32::de(reader)?;
        Ok(())
    }
}

/// Registers another object from inside its commit
pub struct Spawner {
    registry: RegistryHandle,
    child_id: String,
    child: Rc<RefCell<Camera>>,
}

impl Spawner {
    pub fn new(registry: &RegistryHandle, child_id: &str, child: &Rc<RefCell<Camera>>) -> Self {
        Self {
            registry: registry.clone(),
            child_id: child_id.to_string(),
            child: child.clone(),
        }
    }
}

impl SharedObject for Spawner {
    fn commit(&mut self, _writer: &mut dyn ByteWrite) {
        self.registry.register(&self.child_id, &self.child);
    }

    fn apply(&mut self, _reader: &mut ByteReader) -> Result<(), SerdeErr> {
        Ok(())
    }
}

/// Writes `written` bytes but only reads back `read` of them
pub struct Asymmetric {
    pub written: usize,
    pub read: usize,
}

impl SharedObject for Asymmetric {
    fn commit(&mut self, writer: &mut dyn ByteWrite) {
        for i in 0..self.written {
            (i as u8).ser(writer);
        }
    }

    fn apply(&mut self, reader: &mut ByteReader) -> Result<(), SerdeErr> {
        reader.read_bytes(self.read)?;
        Ok(())
    }
}

pub fn shared<T>(object: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(object))
}
