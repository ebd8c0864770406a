use crate::domain::entities::{TaskRecord, UniquenessGuard};
use crate::domain::errors::SerializationError;
use crate::ports::outbound::RecordSerializer;

/// Default record serializer using bincode.
#[derive(Default)]
pub struct BincodeRecordSerializer;

fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    bincode::serialize(value).map_err(|e| SerializationError {
        message: e.to_string(),
    })
}

fn decode<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T, SerializationError> {
    bincode::deserialize(data).map_err(|e| SerializationError {
        message: e.to_string(),
    })
}

impl RecordSerializer for BincodeRecordSerializer {
    fn serialize_task(&self, task: &TaskRecord) -> Result<Vec<u8>, SerializationError> {
        encode(task)
    }

    fn deserialize_task(&self, data: &[u8]) -> Result<TaskRecord, SerializationError> {
        decode(data)
    }

    fn serialize_guard(&self, guard: &UniquenessGuard) -> Result<Vec<u8>, SerializationError> {
        encode(guard)
    }

    fn deserialize_guard(&self, data: &[u8]) -> Result<UniquenessGuard, SerializationError> {
        decode(data)
    }
}
