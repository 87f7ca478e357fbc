use crate::traits::Serializer;
use kanbanity_core::{KanbanError, KanbanResult};

/// Pretty-printed JSON, the on-disk snapshot format
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> KanbanResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| KanbanError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<T> {
        serde_json::from_slice(bytes).map_err(|e| KanbanError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        title: String,
        pinned: bool,
    }

    #[test]
    fn test_pretty_print() {
        let bytes = JsonSerializer
            .serialize(&Note {
                title: "groceries".to_string(),
                pinned: true,
            })
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("\"title\": \"groceries\""));
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_deserialize_error_is_serialization() {
        let result: KanbanResult<Note> = JsonSerializer.deserialize(b"{\"title\": 3");
        assert!(matches!(result, Err(KanbanError::Serialization(_))));
    }
}
