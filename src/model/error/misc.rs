use crate::traceable;

traceable! {
    MiscError {
        #[error("Failed to serialize snapshot")]
        SerializeError => tracing::Level::ERROR,

        #[error("Failed to deserialize snapshot")]
        DeserializeError => tracing::Level::ERROR,
    }
}
