mod store;

pub use store::{IDocumentStore, RawDocument, WriteBatch, WriteOp};
