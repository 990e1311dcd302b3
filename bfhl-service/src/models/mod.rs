pub mod operation;
pub mod response;

pub use operation::{Operation, OperationKey};
pub use response::{BfhlResponse, HealthResponse, OperationData};
