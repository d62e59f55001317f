//! External service clients

pub mod sheet_client;

pub use sheet_client::{SheetClient, SheetError};
