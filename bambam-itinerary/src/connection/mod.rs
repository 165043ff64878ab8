mod connection_deriver;
mod transfer_connection;

pub use connection_deriver::ConnectionDeriver;
pub use transfer_connection::TransferConnection;
