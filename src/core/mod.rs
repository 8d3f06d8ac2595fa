pub mod adapter;
pub mod connection;
pub mod rpc;
