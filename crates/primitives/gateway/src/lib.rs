//! Types shared by the Starknet gateway client: request and response bodies, gateway errors and
//! the transport encoding of compiled contract programs.

pub mod block_id;
pub mod chain_id;
pub mod contract;
pub mod error;
pub mod program;
pub mod transaction;


pub use block_id::{BlockId, BlockTag};
pub use chain_id::ChainId;
