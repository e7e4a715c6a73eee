//! Wallet extension capability.
//!
//! The browser wallet (account access, signing, transaction submission) is
//! an opaque external collaborator. This trait is the whole surface the
//! application consumes; cryptography, gas estimation, and nonce handling
//! stay on the wallet's side of the line.

use async_trait::async_trait;

use debug_core::Address;

use crate::error::WalletError;

/// Hash of a submitted transaction, as returned by the wallet.
pub type TxHash = String;

/// The connected wallet extension.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Prompt the user to expose their accounts.
    ///
    /// An empty list means the wallet is installed but holds no accounts.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Sign and submit a transaction, returning its hash once accepted by
    /// the node. Completion of this call does not imply the transaction
    /// has been mined.
    async fn send_transaction(
        &self,
        to: &Address,
        data: Vec<u8>,
        value_wei: u128,
    ) -> Result<TxHash, WalletError>;
}
