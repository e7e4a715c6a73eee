//! Wallet session bootstrap.
//!
//! The current user's address is explicit context handed to the
//! aggregator's methods, never read from ambient storage. These helpers
//! establish that context from the wallet and announce changes on the
//! [`SessionBus`] so pages react to state changes instead of polling.

use debug_chain::wallet::WalletProvider;
use debug_events::{SessionBus, SessionEvent};

use debug_core::Address;

use crate::error::SessionError;

/// Connect the wallet and return the active account address.
///
/// Takes the first exposed account (the wallet's selected one), publishes
/// [`SessionEvent::WalletConnected`], and hands the address back as the
/// `current user` context for subsequent view calls.
pub async fn connect_wallet<W: WalletProvider>(
    wallet: &W,
    bus: &SessionBus,
) -> Result<Address, SessionError> {
    let accounts = wallet.request_accounts().await?;
    let address = accounts.into_iter().next().ok_or(SessionError::NoAccounts)?;

    bus.publish(SessionEvent::WalletConnected { address });
    Ok(address)
}

/// End the current session and notify subscribers.
pub fn disconnect_wallet(bus: &SessionBus) {
    bus.publish(SessionEvent::WalletDisconnected);
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use debug_chain::error::WalletError;
    use debug_chain::wallet::TxHash;

    use super::*;

    struct FakeWallet {
        accounts: Vec<Address>,
    }

    #[async_trait]
    impl WalletProvider for FakeWallet {
        async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
            Ok(self.accounts.clone())
        }

        async fn send_transaction(
            &self,
            _to: &Address,
            _data: Vec<u8>,
            _value_wei: u128,
        ) -> Result<TxHash, WalletError> {
            Err(WalletError::Rejected)
        }
    }

    fn addr(n: u8) -> Address {
        let mut bytes = [0u8; 20];
        bytes[19] = n;
        Address::from_bytes(bytes)
    }

    #[tokio::test]
    async fn connect_returns_first_account_and_publishes() {
        let wallet = FakeWallet {
            accounts: vec![addr(1), addr(2)],
        };
        let bus = SessionBus::default();
        let mut rx = bus.subscribe();

        let address = connect_wallet(&wallet, &bus).await.unwrap();
        assert_eq!(address, addr(1));
        assert_eq!(
            rx.recv().await.unwrap(),
            SessionEvent::WalletConnected { address: addr(1) }
        );
    }

    #[tokio::test]
    async fn connect_fails_when_wallet_has_no_accounts() {
        let wallet = FakeWallet { accounts: vec![] };
        let bus = SessionBus::default();

        let result = connect_wallet(&wallet, &bus).await;
        assert_matches!(result, Err(SessionError::NoAccounts));
    }

    #[tokio::test]
    async fn disconnect_publishes_the_event() {
        let bus = SessionBus::default();
        let mut rx = bus.subscribe();

        disconnect_wallet(&bus);
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::WalletDisconnected);
    }
}
