pub mod registry;
pub mod token;
pub mod access_request;

pub use registry::*;
pub use token::*;
pub use access_request::*;

use anchor_lang::prelude::*;

/// Deserialize a program-owned account, or `None` if nothing was ever written at `info`.
pub(crate) fn load_program_account<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }

    let data: &[u8] = &info.try_borrow_data()?;
    let value = T::try_deserialize(&mut &data[..])?;

    Ok(Some(value))
}

pub(crate) fn store_program_account<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    require_keys_eq!(*info.owner, crate::ID, anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram);

    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    value.try_serialize(&mut writer)?;

    Ok(())
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;
    use crate::errors::SoulboundError;

    const CID: &str = "bafkreiflumket2dclo4sjyvmi245tkl4mrse57j5z2ovujmgb3gi67hckq";

    fn setup() -> (Registry, Pubkey, Pubkey) {
        let admin = Pubkey::new_unique();
        let viewer = Pubkey::new_unique();
        let mut registry = Registry::default();
        registry
            .initialize(admin, Some(admin), "MySoulboundToken".to_string(), "MSBT".to_string(), 1)
            .unwrap();
        (registry, admin, viewer)
    }

    #[test]
    fn mint_request_approve_resolve() {
        let (mut registry, admin, viewer) = setup();

        // mint token 1 for the viewer
        registry.ensure_administrator(&admin).unwrap();
        let mut token = SoulboundToken::default();
        token.issue(1, viewer, CID.to_string(), admin, 2).unwrap();
        assert_eq!(registry.record_mint().unwrap(), 1);

        let token_key = Pubkey::new_unique();
        let mut request = AccessRequest::default();
        assert!(request.request(token_key, token.token_id, viewer, 3));
        assert_eq!(
            request.ensure_approved().unwrap_err(),
            SoulboundError::AccessDenied.into()
        );

        registry.ensure_administrator(&admin).unwrap();
        assert!(request.approve(4).unwrap());

        request.ensure_approved().unwrap();
        let first = token.gateway_url();
        request.ensure_approved().unwrap();
        let second = token.gateway_url();

        assert!(first.contains(CID));
        assert_eq!(first, second);
    }

    #[test]
    fn viewer_cannot_approve_itself() {
        let (registry, _admin, viewer) = setup();
        let mut request = AccessRequest::default();
        request.request(Pubkey::new_unique(), 1, viewer, 3);

        let err = registry.ensure_administrator(&viewer).unwrap_err();
        assert_eq!(err, SoulboundError::Unauthorized.into());
        assert_eq!(request.status, AccessStatus::Requested);
        assert!(request.ensure_approved().is_err());
    }

    #[test]
    fn account_round_trip_preserves_discriminator_and_status() {
        let viewer = Pubkey::new_unique();
        let mut request = AccessRequest::default();
        request.request(Pubkey::new_unique(), 7, viewer, 3);
        request.approve(4).unwrap();

        let mut buffer = vec![0u8; AccessRequest::LEN];
        let mut writer: &mut [u8] = &mut buffer[..];
        request.try_serialize(&mut writer).unwrap();

        let restored = AccessRequest::try_deserialize(&mut &buffer[..]).unwrap();
        assert_eq!(restored.viewer, viewer);
        assert_eq!(restored.token_id, 7);
        assert_eq!(restored.status, AccessStatus::Approved);
    }

    #[test]
    fn token_load_distinguishes_missing_unminted_and_minted() {
        let key = Pubkey::new_unique();
        let foreign_owner = Pubkey::new_unique();

        // owned by another program
        let mut lamports = 0u64;
        let mut data = vec![0u8; SoulboundToken::LEN];
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &foreign_owner, false, 0);
        assert_eq!(
            SoulboundToken::load(&info).unwrap_err(),
            SoulboundError::TokenNotFound.into()
        );

        // allocated by this program but never issued
        let mut lamports = 0u64;
        let mut data = vec![0u8; SoulboundToken::LEN];
        let mut writer: &mut [u8] = &mut data[..];
        SoulboundToken::default().try_serialize(&mut writer).unwrap();
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &crate::ID, false, 0);
        assert_eq!(
            SoulboundToken::load(&info).unwrap_err(),
            SoulboundError::TokenNotFound.into()
        );

        // minted
        let mut token = SoulboundToken::default();
        token.issue(1, Pubkey::new_unique(), CID.to_string(), Pubkey::new_unique(), 2).unwrap();
        let mut lamports = 0u64;
        let mut data = vec![0u8; SoulboundToken::LEN];
        let mut writer: &mut [u8] = &mut data[..];
        token.try_serialize(&mut writer).unwrap();
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &crate::ID, false, 0);
        assert_eq!(SoulboundToken::load(&info).unwrap().content_pointer, CID);
    }
}
