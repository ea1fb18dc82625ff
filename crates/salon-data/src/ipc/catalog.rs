//! IPC staff and service catalogs.

use async_trait::async_trait;

use salon_core::{Service, Staff};

use super::IpcClient;
use crate::channel::Channel;
use crate::error::RepositoryError;
use crate::messages::{Action, EntityKind, Locale};
use crate::repository::{RepoResult, ServiceRepository, StaffRepository, TransportKind};

#[derive(Debug, Clone)]
pub struct IpcStaffRepository {
    ipc: IpcClient,
    locale: Locale,
}

impl IpcStaffRepository {
    pub fn new(ipc: IpcClient, locale: Locale) -> Self {
        IpcStaffRepository { ipc, locale }
    }
}

#[async_trait]
impl StaffRepository for IpcStaffRepository {
    fn transport(&self) -> TransportKind {
        TransportKind::Ipc
    }

    async fn get_all(&self) -> RepoResult<Vec<Staff>> {
        self.ipc
            .call(Channel::StaffGetAll, vec![])
            .await
            .map_err(|err| {
                RepositoryError::from_transport(self.locale, EntityKind::Staff, Action::Load, err)
            })
    }
}

#[derive(Debug, Clone)]
pub struct IpcServiceRepository {
    ipc: IpcClient,
    locale: Locale,
}

impl IpcServiceRepository {
    pub fn new(ipc: IpcClient, locale: Locale) -> Self {
        IpcServiceRepository { ipc, locale }
    }
}

#[async_trait]
impl ServiceRepository for IpcServiceRepository {
    fn transport(&self) -> TransportKind {
        TransportKind::Ipc
    }

    async fn get_all(&self) -> RepoResult<Vec<Service>> {
        self.ipc
            .call(Channel::ServiceGetAll, vec![])
            .await
            .map_err(|err| {
                RepositoryError::from_transport(self.locale, EntityKind::Service, Action::Load, err)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeError, ChannelRouter};
    use crate::error::ErrorCode;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_catalogs_over_bridge() {
        let mut router = ChannelRouter::new();
        router
            .register(Channel::StaffGetAll, |_args| async {
                Ok(json!([{"id": 1, "name": "Park", "role": "designer"}]))
            })
            .register(Channel::ServiceGetAll, |_args| async {
                Err(BridgeError::Rejected("menu table missing".to_string()))
            });
        let ipc = IpcClient::new(Arc::new(router));

        let staff = IpcStaffRepository::new(ipc.clone(), Locale::Ko)
            .get_all()
            .await
            .unwrap();
        assert_eq!(staff[0].role.as_deref(), Some("designer"));

        let err = IpcServiceRepository::new(ipc, Locale::Ko)
            .get_all()
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::LoadFailed);
        assert_eq!(err.message, "서비스 목록을 불러오는데 실패했습니다.");
    }
}
