//! [`Repository`] 的 BSCW 实现。

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::internal::bscw::structs::{FetchedFile, ObjectId, PathCrumb};
use crate::internal::config::functions::plugin_options::{get_option, set_options};
use crate::internal::config::structs::repository_config::RepositoryConfig;
use crate::internal::errors::bscw_error::BscwError;
use crate::internal::errors::config_error::ConfigError;
use crate::internal::repository::structs::bscw_repository::{
    BscwRepository, LABEL_ROOT, LOGOUT_HINT,
};
use crate::internal::repository::structs::capabilities::{FileTypes, ReturnTypes};
use crate::internal::repository::structs::folder_listing::{
    FolderListing, ListItem, ListingResponse,
};
use crate::internal::repository::structs::login_form::LoginForm;
use crate::internal::repository::traits::repository::Repository;

/// 宿主展示路径转面包屑：`/a/b` → `[a: /a, b: /a/b]`，根路径不产生面包屑
fn trail_crumbs(path: &str) -> Vec<PathCrumb> {
    let path = path.trim();
    if path.is_empty() || path == "/" {
        return Vec::new();
    }

    if !path.contains('/') {
        return vec![PathCrumb::new(path, path)];
    }

    let mut trail = String::new();
    path.split('/')
        .filter(|part| !part.is_empty())
        .map(|part| {
            trail.push('/');
            trail.push_str(part);
            PathCrumb::new(part, trail.as_str())
        })
        .collect()
}

#[async_trait]
impl Repository for BscwRepository {
    async fn get_listing(
        &mut self,
        object_id: &str,
        path: &str,
    ) -> Result<ListingResponse, BscwError> {
        if !self.logged {
            return Ok(ListingResponse::Login(self.print_login()));
        }

        let mut listing = FolderListing {
            dynload: true,
            manage: self.client.server_url().to_string(),
            nosearch: true,
            message: LOGOUT_HINT.to_string(),
            path: vec![PathCrumb::new(LABEL_ROOT, "/")],
            list: Vec::new(),
        };

        let entries = match self.client.get_listing(&mut self.session, object_id, 1).await {
            Ok(entries) => entries,
            Err(BscwError::AuthNotSet) => {
                return Ok(ListingResponse::Login(self.logout()));
            }
            Err(e) => return Err(e),
        };

        if entries.is_empty() {
            self.persist_session();
            return Ok(ListingResponse::Listing(listing));
        }

        listing.path = self
            .client
            .generate_path_array(&mut self.session, object_id)
            .await?;
        listing.path.extend(trail_crumbs(path));

        let (folders, files): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|entry| entry.is_dir);

        listing.list = folders
            .into_iter()
            .map(ListItem::from)
            .chain(
                files
                    .into_iter()
                    .filter(|entry| self.options.accepts(&entry.name))
                    .map(ListItem::from),
            )
            .collect();

        self.persist_session();

        Ok(ListingResponse::Listing(listing))
    }

    async fn get_file(
        &mut self,
        object_id: &str,
        save_as: &Path,
    ) -> Result<FetchedFile, BscwError> {
        if !self.logged {
            return Err(BscwError::AuthNotSet);
        }

        self.client
            .get_file(&self.session, &ObjectId::new(object_id), save_as)
            .await
    }

    fn print_login(&self) -> LoginForm {
        self.build_login_form()
    }

    fn logout(&mut self) -> LoginForm {
        self.clear_session();
        info!(repository_id = self.repository_id, "BSCW 已登出");
        self.print_login()
    }

    fn check_login(&self) -> bool {
        self.session_store
            .load(&self.session_key)
            .is_some_and(|session| session.credential().is_some())
    }

    fn set_option(
        &mut self,
        options: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, String>, ConfigError> {
        let rest = set_options(self.config_store.as_ref(), options)?;
        self.config = RepositoryConfig::from_store(self.config_store.as_ref());
        Ok(rest)
    }

    fn get_option(&self, name: &str) -> Option<String> {
        get_option(self.config_store.as_ref(), name)
    }

    fn supported_filetypes(&self) -> FileTypes {
        FileTypes::All
    }

    fn supported_returntypes(&self) -> ReturnTypes {
        ReturnTypes {
            internal: true,
            external: true,
        }
    }

    fn get_file_source_info(&self, source: &str) -> String {
        format!("BSCW ({}): {}", self.options.host_user.full_name, source)
    }

    fn get_link(&self, url: &str) -> String {
        url.to_string()
    }
}
