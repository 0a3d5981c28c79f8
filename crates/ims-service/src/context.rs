//! Wiring of every client-side service from one configuration.

use std::sync::Arc;

use tracing::info;

use ims_auth::credential::CredentialStore;
use ims_auth::rbac::{Permission, RbacEnforcer};
use ims_auth::session::SessionState;
use ims_client::{ApiClient, CategoryRemote, ProductRemote};
use ims_core::config::AppConfig;
use ims_core::result::AppResult;
use ims_core::traits::storage::LocalStorage;
use ims_entity::{Category, Product};
use ims_storage::StorageManager;

use crate::collection::{CollectionController, CollectionSettings};
use crate::login::LoginService;
use crate::navigation::Navigator;
use crate::notice::NoticeCenter;
use crate::preferences::UiPreferences;

/// Product list controller.
pub type ProductController = CollectionController<Product, ProductRemote>;
/// Category list controller.
pub type CategoryController = CollectionController<Category, CategoryRemote>;

/// Every service the client needs, sharing one storage and one session.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Local persistence.
    pub storage: Arc<dyn LocalStorage>,
    /// Authentication state.
    pub session: SessionState,
    /// REST client.
    pub client: ApiClient,
    /// Transient messages.
    pub notices: NoticeCenter,
    /// Role policies.
    pub rbac: Arc<RbacEnforcer>,
    /// Guarded navigation.
    pub navigator: Navigator,
    /// Login and logout.
    pub login: LoginService,
    /// UI preferences.
    pub preferences: UiPreferences,
    /// Product list.
    pub products: ProductController,
    /// Category list.
    pub categories: CategoryController,
}

impl AppContext {
    /// Build the context, opening local storage as configured.
    pub fn build(config: AppConfig) -> AppResult<Self> {
        let storage = StorageManager::new(&config.storage)?.provider();
        Self::with_storage(config, storage)
    }

    /// Build the context over an existing storage backend.
    pub fn with_storage(config: AppConfig, storage: Arc<dyn LocalStorage>) -> AppResult<Self> {
        let credentials = CredentialStore::new(Arc::clone(&storage), &config.credentials);
        let session = SessionState::new(credentials);
        let client = ApiClient::new(&config.api, session.clone())?;
        let notices = NoticeCenter::new(&config.notice);
        let rbac = Arc::new(RbacEnforcer::new());

        let products = CollectionController::new(
            Arc::new(ProductRemote::new(client.clone())),
            session.clone(),
            Arc::clone(&rbac),
            notices.clone(),
            CollectionSettings {
                label: "product",
                page_size: config.collection.product_page_size,
                reorder_permission: Permission::ProductReorder,
                rollback: config.collection.rollback,
                save_failed: "Failed to save new product order",
                load_failed: "Unable to get all products",
            },
        );
        let categories = CollectionController::new(
            Arc::new(CategoryRemote::new(client.clone())),
            session.clone(),
            Arc::clone(&rbac),
            notices.clone(),
            CollectionSettings {
                label: "category",
                page_size: config.collection.category_page_size,
                reorder_permission: Permission::CategoryReorder,
                rollback: config.collection.rollback,
                save_failed: "Failed to save new category order",
                load_failed: "Unable to get all categories",
            },
        );

        info!(
            api = %client.base_url(),
            storage = %config.storage.provider,
            rollback = ?config.collection.rollback,
            "Client context ready"
        );

        Ok(Self {
            navigator: Navigator::new(session.clone()),
            login: LoginService::new(client.clone(), session.clone(), notices.clone()),
            preferences: UiPreferences::new(Arc::clone(&storage)),
            config: Arc::new(config),
            storage,
            session,
            client,
            notices,
            rbac,
            products,
            categories,
        })
    }
}
