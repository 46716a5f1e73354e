//! Application wiring.
//!
//! [`App`] builds the whole object graph once: the shared REST transport,
//! the file-backed session storage, the three stores, and the envelope
//! adapters over them. Front-ends construct one `App` and clone the
//! pieces they need; every piece shares the same transport and the same
//! credential.

use std::sync::Arc;

use tienda_core::Identity;

use crate::adapters::{
    AuthAdapter, CartAdapter, CommentsAdapter, EvaluationsAdapter, ImagesAdapter, ProductsAdapter,
    UsersAdapter,
};
use crate::api::{ProductsApi, RestClient};
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;
use crate::storage::{FileStorage, StorageError};

/// The assembled client application.
pub struct App {
    config: ClientConfig,
    rest: RestClient,
    session: Session,
    catalog: Catalog,
    cart: Cart,
    auth: AuthAdapter,
    products: ProductsAdapter,
    cart_adapter: CartAdapter,
    comments: CommentsAdapter,
    evaluations: EvaluationsAdapter,
    images: ImagesAdapter,
    users: UsersAdapter,
}

impl App {
    /// Build the application from its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let rest = RestClient::new(&config)?;
        let storage = Arc::new(FileStorage::new(config.session_file.clone()));

        let session = Session::new(Arc::new(rest.clone()), rest.clone(), storage);
        let products_port: Arc<dyn ProductsApi> = Arc::new(rest.clone());
        let catalog = Catalog::new(Arc::clone(&products_port));
        let cart = Cart::new(Arc::new(rest.clone()), products_port);

        Ok(Self {
            auth: AuthAdapter::new(session.clone()),
            products: ProductsAdapter::new(catalog.clone()),
            cart_adapter: CartAdapter::new(cart.clone()),
            comments: CommentsAdapter::new(Arc::new(rest.clone())),
            evaluations: EvaluationsAdapter::new(Arc::new(rest.clone())),
            images: ImagesAdapter::new(Arc::new(rest.clone())),
            users: UsersAdapter::new(Arc::new(rest.clone())),
            config,
            rest,
            session,
            catalog,
            cart,
        })
    }

    /// Restore a previously persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when stored session data exists but cannot be
    /// read.
    pub fn restore(&self) -> Result<Option<Identity>, StorageError> {
        self.session.restore()
    }

    /// The loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The shared REST transport.
    #[must_use]
    pub const fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// The session store.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The product catalog store.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart store.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Authentication envelopes.
    #[must_use]
    pub const fn auth(&self) -> &AuthAdapter {
        &self.auth
    }

    /// Product envelopes.
    #[must_use]
    pub const fn products(&self) -> &ProductsAdapter {
        &self.products
    }

    /// Cart envelopes.
    #[must_use]
    pub const fn cart_adapter(&self) -> &CartAdapter {
        &self.cart_adapter
    }

    /// Comment envelopes.
    #[must_use]
    pub const fn comments(&self) -> &CommentsAdapter {
        &self.comments
    }

    /// Evaluation envelopes.
    #[must_use]
    pub const fn evaluations(&self) -> &EvaluationsAdapter {
        &self.evaluations
    }

    /// Image envelopes.
    #[must_use]
    pub const fn images(&self) -> &ImagesAdapter {
        &self.images
    }

    /// User envelopes.
    #[must_use]
    pub const fn users(&self) -> &UsersAdapter {
        &self.users
    }
}
