//! Product list controller

use std::{fmt, sync::Arc, time::Duration};

use consign::{
    contact::{ContactInfo, Organization},
    editor::{EditorConfig, EditorMode, ProductEditor},
    export::{ExportError, ReportContent},
    products::{Product, ProductDetails, ProductUuid},
    search::{FilteredView, ProductFilter, ShippingFilter},
};
use tracing::{error, info};

use crate::{
    domain::{owners::OwnerUuid, products::ProductsService},
    session::Session,
};

use super::{
    DashboardError, ListEvent, ListObserver, Modal, Operation, UiFlags, ViewMode, with_timeout,
};

/// Controller settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Limit on every store call
    pub store_timeout: Duration,

    /// Settings for editors opened from the list
    pub editor: EditorConfig,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_secs(10),
            editor: EditorConfig::default(),
        }
    }
}

/// The session's authoritative record set, newest first, plus the search,
/// filter and presentation state layered over it.
///
/// Mutations go to the store first and touch local state only on success.
/// New records are placed first, edits keep their position and removals
/// never reorder the remaining records.
pub struct ProductList {
    service: Arc<dyn ProductsService>,
    session: Session,
    config: ListConfig,
    products: Vec<Product>,
    filter: ProductFilter,
    view_mode: ViewMode,
    ui: UiFlags,
    editor: Option<ProductEditor>,
    observers: Vec<Box<dyn ListObserver>>,
}

impl fmt::Debug for ProductList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductList")
            .field("service", &"<ProductsService>")
            .field("session", &self.session)
            .field("config", &self.config)
            .field("products", &format!("[{} products]", self.products.len()))
            .field("filter", &self.filter)
            .field("view_mode", &self.view_mode)
            .field("ui", &self.ui)
            .field("editor", &self.editor)
            .field("observers", &format!("[{} observers]", self.observers.len()))
            .finish()
    }
}

impl ProductList {
    /// Empty list for `session`; call [`ProductList::load`] to fill it.
    #[must_use]
    pub fn new(service: Arc<dyn ProductsService>, session: Session, config: ListConfig) -> Self {
        Self {
            service,
            session,
            config,
            products: Vec::new(),
            filter: ProductFilter::default(),
            view_mode: ViewMode::default(),
            ui: UiFlags::default(),
            editor: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer for every subsequent state change.
    pub fn observe(&mut self, observer: Box<dyn ListObserver>) {
        self.observers.push(observer);
    }

    /// Full record set, newest first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.filter.query
    }

    #[must_use]
    pub fn shipping_filter(&self) -> Option<ShippingFilter> {
        self.filter.shipping
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn ui(&self) -> &UiFlags {
        &self.ui
    }

    /// Records matching the current search text and shipping filter,
    /// recomputed from the full set on every call.
    #[must_use]
    pub fn filtered_view(&self) -> FilteredView<'_> {
        self.filter.apply(&self.products)
    }

    /// Replace the full set with the store's current records.
    ///
    /// On failure the previous set is kept and the error message is set.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in or the store call fails.
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        let owner = self.owner()?;

        self.set_loading(true);

        let result = with_timeout(
            self.config.store_timeout,
            self.service.list_products(owner),
        )
        .await;

        self.set_loading(false);

        match result {
            Ok(products) => {
                self.products = products;
                self.ui.error = None;

                self.emit(&ListEvent::Loaded {
                    count: self.products.len(),
                });

                Ok(())
            }
            Err(error) => Err(self.fail(Operation::Load, error)),
        }
    }

    /// Create a record and place it first.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in or the store call fails;
    /// local records are unchanged.
    pub async fn add(&mut self, details: ProductDetails) -> Result<ProductUuid, DashboardError> {
        let owner = self.owner()?;

        self.set_loading(true);

        let result = with_timeout(
            self.config.store_timeout,
            self.service.create_product(owner, details),
        )
        .await;

        self.set_loading(false);

        match result {
            Ok(product) => {
                let uuid = product.uuid;

                info!(product = %uuid, "product added");

                self.products.insert(0, product);
                self.ui.error = None;
                self.emit(&ListEvent::Added(uuid));

                Ok(uuid)
            }
            Err(error) => Err(self.fail(Operation::Add, error)),
        }
    }

    /// Replace every field of a record, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns an error when the record is not in the list, no user is
    /// signed in, or the store call fails; local records are unchanged.
    pub async fn edit(
        &mut self,
        product: ProductUuid,
        details: ProductDetails,
    ) -> Result<(), DashboardError> {
        self.position(product)?;

        let owner = self.owner()?;

        self.set_loading(true);

        let result = with_timeout(
            self.config.store_timeout,
            self.service.update_product(owner, product, details),
        )
        .await;

        self.set_loading(false);

        match result {
            Ok(updated) => {
                if let Some(slot) = self
                    .products
                    .iter_mut()
                    .find(|existing| existing.uuid == product)
                {
                    *slot = Product::new(product, updated.details);
                }

                info!(%product, "product updated");

                self.ui.error = None;
                self.emit(&ListEvent::Updated(product));

                Ok(())
            }
            Err(error) => Err(self.fail(Operation::Edit, error)),
        }
    }

    /// Delete a record without asking for confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error when the record is not in the list, no user is
    /// signed in, or the store call fails; the record then stays in place.
    pub async fn remove(&mut self, product: ProductUuid) -> Result<(), DashboardError> {
        self.position(product)?;

        let owner = self.owner()?;

        self.set_loading(true);

        let result = with_timeout(
            self.config.store_timeout,
            self.service.delete_product(owner, product),
        )
        .await;

        self.set_loading(false);

        match result {
            Ok(()) => {
                self.products.retain(|existing| existing.uuid != product);

                info!(%product, "product removed");

                self.ui.error = None;
                self.emit(&ListEvent::Removed(product));

                Ok(())
            }
            Err(error) => Err(self.fail(Operation::Remove, error)),
        }
    }

    /// Ask for confirmation before deleting `product`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnknownProduct`] if it is not in the list.
    pub fn request_remove(&mut self, product: ProductUuid) -> Result<(), DashboardError> {
        self.position(product)?;
        self.set_modal(Modal::ConfirmDelete(product));

        Ok(())
    }

    /// Delete the record awaiting confirmation and close the confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NothingToConfirm`] if no deletion was
    /// requested, or the error from [`ProductList::remove`].
    pub async fn confirm_remove(&mut self) -> Result<(), DashboardError> {
        let Modal::ConfirmDelete(product) = self.ui.modal else {
            return Err(DashboardError::NothingToConfirm);
        };

        let result = self.remove(product).await;

        self.set_modal(Modal::Closed);

        result
    }

    /// Close whatever modal is open, discarding any draft or pending deletion.
    pub fn cancel(&mut self) {
        self.editor = None;
        self.set_modal(Modal::Closed);
    }

    /// Show the details of one record.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnknownProduct`] if it is not in the list.
    pub fn open_details(&mut self, product: ProductUuid) -> Result<&Product, DashboardError> {
        let idx = self.position(product)?;

        self.set_modal(Modal::Details(product));

        self.products
            .get(idx)
            .ok_or(DashboardError::UnknownProduct(product))
    }

    /// Record shown in the details modal, if open.
    #[must_use]
    pub fn details(&self) -> Option<&Product> {
        match self.ui.modal {
            Modal::Details(product) => self.find(product),
            _ => None,
        }
    }

    /// Show the contact settings panel.
    pub fn open_settings(&mut self) {
        self.set_modal(Modal::Settings);
    }

    /// Open an empty editor.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NoSession`] when no user is signed in.
    pub fn open_create_editor(&mut self) -> Result<&mut ProductEditor, DashboardError> {
        self.owner()?;

        self.open_editor(ProductEditor::create(self.config.editor))
    }

    /// Open an editor pre-filled from `product`.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in or the record is not in
    /// the list.
    pub fn open_edit_editor(
        &mut self,
        product: ProductUuid,
    ) -> Result<&mut ProductEditor, DashboardError> {
        self.owner()?;

        let record = self
            .find(product)
            .ok_or(DashboardError::UnknownProduct(product))?;

        let editor = ProductEditor::modify(record, self.config.editor);

        self.open_editor(editor)
    }

    /// The open editor, if any.
    pub fn editor_mut(&mut self) -> Option<&mut ProductEditor> {
        self.editor.as_mut()
    }

    /// Commit the open editor through [`ProductList::add`] or
    /// [`ProductList::edit`].
    ///
    /// On success the editor closes. On failure it is re-enabled with every
    /// value kept and stays open.
    ///
    /// # Errors
    ///
    /// Returns an error when no editor is open, the draft is invalid or
    /// pending, or the commit fails.
    pub async fn submit_editor(&mut self) -> Result<ProductUuid, DashboardError> {
        let mut editor = self.editor.take().ok_or(DashboardError::NoEditor)?;

        let payload = match editor.begin_submit() {
            Ok(payload) => payload,
            Err(error) => {
                self.editor = Some(editor);

                return Err(error.into());
            }
        };

        let result = match editor.mode() {
            EditorMode::Create => self.add(payload).await,
            EditorMode::Modify(product) => self.edit(product, payload).await.map(|()| product),
        };

        match result {
            Ok(product) => {
                editor.complete();
                self.set_modal(Modal::Closed);

                Ok(product)
            }
            Err(error) => {
                editor.reject(&error);
                self.editor = Some(editor);

                Err(error)
            }
        }
    }

    /// Change the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();

        let event = ListEvent::QueryChanged(self.filter.query.clone());
        self.emit(&event);
    }

    /// Select a shipping filter; selecting the active one clears it.
    pub fn toggle_shipping_filter(&mut self, selected: ShippingFilter) {
        self.set_shipping_filter(ShippingFilter::toggle(self.filter.shipping, selected));
    }

    /// Replace the shipping filter.
    pub fn set_shipping_filter(&mut self, shipping: Option<ShippingFilter>) {
        self.filter.shipping = shipping;
        self.emit(&ListEvent::ShippingFilterChanged(shipping));
    }

    /// Switch between cards and table.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.emit(&ListEvent::ViewModeChanged(mode));
    }

    /// Report over the current filtered view.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Empty`] when the view is empty.
    pub fn report(
        &self,
        organization: &Organization,
        contact: &ContactInfo,
    ) -> Result<ReportContent, ExportError> {
        let products: Vec<Product> = self.filtered_view().cloned().collect();

        ReportContent::build(organization, contact, &products)
    }

    /// Report for the record shown in the details modal.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NoDetails`] when the details modal is not open.
    pub fn details_report(
        &self,
        organization: &Organization,
        contact: &ContactInfo,
    ) -> Result<ReportContent, DashboardError> {
        let product = self.details().ok_or(DashboardError::NoDetails)?;

        Ok(ReportContent::single(organization, contact, product)?)
    }

    fn owner(&self) -> Result<OwnerUuid, DashboardError> {
        self.session.current_user().ok_or(DashboardError::NoSession)
    }

    fn find(&self, product: ProductUuid) -> Option<&Product> {
        self.products.iter().find(|existing| existing.uuid == product)
    }

    fn position(&self, product: ProductUuid) -> Result<usize, DashboardError> {
        self.products
            .iter()
            .position(|existing| existing.uuid == product)
            .ok_or(DashboardError::UnknownProduct(product))
    }

    fn open_editor(&mut self, editor: ProductEditor) -> Result<&mut ProductEditor, DashboardError> {
        self.set_modal(Modal::Editor);

        Ok(self.editor.insert(editor))
    }

    fn fail(&mut self, operation: Operation, error: DashboardError) -> DashboardError {
        error!(%operation, error = %error, "product list operation failed");

        let message = operation.failure_message().to_string();

        self.ui.error = Some(message.clone());
        self.emit(&ListEvent::Failed { operation, message });

        error
    }

    fn set_loading(&mut self, loading: bool) {
        self.ui.loading = loading;
        self.emit(&ListEvent::LoadingChanged(loading));
    }

    fn set_modal(&mut self, modal: Modal) {
        self.ui.modal = modal;
        self.emit(&ListEvent::ModalChanged(modal));
    }

    fn emit(&mut self, event: &ListEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use consign::{
        currency::Currency,
        prices::{Quantity, UnitPrice},
        shipping::ShippingMode,
    };
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::products::{MockProductsService, ProductsServiceError};

    use super::*;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    fn details(name: &str, customer: &str, phone: &str, mode: ShippingMode) -> ProductDetails {
        ProductDetails {
            image: "https://example.com/item.png".to_string(),
            name: name.to_string(),
            quantity: Quantity::clamped(2),
            price: UnitPrice::clamped(Decimal::new(10, 0)),
            currency: Currency::Usd,
            customer_name: customer.to_string(),
            phone_number: phone.to_string(),
            shipping_mode: mode,
            shipping_duration: "7-10 days".to_string(),
        }
    }

    fn widget() -> Product {
        Product::new(
            ProductUuid::new(),
            details("Widget", "Alice", "555", ShippingMode::Air),
        )
    }

    fn fixture() -> Vec<Product> {
        vec![
            widget(),
            Product::new(
                ProductUuid::new(),
                details("Rice", "Bob", "123", ShippingMode::Sea),
            ),
            Product::new(
                ProductUuid::new(),
                details("Tea", "Carla", "777", ShippingMode::Air),
            ),
        ]
    }

    fn signed_in() -> Session {
        Session::signed_in(OwnerUuid::new())
    }

    async fn loaded(mut mock: MockProductsService, products: Vec<Product>) -> ProductList {
        mock.expect_list_products()
            .times(1)
            .returning(move |_| Ok(products.clone()));

        let mut list = ProductList::new(Arc::new(mock), signed_in(), ListConfig::default());

        // The mock cannot fail here.
        _ = list.load().await;

        list
    }

    #[derive(Clone, Default)]
    struct RecordingObserver {
        events: Arc<Mutex<Vec<ListEvent>>>,
    }

    impl RecordingObserver {
        fn events(&self) -> Vec<ListEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl ListObserver for RecordingObserver {
        fn on_event(&mut self, event: &ListEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event.clone());
            }
        }
    }

    #[tokio::test]
    async fn load_replaces_set_and_is_idempotent() -> TestResult {
        let products = fixture();
        let expected = products.clone();

        let mut mock = MockProductsService::new();

        mock.expect_list_products()
            .times(2)
            .returning(move |_| Ok(products.clone()));

        let mut list = ProductList::new(Arc::new(mock), signed_in(), ListConfig::default());

        list.load().await?;
        let first: Vec<_> = list.filtered_view().cloned().collect();

        list.load().await?;
        let second: Vec<_> = list.filtered_view().cloned().collect();

        assert_eq!(list.products(), expected.as_slice());
        assert_eq!(first, second);
        assert!(!list.ui().loading);

        Ok(())
    }

    #[tokio::test]
    async fn load_failure_keeps_previous_set() -> TestResult {
        let products = fixture();
        let expected = products.clone();

        let mut mock = MockProductsService::new();
        let mut calls = 0;

        mock.expect_list_products().times(2).returning(move |_| {
            calls += 1;

            if calls == 1 {
                Ok(products.clone())
            } else {
                Err(ProductsServiceError::InvalidData)
            }
        });

        let mut list = ProductList::new(Arc::new(mock), signed_in(), ListConfig::default());

        list.load().await?;

        let result = list.load().await;

        assert!(
            matches!(
                result,
                Err(DashboardError::Products(ProductsServiceError::InvalidData))
            ),
            "expected store error, got {result:?}"
        );
        assert_eq!(list.products(), expected.as_slice());
        assert_eq!(
            list.ui().error.as_deref(),
            Some("Failed to load products. Please try again later.")
        );

        Ok(())
    }

    #[tokio::test]
    async fn load_without_session_never_calls_store() {
        let mut mock = MockProductsService::new();
        mock.expect_list_products().never();

        let mut list = ProductList::new(Arc::new(mock), Session::default(), ListConfig::default());

        let result = list.load().await;

        assert!(
            matches!(result, Err(DashboardError::NoSession)),
            "expected NoSession, got {result:?}"
        );
    }

    #[tokio::test]
    async fn search_matches_customer_name() {
        let products = vec![widget()];
        let mut list = loaded(MockProductsService::new(), products.clone()).await;

        list.set_query("alice");
        let found: Vec<_> = list.filtered_view().cloned().collect();

        list.set_query("bolt");
        let missing = list.filtered_view().count();

        assert_eq!(found, products);
        assert_eq!(missing, 0);
    }

    #[tokio::test]
    async fn shipping_filter_toggles_off() {
        let mut list = loaded(MockProductsService::new(), fixture()).await;
        let sea = ShippingFilter::Only(ShippingMode::Sea);

        list.toggle_shipping_filter(sea);

        assert_eq!(list.filtered_view().count(), 1);

        list.toggle_shipping_filter(sea);

        assert_eq!(list.shipping_filter(), None);
        assert_eq!(list.filtered_view().count(), 3);
    }

    #[tokio::test]
    async fn add_prepends_created_record() -> TestResult {
        let mut mock = MockProductsService::new();
        let created = Product::new(
            ProductUuid::new(),
            details("Bolt", "Dan", "999", ShippingMode::Sea),
        );
        let created_uuid = created.uuid;

        mock.expect_create_product()
            .times(1)
            .returning(move |_, _| Ok(created.clone()));

        let mut list = loaded(mock, fixture()).await;
        list.set_query("alice");

        let uuid = list
            .add(details("Bolt", "Dan", "999", ShippingMode::Sea))
            .await?;

        assert_eq!(uuid, created_uuid);
        assert_eq!(list.products().len(), 4);
        assert_eq!(list.products().first().map(|p| p.uuid), Some(created_uuid));
        assert!(
            !list.filtered_view().any(|p| p.uuid == created_uuid),
            "new record should be hidden by the active query"
        );

        list.set_query("dan");

        assert_eq!(list.filtered_view().next().map(|p| p.uuid), Some(created_uuid));

        Ok(())
    }

    #[tokio::test]
    async fn add_failure_leaves_list_untouched() {
        let mut mock = MockProductsService::new();

        mock.expect_create_product()
            .times(1)
            .returning(|_, _| Err(ProductsServiceError::MissingRequiredData));

        let mut list = loaded(mock, fixture()).await;
        let before = list.products().to_vec();

        let result = list
            .add(details("Bolt", "Dan", "999", ShippingMode::Sea))
            .await;

        assert!(result.is_err(), "expected add to fail");
        assert_eq!(list.products(), before.as_slice());
        assert_eq!(
            list.ui().error.as_deref(),
            Some(Operation::Add.failure_message())
        );
    }

    #[tokio::test]
    async fn editor_create_clamps_quantity_and_lands_first() -> TestResult {
        let mut mock = MockProductsService::new();

        mock.expect_create_product()
            .withf(|_, details| details.quantity == Quantity::ONE)
            .times(1)
            .returning(|_, details| Ok(Product::new(ProductUuid::new(), details)));

        let mut list = loaded(mock, fixture()).await;

        let editor = list.open_create_editor()?;
        editor.attach_image(PNG)?;
        editor.set_name("Bolt")?;
        editor.set_customer_name("Dan")?;
        editor.set_phone_number("999")?;
        editor.set_quantity("0")?;

        let uuid = list.submit_editor().await?;

        let first = list.products().first().ok_or("list is empty")?;

        assert_eq!(first.uuid, uuid);
        assert_eq!(first.details.quantity.get(), 1);
        assert_eq!(list.ui().modal, Modal::Closed);
        assert!(list.editor_mut().is_none());

        Ok(())
    }

    #[tokio::test]
    async fn rejected_editor_stays_open_with_values() -> TestResult {
        let mut mock = MockProductsService::new();

        mock.expect_create_product()
            .times(1)
            .returning(|_, _| Err(ProductsServiceError::InvalidData));

        let mut list = loaded(mock, fixture()).await;

        let editor = list.open_create_editor()?;
        editor.attach_image(PNG)?;
        editor.set_name("Bolt")?;
        editor.set_customer_name("Dan")?;
        editor.set_phone_number("999")?;

        let result = list.submit_editor().await;

        assert!(result.is_err(), "expected submit to fail");
        assert_eq!(list.ui().modal, Modal::Editor);

        let editor = list.editor_mut().ok_or("editor closed")?;

        assert!(!editor.is_pending());
        assert_eq!(editor.draft().name, "Bolt");

        Ok(())
    }

    #[tokio::test]
    async fn invalid_editor_never_reaches_store() -> TestResult {
        let mut mock = MockProductsService::new();
        mock.expect_create_product().never();

        let mut list = loaded(mock, fixture()).await;

        list.open_create_editor()?.set_name("Bolt")?;

        let result = list.submit_editor().await;

        assert!(
            matches!(result, Err(DashboardError::Editor(_))),
            "expected validation error, got {result:?}"
        );
        assert!(list.editor_mut().is_some());

        Ok(())
    }

    #[tokio::test]
    async fn edit_replaces_record_in_place() -> TestResult {
        let products = fixture();
        let target = products.get(1).ok_or("missing record")?.uuid;

        let mut mock = MockProductsService::new();

        mock.expect_update_product()
            .with(mockall::predicate::always(), eq(target), mockall::predicate::always())
            .times(1)
            .returning(|_, uuid, details| Ok(Product::new(uuid, details)));

        let mut list = loaded(mock, products).await;

        let payload = details("Brown rice", "Bob", "123", ShippingMode::Sea);

        list.edit(target, payload.clone()).await?;

        let edited = list.products().get(1).ok_or("missing record")?;

        assert_eq!(edited.uuid, target);
        assert_eq!(edited.details, payload);
        assert_eq!(list.products().len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn edit_unknown_record_skips_store() {
        let mut mock = MockProductsService::new();
        mock.expect_update_product().never();

        let mut list = loaded(mock, fixture()).await;
        let unknown = ProductUuid::new();

        let result = list
            .edit(unknown, details("X", "Y", "1", ShippingMode::Air))
            .await;

        assert!(
            matches!(result, Err(DashboardError::UnknownProduct(uuid)) if uuid == unknown),
            "expected UnknownProduct, got {result:?}"
        );
    }

    #[tokio::test]
    async fn remove_drops_exactly_one_record() -> TestResult {
        let products = fixture();
        let target = products.get(1).ok_or("missing record")?.uuid;
        let survivors: Vec<_> = products
            .iter()
            .filter(|p| p.uuid != target)
            .map(|p| p.uuid)
            .collect();

        let mut mock = MockProductsService::new();
        mock.expect_delete_product().times(1).returning(|_, _| Ok(()));

        let mut list = loaded(mock, products).await;

        list.remove(target).await?;

        let remaining: Vec<_> = list.products().iter().map(|p| p.uuid).collect();

        assert_eq!(remaining, survivors);

        Ok(())
    }

    #[tokio::test]
    async fn failed_remove_keeps_record() -> TestResult {
        let products = fixture();
        let target = products.first().ok_or("missing record")?.uuid;

        let mut mock = MockProductsService::new();
        mock.expect_delete_product()
            .times(1)
            .returning(|_, _| Err(ProductsServiceError::NotFound));

        let mut list = loaded(mock, products).await;

        assert!(list.remove(target).await.is_err(), "expected remove to fail");
        assert_eq!(list.products().len(), 3);
        assert_eq!(list.products().first().map(|p| p.uuid), Some(target));

        Ok(())
    }

    #[tokio::test]
    async fn delete_requires_confirmation() -> TestResult {
        let products = fixture();
        let target = products.first().ok_or("missing record")?.uuid;

        let mut mock = MockProductsService::new();
        mock.expect_delete_product().times(1).returning(|_, _| Ok(()));

        let mut list = loaded(mock, products).await;

        assert!(
            matches!(
                list.confirm_remove().await,
                Err(DashboardError::NothingToConfirm)
            ),
            "confirm without request should fail"
        );

        list.request_remove(target)?;
        list.cancel();

        assert!(
            matches!(
                list.confirm_remove().await,
                Err(DashboardError::NothingToConfirm)
            ),
            "cancel should discard the request"
        );
        assert_eq!(list.products().len(), 3);

        list.request_remove(target)?;
        list.confirm_remove().await?;

        assert_eq!(list.products().len(), 2);
        assert_eq!(list.ui().modal, Modal::Closed);

        Ok(())
    }

    #[tokio::test]
    async fn details_open_for_known_records_only() -> TestResult {
        let products = fixture();
        let target = products.first().ok_or("missing record")?.uuid;

        let mut list = loaded(MockProductsService::new(), products).await;

        assert_eq!(list.open_details(target)?.details.name, "Widget");
        assert_eq!(list.details().map(|p| p.uuid), Some(target));

        let report = list.details_report(&Organization::default(), &ContactInfo::default())?;

        assert_eq!(report.rows.len(), 1);
        assert!(list.open_details(ProductUuid::new()).is_err());

        Ok(())
    }

    #[tokio::test]
    async fn report_covers_filtered_view() -> TestResult {
        let mut list = loaded(MockProductsService::new(), fixture()).await;

        list.set_shipping_filter(Some(ShippingFilter::Only(ShippingMode::Air)));

        let report = list.report(&Organization::default(), &ContactInfo::default())?;

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total.lines(), ["Total Amount: 40.00 USD"]);

        list.set_query("nothing matches");

        assert!(matches!(
            list.report(&Organization::default(), &ContactInfo::default()),
            Err(ExportError::Empty)
        ));

        Ok(())
    }

    #[test]
    fn debug_output_summarises_collaborators() {
        let mut list = ProductList::new(
            Arc::new(MockProductsService::new()),
            signed_in(),
            ListConfig::default(),
        );

        list.observe(Box::new(RecordingObserver::default()));

        let debug = format!("{list:?}");

        assert!(debug.contains("<ProductsService>"), "debug: {debug}");
        assert!(debug.contains("[0 products]"), "debug: {debug}");
        assert!(debug.contains("[1 observers]"), "debug: {debug}");
    }

    #[tokio::test]
    async fn observers_see_state_changes_in_order() {
        let observer = RecordingObserver::default();
        let mut list = ProductList::new(
            Arc::new(MockProductsService::new()),
            signed_in(),
            ListConfig::default(),
        );

        list.observe(Box::new(observer.clone()));
        list.set_view_mode(ViewMode::Table);
        list.set_query("alice");

        assert_eq!(
            observer.events(),
            [
                ListEvent::ViewModeChanged(ViewMode::Table),
                ListEvent::QueryChanged("alice".to_string()),
            ]
        );
    }

    struct SlowProducts;

    #[async_trait]
    impl ProductsService for SlowProducts {
        async fn list_products(
            &self,
            _owner: OwnerUuid,
        ) -> Result<Vec<Product>, ProductsServiceError> {
            tokio::time::sleep(Duration::from_secs(5)).await;

            Ok(Vec::new())
        }

        async fn create_product(
            &self,
            _owner: OwnerUuid,
            _details: ProductDetails,
        ) -> Result<Product, ProductsServiceError> {
            Err(ProductsServiceError::InvalidData)
        }

        async fn update_product(
            &self,
            _owner: OwnerUuid,
            _product: ProductUuid,
            _details: ProductDetails,
        ) -> Result<Product, ProductsServiceError> {
            Err(ProductsServiceError::InvalidData)
        }

        async fn delete_product(
            &self,
            _owner: OwnerUuid,
            _product: ProductUuid,
        ) -> Result<(), ProductsServiceError> {
            Err(ProductsServiceError::NotFound)
        }
    }

    #[tokio::test]
    async fn slow_store_times_out_like_any_failure() {
        let config = ListConfig {
            store_timeout: Duration::from_millis(20),
            ..ListConfig::default()
        };

        let mut list = ProductList::new(Arc::new(SlowProducts), signed_in(), config);

        let result = list.load().await;

        assert!(
            matches!(result, Err(DashboardError::TimedOut { .. })),
            "expected timeout, got {result:?}"
        );
        assert!(list.products().is_empty());
        assert!(list.ui().error.is_some());
        assert!(!list.ui().loading);
    }
}
