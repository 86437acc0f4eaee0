//! Record editor
//!
//! A [`ProductEditor`] is a transient draft of one product. It is opened in
//! create mode with defaults or in modify mode seeded from an existing
//! record, validated on submission, and locked while the commit is in flight.
//!
//! Numeric inputs are coerced as they are entered: quantities below one
//! become one and negative or non-numeric prices become zero.

use std::{fmt::Display, future::Future};

use tracing::{info, warn};

use crate::{
    currency::Currency,
    prices::{Quantity, UnitPrice},
    products::{Product, ProductDetails, ProductUuid},
    shipping::ShippingMode,
};

mod errors;
pub mod image;

pub use errors::*;
pub use image::ImageKind;

/// Default cap on attached images: 5 MiB.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Editor settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Largest image, in bytes, that [`ProductEditor::attach_image`] accepts
    pub max_image_bytes: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

/// Whether the editor creates a new record or modifies an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// New record; the store assigns the identifier
    Create,

    /// Existing record; the identifier never changes
    Modify(ProductUuid),
}

/// Submission state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorState {
    /// Inputs and submit are enabled
    #[default]
    Editing,

    /// A commit is in flight; inputs and submit are disabled
    Pending,

    /// The commit succeeded; the editor is finished
    Committed,
}

/// Draft of a single product record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEditor {
    mode: EditorMode,
    state: EditorState,
    config: EditorConfig,
    draft: ProductDetails,
}

impl ProductEditor {
    /// Empty draft: quantity 1, price 0, USD, air freight.
    pub fn create(config: EditorConfig) -> Self {
        Self {
            mode: EditorMode::Create,
            state: EditorState::Editing,
            config,
            draft: ProductDetails::default(),
        }
    }

    /// Draft pre-filled from `product`.
    pub fn modify(product: &Product, config: EditorConfig) -> Self {
        Self {
            mode: EditorMode::Modify(product.uuid),
            state: EditorState::Editing,
            config,
            draft: product.details.clone(),
        }
    }

    /// Create or modify.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Current submission state.
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Whether inputs are disabled.
    pub fn is_pending(&self) -> bool {
        self.state == EditorState::Pending
    }

    /// Current field values.
    pub fn draft(&self) -> &ProductDetails {
        &self.draft
    }

    /// Set the product name.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is pending or after commit.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), EditorError> {
        self.editable()?.name = name.into();

        Ok(())
    }

    /// Set the customer name.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is pending or after commit.
    pub fn set_customer_name(&mut self, customer: impl Into<String>) -> Result<(), EditorError> {
        self.editable()?.customer_name = customer.into();

        Ok(())
    }

    /// Set the customer phone number.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is pending or after commit.
    pub fn set_phone_number(&mut self, phone: impl Into<String>) -> Result<(), EditorError> {
        self.editable()?.phone_number = phone.into();

        Ok(())
    }

    /// Set the free-text shipping duration.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is pending or after commit.
    pub fn set_shipping_duration(
        &mut self,
        duration: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.editable()?.shipping_duration = duration.into();

        Ok(())
    }

    /// Set the quantity from free-form input, clamping to at least one.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is pending or after commit.
    pub fn set_quantity(&mut self, input: &str) -> Result<(), EditorError> {
        self.editable()?.quantity = Quantity::parse_clamped(input);

        Ok(())
    }

    /// Set the unit price from free-form input, clamping to at least zero.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is pending or after commit.
    pub fn set_price(&mut self, input: &str) -> Result<(), EditorError> {
        self.editable()?.price = UnitPrice::parse_clamped(input);

        Ok(())
    }

    /// Set the currency.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is pending or after commit.
    pub fn set_currency(&mut self, currency: Currency) -> Result<(), EditorError> {
        self.editable()?.currency = currency;

        Ok(())
    }

    /// Set the shipping mode.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is pending or after commit.
    pub fn set_shipping_mode(&mut self, mode: ShippingMode) -> Result<(), EditorError> {
        self.editable()?.shipping_mode = mode;

        Ok(())
    }

    /// Attach raw image bytes, verifying format and size.
    ///
    /// On failure the previous image is kept.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is pending, after commit, or when
    /// the image is empty, too large or not PNG, JPEG, GIF or WebP.
    pub fn attach_image(&mut self, bytes: &[u8]) -> Result<(), EditorError> {
        let limit = self.config.max_image_bytes;
        let draft = self.editable()?;

        draft.image = image::encode_data_url(bytes, limit)?;

        Ok(())
    }

    /// Use an already-hosted image or an existing data URL.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is pending or after commit.
    pub fn set_image_url(&mut self, url: impl Into<String>) -> Result<(), EditorError> {
        self.editable()?.image = url.into();

        Ok(())
    }

    /// Remove the image.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is pending or after commit.
    pub fn clear_image(&mut self) -> Result<(), EditorError> {
        self.editable()?.image.clear();

        Ok(())
    }

    /// Check required fields and build the payload.
    ///
    /// Text fields are trimmed in the payload; the draft keeps what was typed.
    ///
    /// # Errors
    ///
    /// Returns every missing required field.
    pub fn validate(&self) -> Result<ProductDetails, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let image = self.draft.image.trim();

        if image.is_empty() && self.mode == EditorMode::Create {
            errors.push(Field::Image);
        }

        let name = required(&self.draft.name, Field::Name, &mut errors);
        let customer_name = required(&self.draft.customer_name, Field::CustomerName, &mut errors);
        let phone_number = required(&self.draft.phone_number, Field::PhoneNumber, &mut errors);

        errors.into_result(ProductDetails {
            image: image.to_string(),
            name,
            quantity: self.draft.quantity,
            price: self.draft.price,
            currency: self.draft.currency,
            customer_name,
            phone_number,
            shipping_mode: self.draft.shipping_mode,
            shipping_duration: self.draft.shipping_duration.trim().to_string(),
        })
    }

    /// Validate and lock the form, returning the payload to commit.
    ///
    /// # Errors
    ///
    /// - [`EditorError::Pending`]: a submission is already in flight.
    /// - [`EditorError::Invalid`]: required fields are missing; the form stays editable.
    pub fn begin_submit(&mut self) -> Result<ProductDetails, EditorError> {
        self.editable()?;

        let payload = self.validate()?;

        self.state = EditorState::Pending;

        Ok(payload)
    }

    /// Mark the pending submission as committed.
    pub fn complete(&mut self) {
        if self.state == EditorState::Pending {
            info!(mode = ?self.mode, name = %self.draft.name, "product submitted");

            self.state = EditorState::Committed;
        }
    }

    /// Log a rejected submission and unlock the form, keeping every value.
    pub fn reject(&mut self, error: &dyn Display) {
        if self.state == EditorState::Pending {
            warn!(mode = ?self.mode, %error, "product submission rejected");

            self.state = EditorState::Editing;
        }
    }

    /// Validate, lock, hand the payload to `commit` and settle the outcome.
    ///
    /// No retry is attempted; after a rejection the form is editable again.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Editor`]: the editor refused to submit.
    /// - [`SubmitError::Rejected`]: `commit` failed.
    pub async fn submit<F, Fut, T, E>(&mut self, commit: F) -> Result<T, SubmitError<E>>
    where
        F: FnOnce(ProductDetails) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let payload = self.begin_submit()?;

        match commit(payload).await {
            Ok(committed) => {
                self.complete();

                Ok(committed)
            }
            Err(error) => {
                self.reject(&error);

                Err(SubmitError::Rejected(error))
            }
        }
    }

    fn editable(&mut self) -> Result<&mut ProductDetails, EditorError> {
        match self.state {
            EditorState::Editing => Ok(&mut self.draft),
            EditorState::Pending => Err(EditorError::Pending),
            EditorState::Committed => Err(EditorError::Committed),
        }
    }
}

fn required(value: &str, field: Field, errors: &mut ValidationErrors) -> String {
    let value = value.trim();

    if value.is_empty() {
        errors.push(field);
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use rust_decimal::Decimal;
    use testresult::TestResult;
    use thiserror::Error;

    use super::{image::tests::TINY_PNG, *};

    #[derive(Debug, Error, PartialEq)]
    #[error("store unavailable")]
    struct StoreUnavailable;

    fn filled_editor() -> Result<ProductEditor, EditorError> {
        let mut editor = ProductEditor::create(EditorConfig::default());

        editor.attach_image(TINY_PNG)?;
        editor.set_name("Widget")?;
        editor.set_customer_name("Alice")?;
        editor.set_phone_number("555")?;
        editor.set_quantity("2")?;
        editor.set_price("10.0")?;
        editor.set_shipping_duration("7-10 days")?;

        Ok(editor)
    }

    #[test]
    fn create_mode_defaults() {
        let editor = ProductEditor::create(EditorConfig::default());

        assert_eq!(editor.mode(), EditorMode::Create);
        assert_eq!(editor.draft().quantity, Quantity::ONE);
        assert_eq!(editor.draft().price, UnitPrice::ZERO);
        assert_eq!(editor.draft().currency, Currency::Usd);
        assert_eq!(editor.draft().shipping_mode, ShippingMode::Air);
    }

    #[test]
    fn modify_mode_prefills_from_record() -> TestResult {
        let product = Product::new(ProductUuid::new(), filled_editor()?.validate()?);

        let editor = ProductEditor::modify(&product, EditorConfig::default());

        assert_eq!(editor.mode(), EditorMode::Modify(product.uuid));
        assert_eq!(editor.draft(), &product.details);

        Ok(())
    }

    #[test]
    fn quantity_and_price_are_clamped() -> TestResult {
        let mut editor = filled_editor()?;

        editor.set_quantity("0")?;
        editor.set_price("-5")?;

        let payload = editor.validate()?;

        assert_eq!(payload.quantity.get(), 1);
        assert_eq!(payload.price.get(), Decimal::ZERO);

        editor.set_quantity("-3")?;

        assert_eq!(editor.validate()?.quantity.get(), 1);

        Ok(())
    }

    #[test]
    fn create_requires_every_mandatory_field() {
        let editor = ProductEditor::create(EditorConfig::default());

        let errors = editor.validate().err().unwrap_or_default();

        assert_eq!(
            errors.missing(),
            [
                Field::Image,
                Field::Name,
                Field::CustomerName,
                Field::PhoneNumber
            ]
        );
    }

    #[test]
    fn whitespace_only_fields_are_missing() -> TestResult {
        let mut editor = filled_editor()?;
        editor.set_customer_name("   ")?;

        let errors = editor.validate().err().unwrap_or_default();

        assert_eq!(errors.missing(), [Field::CustomerName]);

        Ok(())
    }

    #[test]
    fn modify_mode_does_not_require_an_image() -> TestResult {
        let product = Product::new(
            ProductUuid::new(),
            ProductDetails {
                image: String::new(),
                ..filled_editor()?.validate()?
            },
        );

        let editor = ProductEditor::modify(&product, EditorConfig::default());

        assert!(editor.validate().is_ok());

        Ok(())
    }

    #[test]
    fn oversized_image_is_rejected_and_previous_kept() -> TestResult {
        let mut editor = ProductEditor::create(EditorConfig { max_image_bytes: 4 });
        editor.set_image_url("https://example.com/widget.png")?;

        let result = editor.attach_image(TINY_PNG);

        assert!(matches!(
            result,
            Err(EditorError::Image(ImageError::TooLarge { limit: 4, .. }))
        ));
        assert_eq!(editor.draft().image, "https://example.com/widget.png");

        Ok(())
    }

    #[test]
    fn pending_editor_rejects_input_and_double_submission() -> TestResult {
        let mut editor = filled_editor()?;

        editor.begin_submit()?;

        assert!(editor.is_pending());
        assert_eq!(editor.set_name("Other"), Err(EditorError::Pending));
        assert_eq!(editor.begin_submit(), Err(EditorError::Pending));

        Ok(())
    }

    #[test]
    fn invalid_submission_leaves_form_editable() {
        let mut editor = ProductEditor::create(EditorConfig::default());

        assert!(matches!(editor.begin_submit(), Err(EditorError::Invalid(_))));
        assert_eq!(editor.state(), EditorState::Editing);
    }

    #[tokio::test]
    async fn rejected_commit_keeps_values_and_unlocks() -> TestResult {
        let mut editor = filled_editor()?;
        let before = editor.draft().clone();

        let result: Result<(), _> = editor
            .submit(|_payload| ready(Err::<(), _>(StoreUnavailable)))
            .await;

        assert!(matches!(result, Err(SubmitError::Rejected(StoreUnavailable))));
        assert_eq!(editor.state(), EditorState::Editing);
        assert_eq!(editor.draft(), &before);

        Ok(())
    }

    #[tokio::test]
    async fn successful_commit_receives_complete_payload() -> TestResult {
        let mut editor = filled_editor()?;
        editor.set_quantity("0")?;

        let committed = editor
            .submit(|payload| ready(Ok::<_, StoreUnavailable>(payload)))
            .await?;

        assert_eq!(committed.quantity, Quantity::ONE);
        assert_eq!(committed.name, "Widget");
        assert_eq!(editor.state(), EditorState::Committed);
        assert_eq!(editor.set_name("late"), Err(EditorError::Committed));

        Ok(())
    }
}
