//! Partner adapter ports - The contract the mediation host drives.
//!
//! The host creates one `PartnerAdapter` per partner network, sets it up
//! once, forwards privacy signals to it, and asks it for a fresh `PartnerAd`
//! for every load request. Ads are never reused across loads.

use async_trait::async_trait;
use std::sync::{Arc, Weak};

use super::{SessionObserver, ViewHandle};
use crate::domain::foundation::{
    AdapterError, AdapterVersion, BidderInfo, LoadRequest, PreBidRequest, SessionId,
};
use crate::domain::lifecycle::{Completion, LoadError, ShowError};
use crate::domain::privacy::GdprConsentStatus;
use crate::domain::setup::{PartnerConfiguration, SetupError};

/// Port for a partner network adapter.
///
/// # Example
///
/// ```ignore
/// adapter.set_up(&configuration).await?;
/// let ad = adapter.make_ad(request, Arc::downgrade(&observer) as Weak<dyn SessionObserver>)?;
/// let (completion, outcome) = Completion::channel();
/// ad.load(completion);
/// outcome.await?;
/// ```
#[async_trait]
pub trait PartnerAdapter: Send + Sync {
    /// Internal partner identifier.
    fn partner_identifier(&self) -> &str;

    /// Human-friendly partner name.
    fn partner_display_name(&self) -> &str;

    fn adapter_version(&self) -> &AdapterVersion;

    fn partner_sdk_version(&self) -> String;

    /// Initializes the partner SDK so it can load ads.
    async fn set_up(&self, configuration: &PartnerConfiguration) -> Result<(), SetupError>;

    /// Returns bidding tokens for an auction, or `None` if the partner has none.
    async fn fetch_bidder_information(&self, request: &PreBidRequest) -> Option<BidderInfo>;

    /// `applies` is `None` when the publisher has not said whether GDPR applies.
    fn set_gdpr(&self, applies: Option<bool>, status: GdprConsentStatus);

    fn set_coppa(&self, is_child_directed: bool);

    fn set_ccpa(&self, has_given_consent: bool, privacy_string: Option<&str>);

    /// Creates the ad in charge of a single load request.
    fn make_ad(
        &self,
        request: LoadRequest,
        observer: Weak<dyn SessionObserver>,
    ) -> Result<Arc<dyn PartnerAd>, AdapterError>;
}

/// Port for a single partner ad instance.
pub trait PartnerAd: Send + Sync {
    fn session_id(&self) -> &SessionId;

    fn request(&self) -> &LoadRequest;

    /// Loads the ad; the completion fires exactly once.
    fn load(&self, completion: Completion<LoadError>);

    /// Shows a loaded ad; the completion fires at most once.
    fn show(&self, view: &ViewHandle, completion: Completion<ShowError>);

    /// Called by the host before it discards the ad.
    fn invalidate(&self);
}
