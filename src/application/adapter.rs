//! TapjoyAdapter - The partner adapter the mediation host drives.
//!
//! Owns the shared SDK and dispatcher handles, performs setup, forwards
//! privacy signals to the SDK's policy object and creates one `TapjoyAd` per
//! load request.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

use super::ad::{AdContext, TapjoyAd};
use super::connect::ConnectWaiter;
use crate::config::{AdapterConfig, PartnerConfig};
use crate::domain::foundation::{
    AdapterError, AdapterVersion, BidderInfo, FullscreenFormat, LoadRequest, PreBidRequest,
};
use crate::domain::privacy::{GdprConsentStatus, PrivacySetting};
use crate::domain::setup::{PartnerConfiguration, SetupError, SDK_KEY};
use crate::ports::{PartnerAd, PartnerAdapter, PartnerSdk, SessionObserver, UiDispatcher};

/// Internal partner identifier reported to the host.
pub const PARTNER_IDENTIFIER: &str = "tapjoy";

/// Human-friendly partner name reported to the host.
pub const PARTNER_DISPLAY_NAME: &str = "Tapjoy";

/// Adapter version: host 4, partner SDK 13.0.0, adapter build 0.
pub const ADAPTER_VERSION: &str = "4.13.0.0.0";

/// Tapjoy implementation of the host's `PartnerAdapter` contract.
///
/// Ends the SDK session on drop if `set_up` started one.
pub struct TapjoyAdapter {
    sdk: Arc<dyn PartnerSdk>,
    dispatcher: Arc<dyn UiDispatcher>,
    partner: PartnerConfig,
    waiter: ConnectWaiter,
    version: AdapterVersion,
    session_started: AtomicBool,
    test_mode: AtomicBool,
    verbose_logging: AtomicBool,
}

impl TapjoyAdapter {
    /// Creates the adapter and applies the configured feature flags.
    pub fn new(
        sdk: Arc<dyn PartnerSdk>,
        dispatcher: Arc<dyn UiDispatcher>,
        config: &AdapterConfig,
    ) -> Self {
        let adapter = Self {
            waiter: ConnectWaiter::from_config(&config.partner),
            partner: config.partner.clone(),
            sdk,
            dispatcher,
            version: AdapterVersion::from_static(ADAPTER_VERSION),
            session_started: AtomicBool::new(false),
            test_mode: AtomicBool::new(false),
            verbose_logging: AtomicBool::new(false),
        };
        if config.features.test_mode {
            adapter.set_test_mode(true);
        }
        if config.features.verbose_logging {
            adapter.set_verbose_logging(true);
        }
        adapter
    }

    /// Replaces the connect wait policy.
    pub fn with_connect_waiter(mut self, waiter: ConnectWaiter) -> Self {
        self.waiter = waiter;
        self
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode.load(Ordering::SeqCst)
    }

    /// Toggles the partner's test mode.
    pub fn set_test_mode(&self, enabled: bool) {
        self.test_mode.store(enabled, Ordering::SeqCst);
        self.sdk.set_debug_enabled(enabled);
        info!(partner = PARTNER_IDENTIFIER, enabled, "test mode updated");
    }

    pub fn verbose_logging(&self) -> bool {
        self.verbose_logging.load(Ordering::SeqCst)
    }

    /// Toggles the partner's verbose logging.
    pub fn set_verbose_logging(&self, enabled: bool) {
        self.verbose_logging.store(enabled, Ordering::SeqCst);
        self.sdk.set_debug_enabled(enabled);
        info!(partner = PARTNER_IDENTIFIER, enabled, "verbose logging updated");
    }

    fn apply_privacy(&self, setting: PrivacySetting) {
        let policy = self.sdk.privacy_policy();
        match &setting {
            PrivacySetting::SubjectToGdpr(applies) => policy.set_subject_to_gdpr(*applies),
            PrivacySetting::UserConsent(consent) => policy.set_user_consent(consent),
            PrivacySetting::BelowConsentAge(below) => policy.set_below_consent_age(*below),
            PrivacySetting::UsPrivacy(value) => policy.set_us_privacy(value),
        }
        info!(partner = PARTNER_IDENTIFIER, %setting, "privacy updated");
    }
}

#[async_trait]
impl PartnerAdapter for TapjoyAdapter {
    fn partner_identifier(&self) -> &str {
        PARTNER_IDENTIFIER
    }

    fn partner_display_name(&self) -> &str {
        PARTNER_DISPLAY_NAME
    }

    fn adapter_version(&self) -> &AdapterVersion {
        &self.version
    }

    fn partner_sdk_version(&self) -> String {
        self.sdk.version()
    }

    async fn set_up(&self, configuration: &PartnerConfiguration) -> Result<(), SetupError> {
        {
            let Some(sdk_key) = configuration.sdk_key() else {
                warn!(partner = PARTNER_IDENTIFIER, credential = SDK_KEY, "setup failed: missing credential");
                return Err(SetupError::missing_credential(SDK_KEY));
            };

            info!(
                partner = PARTNER_IDENTIFIER,
                host_major = self.version.host_major(),
                adapter_build = self.version.adapter_build(),
                "setup started"
            );
            self.sdk.start_session();
            self.session_started.store(true, Ordering::SeqCst);
            self.sdk.connect(sdk_key.expose_secret());
        }

        match self.waiter.wait(self.sdk.as_ref()).await {
            Ok(()) => {
                info!(
                    partner = PARTNER_IDENTIFIER,
                    sdk_version = %self.sdk.version(),
                    "setup succeeded"
                );
                Ok(())
            }
            Err(err) => {
                warn!(partner = PARTNER_IDENTIFIER, error = %err, code = %err.code(), "setup failed");
                Err(err)
            }
        }
    }

    async fn fetch_bidder_information(&self, request: &PreBidRequest) -> Option<BidderInfo> {
        debug!(
            partner = PARTNER_IDENTIFIER,
            placement = %request.chartboost_placement,
            "no bidder information"
        );
        None
    }

    fn set_gdpr(&self, applies: Option<bool>, status: GdprConsentStatus) {
        for setting in PrivacySetting::for_gdpr(applies, status) {
            self.apply_privacy(setting);
        }
    }

    fn set_coppa(&self, is_child_directed: bool) {
        self.apply_privacy(PrivacySetting::BelowConsentAge(is_child_directed));
    }

    fn set_ccpa(&self, has_given_consent: bool, privacy_string: Option<&str>) {
        match PrivacySetting::for_ccpa(privacy_string) {
            Some(setting) => self.apply_privacy(setting),
            None => debug!(
                partner = PARTNER_IDENTIFIER,
                has_given_consent,
                "no US privacy string to forward"
            ),
        }
    }

    fn make_ad(
        &self,
        request: LoadRequest,
        observer: Weak<dyn SessionObserver>,
    ) -> Result<Arc<dyn PartnerAd>, AdapterError> {
        let format = FullscreenFormat::try_from(request.format()).map_err(|err| {
            warn!(
                partner = PARTNER_IDENTIFIER,
                placement = %request.partner_placement(),
                format = %request.format(),
                "unsupported ad format"
            );
            err
        })?;

        let ad = TapjoyAd::create(
            AdContext {
                sdk: &self.sdk,
                dispatcher: &self.dispatcher,
                mediation_agent: &self.partner.mediation_agent,
                adapter_version: &self.version,
            },
            request,
            format,
            observer,
        )?;
        Ok(ad)
    }
}

impl Drop for TapjoyAdapter {
    fn drop(&mut self) {
        if self.session_started.load(Ordering::SeqCst) {
            self.sdk.end_session();
            debug!(partner = PARTNER_IDENTIFIER, "partner session ended");
        }
    }
}
